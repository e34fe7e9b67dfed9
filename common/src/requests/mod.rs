//! The `/sendfile` multipart contract shared by the form and the host.
//!
//! A submission is a `multipart/form-data` POST with two parts:
//! - `file`: the raw file bytes,
//! - `options`: a JSON array of option names, e.g. `["EMAIL_ADDRESS","US_SSN"]`.

use std::collections::HashSet;

use crate::error::OptionsCodecError;
use crate::model::tag::TagOption;

/// Relative path of the upload endpoint.
pub const SENDFILE_PATH: &str = "/sendfile";

/// Multipart field holding the file content.
pub const FILE_FIELD: &str = "file";

/// Multipart field holding the JSON-encoded options.
pub const OPTIONS_FIELD: &str = "options";

/// Everything needed to build one upload request.
///
/// Produced by `FormState::begin_submit` once validation passed.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPlan<F> {
    file: F,
    options: Vec<TagOption>,
}

impl<F> UploadPlan<F> {
    pub(crate) fn new(file: F, options: Vec<TagOption>) -> Self {
        Self { file, options }
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn options(&self) -> &[TagOption] {
        &self.options
    }

    /// Value of the `options` multipart field.
    pub fn options_json(&self) -> Result<String, OptionsCodecError> {
        encode_options(&self.options)
    }
}

pub fn encode_options(options: &[TagOption]) -> Result<String, OptionsCodecError> {
    Ok(serde_json::to_string(options)?)
}

/// Parses an `options` field value, rejecting unknown names and repeats.
pub fn decode_options(raw: &[u8]) -> Result<Vec<TagOption>, OptionsCodecError> {
    let options: Vec<TagOption> = serde_json::from_slice(raw)?;
    let mut seen = HashSet::with_capacity(options.len());
    for tag in &options {
        if !seen.insert(*tag) {
            return Err(OptionsCodecError::Duplicate(tag.to_string()));
        }
    }
    Ok(options)
}
