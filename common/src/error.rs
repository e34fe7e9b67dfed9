use thiserror::Error;

/// Client-side reason a submission never leaves the form.
///
/// The `Display` text is what the user sees in the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file.")]
    MissingFile,
    #[error("Please select at least one option.")]
    NoOptions,
    #[error("An upload is already in progress.")]
    InFlight,
}

/// A string that is not one of the fixed redaction categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown redaction option `{0}`")]
pub struct UnknownTag(pub String);

/// Failure encoding or decoding the `options` multipart field.
#[derive(Debug, Error)]
pub enum OptionsCodecError {
    #[error("options field is not a JSON array of known options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("options field repeats `{0}`")]
    Duplicate(String),
}
