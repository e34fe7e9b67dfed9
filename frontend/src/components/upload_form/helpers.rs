//! Utility functions for the upload form component.
//!
//! - **User Feedback**: blocking alerts for validation failures and upload outcomes.
//! - **Upload**: turning an `UploadPlan` into `FormData` and posting it.
//! - **Formatting**: small pure helpers used by `view.rs`.

use common::error::OptionsCodecError;
use common::requests::{UploadPlan, FILE_FIELD, OPTIONS_FIELD};
use gloo_net::http::Request;
use num_format::{Locale, ToFormattedString};
use thiserror::Error;
use web_sys::{File, FormData};

pub const SUCCESS_MESSAGE: &str = "File sent successfully!";
pub const FAILURE_MESSAGE: &str = "Something went wrong!";

/// Anything that can go wrong between building the payload and parsing the reply.
///
/// The user sees a single generic failure regardless of the variant; the
/// detail only goes to the console.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("could not encode options: {0}")]
    Options(#[from] OptionsCodecError),
    #[error("could not build form data: {0}")]
    Payload(String),
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
}

/// Shows a blocking browser alert. Outside a window this is a no-op.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Builds the multipart body for `plan`: the raw file under `file` and the
/// JSON-encoded options under `options`.
pub fn build_form_data(plan: &UploadPlan<File>) -> Result<FormData, UploadError> {
    let options = plan.options_json()?;
    let form_data = FormData::new().map_err(|e| UploadError::Payload(format!("{e:?}")))?;
    let file = plan.file();
    form_data
        .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| UploadError::Payload(format!("{e:?}")))?;
    form_data
        .append_with_str(OPTIONS_FIELD, &options)
        .map_err(|e| UploadError::Payload(format!("{e:?}")))?;
    Ok(form_data)
}

/// Posts the plan to `endpoint` once and parses the reply as JSON.
///
/// The reply's shape is not checked; only that it is JSON.
pub async fn send_upload(
    endpoint: &str,
    plan: &UploadPlan<File>,
) -> Result<serde_json::Value, UploadError> {
    let body = build_form_data(plan)?;
    let response = Request::post(endpoint).body(body)?.send().await?;
    Ok(response.json::<serde_json::Value>().await?)
}

/// Alert text for a settled upload: one generic message per outcome,
/// whatever the failure cause.
pub fn outcome_message(outcome: &Result<serde_json::Value, UploadError>) -> &'static str {
    match outcome {
        Ok(_) => SUCCESS_MESSAGE,
        Err(_) => FAILURE_MESSAGE,
    }
}

/// Renders a byte count as `"12,345 bytes"`.
pub fn format_file_size(bytes: u64) -> String {
    let unit = if bytes == 1 { "byte" } else { "bytes" };
    format!("{} {}", bytes.to_formatted_string(&Locale::en), unit)
}

/// CSS classes for one entry of the options list.
pub fn option_classes(selected: bool) -> &'static str {
    if selected {
        "dropdown-option selected"
    } else {
        "dropdown-option"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_uses_thousands_separators() {
        assert_eq!(format_file_size(0), "0 bytes");
        assert_eq!(format_file_size(1), "1 byte");
        assert_eq!(format_file_size(1_048_576), "1,048,576 bytes");
    }

    #[test]
    fn any_json_reply_counts_as_success() {
        let outcome = Ok(serde_json::json!({ "anything": [1, 2, 3] }));
        assert_eq!(outcome_message(&outcome), "File sent successfully!");
        assert_eq!(outcome_message(&Ok(serde_json::Value::Null)), SUCCESS_MESSAGE);
    }

    #[test]
    fn every_failure_cause_shares_one_message() {
        let payload = Err(UploadError::Payload("FormData unavailable".to_string()));
        assert_eq!(outcome_message(&payload), "Something went wrong!");

        let codec: Result<serde_json::Value, _> = serde_json::from_str::<serde_json::Value>("<html>")
            .map_err(|e| UploadError::Options(OptionsCodecError::Json(e)));
        assert_eq!(outcome_message(&codec), FAILURE_MESSAGE);
    }

    #[test]
    fn selected_options_are_marked() {
        assert!(option_classes(true).contains("selected"));
        assert!(!option_classes(false).contains("selected"));
    }
}
