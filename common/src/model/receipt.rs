use serde::{Deserialize, Serialize};

use crate::model::tag::TagOption;

/// Acknowledgement returned by the host for a `/sendfile` upload.
///
/// The form only checks that a JSON body arrived; the fields are logged to
/// the console for the user's reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendFileReceipt {
    /// Random id assigned to this upload (UUID v4).
    pub upload_id: String,
    /// Client-supplied file name, when the part carried one.
    pub file_name: Option<String>,
    /// Number of bytes received in the `file` part.
    pub size: u64,
    /// Hex MD5 digest of the received bytes.
    pub md5: String,
    /// Decoded `options` field, in the order the client sent them.
    pub options: Vec<TagOption>,
}
