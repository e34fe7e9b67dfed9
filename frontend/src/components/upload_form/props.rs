//! Properties accepted by the `UploadFormComponent`.

use common::requests::SENDFILE_PATH;
use yew::prelude::*;

/// Properties for the `UploadFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct UploadFormProps {
    /// Heading shown above the form.
    #[prop_or(AttrValue::Static("Upload File"))]
    pub title: AttrValue,

    /// Relative URL the multipart payload is posted to. Defaults to `/sendfile`.
    #[prop_or(AttrValue::Static(SENDFILE_PATH))]
    pub endpoint: AttrValue,
}
