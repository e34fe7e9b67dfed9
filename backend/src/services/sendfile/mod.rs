//! Receives uploads posted by the form.
//!
//! - `POST /sendfile`: `multipart/form-data` with a `file` part (raw bytes) and
//!   an `options` part (JSON array of redaction option names). The upload is
//!   hashed and acknowledged with a `SendFileReceipt`; nothing is stored and no
//!   redaction is performed here.

use actix_web::web::{post, resource};
use actix_web::Resource;
use common::requests::SENDFILE_PATH;

mod receive;

/// Configures and returns the Actix resource for the upload endpoint.
pub fn configure_routes() -> Resource {
    resource(SENDFILE_PATH).route(post().to(receive::process))
}
