//! Types shared by the upload form frontend and the host backend.
//!
//! - `model`: the tag enumeration, form and dropdown state, host receipt.
//! - `requests`: the `/sendfile` multipart contract.
//! - `subscription`: scoped listener registration.
//! - `error`: typed validation and codec errors.

pub mod error;
pub mod model;
pub mod requests;
pub mod subscription;
