use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use common::model::receipt::SendFileReceipt;
use common::model::tag::TagOption;
use common::requests::{decode_options, FILE_FIELD, OPTIONS_FIELD};
use futures_util::StreamExt;
use log::{info, warn};
use md5::Context;
use uuid::Uuid;

/// Upper bound for the JSON `options` part. Ten quoted names fit in well under 1 KiB.
const MAX_OPTIONS_BYTES: usize = 4 * 1024;

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: returns `200 OK` with the receipt as JSON.
/// - On failure: returns `400 Bad Request` with the error message.
pub async fn process(payload: Multipart) -> impl Responder {
    match receive_upload(payload).await {
        Ok(receipt) => {
            info!(
                "Received {} ({} bytes, md5 {}) with options {:?}",
                receipt.file_name.as_deref().unwrap_or("<unnamed>"),
                receipt.size,
                receipt.md5,
                receipt.options
            );
            HttpResponse::Ok().json(receipt)
        }
        Err(e) => {
            warn!("Rejected upload: {}", e);
            HttpResponse::BadRequest().body(format!("Error: {}", e))
        }
    }
}

/// Reads the `file` and `options` parts, hashing the file as it streams in.
///
/// Parts may arrive in any order; unknown parts are ignored.
pub async fn receive_upload(
    mut payload: Multipart,
) -> Result<SendFileReceipt, Box<dyn std::error::Error>> {
    let mut file_name: Option<String> = None;
    let mut size: u64 = 0;
    let mut md5_hasher = Context::new();
    let mut file_seen = false;
    let mut options: Option<Vec<TagOption>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match field_name.as_deref() {
            Some(FILE_FIELD) => {
                if file_seen {
                    return Err("Only one file may be sent".into());
                }
                file_seen = true;
                file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    md5_hasher.consume(&chunk);
                    size += chunk.len() as u64;
                }
            }

            Some(OPTIONS_FIELD) => {
                if options.is_some() {
                    return Err("Only one options field may be sent".into());
                }
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    if bytes.len() + chunk.len() > MAX_OPTIONS_BYTES {
                        return Err(format!("Options field exceeds {} bytes", MAX_OPTIONS_BYTES).into());
                    }
                    bytes.extend_from_slice(&chunk);
                }
                let decoded = decode_options(&bytes)?;
                if decoded.is_empty() {
                    return Err("At least one option is required".into());
                }
                options = Some(decoded);
            }

            _ => {}
        }
    }

    if !file_seen {
        return Err("Missing file".into());
    }
    let options = options.ok_or("Missing options")?;

    Ok(SendFileReceipt {
        upload_id: Uuid::new_v4().to_string(),
        file_name,
        size,
        md5: format!("{:x}", md5_hasher.finalize()),
        options,
    })
}
