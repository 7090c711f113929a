use std::future::Future;

use serde_json::Value;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::error::{UploadError, ValidationError};
use crate::gateway::{upload_transactions, Backend};
use crate::validator::validate_upload;

const JSON_MIME: &str = "application/json";

pub fn is_json_file(name: &str, mime: &str) -> bool {
    mime.eq_ignore_ascii_case(JSON_MIME) || name.to_ascii_lowercase().ends_with(".json")
}

/// The whole upload path for one selected file: type check, read, parse,
/// strict validation, then a single POST. Every failure before the POST is
/// local; `read` is not even awaited when the file type is wrong.
pub async fn upload_file<B, R>(
    backend: &B,
    name: &str,
    mime: &str,
    read: R,
) -> Result<usize, UploadError>
where
    B: Backend + ?Sized,
    R: Future<Output = Result<String, ValidationError>>,
{
    if !is_json_file(name, mime) {
        log::warn!("rejected {} ({}): not a JSON file", name, mime);
        return Err(ValidationError::UnsupportedFile.into());
    }

    let contents = read.await?;
    let payload: Value =
        serde_json::from_str(&contents).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    let records = validate_upload(&payload)?;

    log::info!("uploading {} transactions from {}", records.len(), name);
    let receipt = upload_transactions(backend, &payload).await?;
    if let Some(message) = &receipt.message {
        log::debug!("backend: {}", message);
    }
    if !receipt.categories.is_empty() {
        log::info!("categories on record: {}", receipt.categories.join(", "));
    }
    Ok(receipt.accepted_count(records.len()))
}

pub async fn read_file_text(file: File) -> Result<String, ValidationError> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| ValidationError::Unreadable(format!("{:?}", e)))?;
    text.as_string()
        .ok_or_else(|| ValidationError::Unreadable("file is not text".to_string()))
}
