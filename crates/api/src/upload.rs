//! Client for the external file-share service used by the page download
//! flag.
//!
//! The service follows the transfer.sh convention: `PUT {base}/{filename}`
//! with the raw content as the body, responding with the short link as plain
//! text. No retries; a failed upload surfaces to the caller.

use crate::error::{AppError, AppResult};

/// Upload raw page text, returning the short link reported by the service.
pub async fn upload_text(
    http: &reqwest::Client,
    base_url: &str,
    filename: &str,
    text: &str,
) -> AppResult<String> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), filename);

    let response = http
        .put(&url)
        .body(text.to_owned())
        .send()
        .await
        .map_err(|e| AppError::InternalError(format!("File upload failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::InternalError(format!(
            "File share returned {status}"
        )));
    }

    let link = response
        .text()
        .await
        .map_err(|e| AppError::InternalError(format!("File upload failed: {e}")))?;

    Ok(link.trim().to_string())
}
