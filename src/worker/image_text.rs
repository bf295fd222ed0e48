use tracing::{error, info};
use url::Url;

use super::{NO_TEXT_RECOGNIZED, OCR_FAILURE_PREFIX, WorkerDeps};
use crate::errors::BotError;
use crate::kakao::response_builder::{OutboundEnvelope, format_result};
use crate::ocr::binarize;

/// Download, normalize and recognize the image at `image_url`.
///
/// Returns the recognized text verbatim, or the fallback sentinel when the
/// engine found nothing but whitespace.
pub async fn extract_image_text(deps: &WorkerDeps, image_url: &Url) -> Result<String, BotError> {
    let resp = deps.http_client.get(image_url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(BotError::TransportError(format!(
            "GET {} returned status {}",
            image_url, status
        )));
    }
    let bytes = resp.bytes().await?;
    info!(bytes = bytes.len(), "Image downloaded");

    let binarized = tokio::task::spawn_blocking(move || binarize(&bytes))
        .await
        .map_err(|e| BotError::DecodeError(format!("Image processing task failed: {e}")))??;

    let recognized = deps.recognizer.recognize(binarized).await?;
    Ok(substitute_fallback(recognized))
}

/// Replace an empty or whitespace-only recognition result with the
/// fallback sentinel.
#[must_use]
pub fn substitute_fallback(recognized: String) -> String {
    if recognized.trim().is_empty() {
        NO_TEXT_RECOGNIZED.to_string()
    } else {
        recognized
    }
}

/// Image-text pipeline. The recognized text is delivered as-is, without
/// going through the model.
pub async fn run_image_text(deps: &WorkerDeps, callback_url: &Url, image_url: &Url) {
    let envelope = match extract_image_text(deps, image_url).await {
        Ok(text) => format_result(&text),
        Err(e) => {
            error!(
                error_kind = e.kind(),
                image_url = %image_url,
                "Image text extraction failed: {}",
                e
            );
            ocr_error_envelope(&e)
        }
    };

    deps.dispatcher.deliver(callback_url, &envelope).await;
}

#[must_use]
pub fn ocr_error_envelope(error: &BotError) -> OutboundEnvelope {
    format_result(&format!("{OCR_FAILURE_PREFIX}: {error}"))
}
