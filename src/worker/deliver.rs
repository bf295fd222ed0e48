use reqwest::Client as HttpClient;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::BotError;
use crate::kakao::response_builder::OutboundEnvelope;

/// Posts finished results to the platform callback address.
///
/// Delivery is a single best-effort POST: failures are logged and never
/// reach the caller, and nothing is retried.
#[derive(Debug, Clone)]
pub struct CallbackDispatcher {
    http_client: HttpClient,
}

impl CallbackDispatcher {
    #[must_use]
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Deliver `envelope` to `callback_url`, logging any failure.
    pub async fn deliver(&self, callback_url: &Url, envelope: &OutboundEnvelope) {
        if let Err(e) = self.try_deliver(callback_url, envelope).await {
            error!(
                error_kind = e.kind(),
                callback_url = %callback_url,
                "Callback delivery failed: {}",
                e
            );
        }
    }

    /// Single POST of the envelope; non-2xx statuses are errors.
    pub async fn try_deliver(
        &self,
        callback_url: &Url,
        envelope: &OutboundEnvelope,
    ) -> Result<(), BotError> {
        let resp = self
            .http_client
            .post(callback_url.clone())
            .json(envelope)
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());

        if !status.is_success() {
            return Err(BotError::TransportError(format!(
                "callback POST returned status={} body={}",
                status, body_text
            )));
        }

        info!(status = %status, "Callback delivered");
        debug!("Callback response body: {}", body_text);
        Ok(())
    }
}
