use reqwest::Client as HttpClient;
use tracing::{error, info};
use url::Url;

use super::completion::run_completion;
use super::{PAGE_FAILURE_PREFIX, WorkerDeps};
use crate::errors::BotError;
use crate::kakao::response_builder::format_result;
use crate::utils::html::extract_narrative_text;

/// Fetch `url` and extract its narrative text.
///
/// Non-success statuses fail immediately; nothing is retried.
pub async fn fetch_page_text(http_client: &HttpClient, url: &Url) -> Result<String, BotError> {
    let resp = http_client.get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(BotError::TransportError(format!(
            "GET {} returned status {}",
            url, status
        )));
    }

    let body = resp.text().await?;
    extract_narrative_text(&body)
}

/// Page-summarization pipeline: extract the page text and hand it to the
/// completion pipeline in summary mode.
///
/// A page with no narrative elements is summarized from an empty string.
pub async fn run_page_summary(deps: &WorkerDeps, callback_url: &Url, url: &Url) {
    match fetch_page_text(&deps.http_client, url).await {
        Ok(text) => {
            info!(
                url = %url,
                text_chars = text.chars().count(),
                "Extracted page text"
            );
            run_completion(deps, callback_url, &text, true).await;
        }
        Err(e) => {
            error!(error_kind = e.kind(), url = %url, "Page fetch failed: {}", e);
            let envelope = format_result(&format!("{PAGE_FAILURE_PREFIX}: {e}"));
            deps.dispatcher.deliver(callback_url, &envelope).await;
        }
    }
}
