use tracing::{error, info};
use url::Url;

use super::{COMPLETION_FAILURE_PREFIX, WorkerDeps};
use crate::ai::{CompletionService, build_prompt};
use crate::errors::BotError;
use crate::kakao::response_builder::{OutboundEnvelope, format_result};

/// Generate the model's reply for `text`.
pub async fn generate_reply(
    llm: &dyn CompletionService,
    text: &str,
    summarize: bool,
) -> Result<String, BotError> {
    let prompt = build_prompt(text, summarize);
    llm.complete(prompt).await
}

/// Text-completion pipeline: ask the model, then deliver its answer, or a
/// description of the failure, to the callback address.
pub async fn run_completion(deps: &WorkerDeps, callback_url: &Url, text: &str, summarize: bool) {
    let envelope = match generate_reply(deps.llm.as_ref(), text, summarize).await {
        Ok(reply) => {
            info!(summarize, reply_chars = reply.chars().count(), "Completion ready");
            format_result(&reply)
        }
        Err(e) => {
            error!(error_kind = e.kind(), summarize, "Completion failed: {}", e);
            completion_error_envelope(&e)
        }
    };

    deps.dispatcher.deliver(callback_url, &envelope).await;
}

#[must_use]
pub fn completion_error_envelope(error: &BotError) -> OutboundEnvelope {
    format_result(&format!("{COMPLETION_FAILURE_PREFIX}: {error}"))
}
