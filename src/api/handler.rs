//! Skill endpoints - thin router that validates, launches and acknowledges.
//!
//! Each route parses the skill payload, builds a `PipelineTask`, hands it to
//! the launcher and returns the callback acknowledgement without waiting for
//! the task. Input that cannot be parsed is answered immediately and no task
//! is started.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::post;
use tracing::{error, info, warn};

use super::helpers::{BUSY_MESSAGE, err_response, ok_callback_ack};
use crate::core::models::{InboundRequest, PipelineTask, TaskKind};
use crate::errors::BotError;
use crate::kakao::parsing::{first_image_url, parse_http_url, parse_skill_request};
use crate::worker::TaskLauncher;

#[derive(Clone)]
pub struct AppState {
    pub launcher: TaskLauncher,
}

/// Build the router for the three skill endpoints.
pub fn router(launcher: TaskLauncher) -> Router {
    Router::new()
        .route("/question", post(ask))
        .route("/url", post(summarize_url))
        .route("/img", post(extract_image_text))
        .with_state(AppState { launcher })
}

#[tracing::instrument(level = "info", skip_all)]
async fn ask(State(state): State<AppState>, body: String) -> Response {
    accept(&state, &body, |request| {
        Ok(TaskKind::Ask {
            utterance: request.utterance.clone(),
        })
    })
}

#[tracing::instrument(level = "info", skip_all)]
async fn summarize_url(State(state): State<AppState>, body: String) -> Response {
    accept(&state, &body, |request| {
        let url = parse_http_url(&request.utterance)?;
        Ok(TaskKind::SummarizeUrl { url })
    })
}

#[tracing::instrument(level = "info", skip_all)]
async fn extract_image_text(State(state): State<AppState>, body: String) -> Response {
    accept(&state, &body, |request| {
        let raw = request.secure_image.as_ref().ok_or_else(|| {
            BotError::ParseError("Missing action.params.secureimage".to_string())
        })?;
        let image_url = first_image_url(raw)?;
        Ok(TaskKind::ExtractImageText { image_url })
    })
}

fn accept<F>(state: &AppState, body: &str, select: F) -> Response
where
    F: FnOnce(&InboundRequest) -> Result<TaskKind, BotError>,
{
    let parsed = parse_skill_request(body)
        .and_then(|request| Ok((select(&request)?, request.callback_url)));
    let (kind, callback_url) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error_kind = e.kind(), "Rejected skill request: {}", e);
            return err_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let task = PipelineTask::new(callback_url, kind);
    let correlation_id = task.correlation_id.clone();

    match state.launcher.launch(task) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Acknowledged, result will follow via callback");
            ok_callback_ack()
        }
        Err(e) => {
            error!(correlation_id = %correlation_id, "Failed to launch task: {}", e);
            err_response(StatusCode::SERVICE_UNAVAILABLE, BUSY_MESSAGE)
        }
    }
}
