//! Response builders for the skill endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::kakao::response_builder::{create_callback_ack, format_result};

pub const BUSY_MESSAGE: &str = "요청이 많아 처리할 수 없습니다. 잠시 후 다시 시도해 주세요.";

/// 200 with the callback acknowledgement.
#[must_use]
pub fn ok_callback_ack() -> Response {
    (StatusCode::OK, Json(create_callback_ack())).into_response()
}

/// Error response carrying a simple-text envelope the platform can show.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    (status, Json(format_result(message))).into_response()
}
