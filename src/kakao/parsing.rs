use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::core::models::InboundRequest;
use crate::errors::BotError;

/// Action parameter carrying the uploaded image descriptor.
pub const SECURE_IMAGE_PARAM: &str = "secureimage";

#[derive(Debug, Deserialize)]
struct SkillPayload {
    #[serde(rename = "userRequest")]
    user_request: UserRequest,
    #[serde(default)]
    action: Action,
}

#[derive(Debug, Deserialize)]
struct UserRequest {
    #[serde(rename = "callbackUrl")]
    callback_url: Option<String>,
    #[serde(default)]
    utterance: String,
}

#[derive(Debug, Default, Deserialize)]
struct Action {
    #[serde(default)]
    params: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct SecureImage {
    #[serde(rename = "secureUrls")]
    secure_urls: Option<Value>,
}

/// Parse a skill request body into an `InboundRequest`.
///
/// The callback address is mandatory. The `secureimage` parameter is kept
/// as-is; see `first_image_url`.
pub fn parse_skill_request(body: &str) -> Result<InboundRequest, BotError> {
    let payload: SkillPayload = serde_json::from_str(body)
        .map_err(|e| BotError::ParseError(format!("Invalid skill payload: {}", e)))?;

    let raw_callback = payload
        .user_request
        .callback_url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| BotError::ParseError("Missing userRequest.callbackUrl".to_string()))?;
    let callback_url = parse_http_url(&raw_callback)?;

    let mut params = payload.action.params;
    let secure_image = params.remove(SECURE_IMAGE_PARAM);

    Ok(InboundRequest {
        callback_url,
        utterance: payload.user_request.utterance,
        secure_image,
    })
}

/// Parse an absolute http(s) URL.
pub fn parse_http_url(raw: &str) -> Result<Url, BotError> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BotError::ParseError(format!(
            "unsupported URL scheme: {}",
            other
        ))),
    }
}

/// Pick the image to process from the `secureimage` parameter value.
///
/// Only the first URL is used; any further images are ignored.
pub fn first_image_url(raw: &Value) -> Result<Url, BotError> {
    let descriptor: SecureImage = match raw {
        Value::String(s) => serde_json::from_str(s)
            .map_err(|e| BotError::ParseError(format!("Invalid secureimage value: {}", e)))?,
        Value::Object(_) => serde_json::from_value(raw.clone())
            .map_err(|e| BotError::ParseError(format!("Invalid secureimage value: {}", e)))?,
        _ => {
            return Err(BotError::ParseError(
                "secureimage must be a JSON object".to_string(),
            ));
        }
    };

    let secure_urls = descriptor
        .secure_urls
        .ok_or_else(|| BotError::ParseError("Missing secureUrls".to_string()))?;
    let urls = parse_secure_urls(&secure_urls)?;
    if urls.len() > 1 {
        debug!("Ignoring {} additional image(s)", urls.len() - 1);
    }
    urls.into_iter()
        .next()
        .ok_or_else(|| BotError::ParseError("secureUrls is empty".to_string()))
}

/// Deserialize the `secureUrls` list.
///
/// Accepts a JSON array of strings or the platform's `List(a, b, ...)`
/// rendering of the same list.
pub fn parse_secure_urls(value: &Value) -> Result<Vec<Url>, BotError> {
    let items: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    BotError::ParseError("secureUrls entries must be strings".to_string())
                })
            })
            .collect::<Result<_, _>>()?,
        Value::String(s) => parse_list_literal(s)?,
        _ => {
            return Err(BotError::ParseError(
                "secureUrls must be a list".to_string(),
            ));
        }
    };

    items.iter().map(|item| parse_http_url(item)).collect()
}

fn parse_list_literal(raw: &str) -> Result<Vec<String>, BotError> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| BotError::ParseError(format!("Invalid secureUrls array: {}", e)));
    }

    let inner = trimmed
        .strip_prefix("List(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            BotError::ParseError(format!("Unrecognized secureUrls format: {}", trimmed))
        })?;

    // Entries are separated by ", "; a bare comma may appear inside a URL.
    Ok(inner
        .split(", ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}
