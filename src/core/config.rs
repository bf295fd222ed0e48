use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::BotError;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_OCR_LANGUAGES: &str = "kor+eng";
pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub worker_count: usize,
    pub queue_capacity: usize,
    pub http_timeout: Duration,
    pub llm_timeout: Duration,
    pub ocr_languages: String,
    pub tesseract_cmd: String,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` when `OPENAI_API_KEY` is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self, BotError> {
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| BotError::ConfigError(format!("OPENAI_API_KEY: {}", e)))?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            worker_count: parse_var("WORKER_COUNT", 8usize)?.max(1),
            queue_capacity: parse_var("QUEUE_CAPACITY", 64usize)?.max(1),
            http_timeout: Duration::from_secs(parse_var("HTTP_TIMEOUT_SECS", 30u64)?),
            llm_timeout: Duration::from_secs(parse_var("LLM_TIMEOUT_SECS", 120u64)?),
            ocr_languages: env::var("OCR_LANGUAGES")
                .unwrap_or_else(|_| DEFAULT_OCR_LANGUAGES.to_string()),
            tesseract_cmd: env::var("TESSERACT_CMD")
                .unwrap_or_else(|_| DEFAULT_TESSERACT_CMD.to_string()),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.openai_base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, BotError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| BotError::ConfigError(format!("{}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
