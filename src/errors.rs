use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to fetch resource: {0}")]
    TransportError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to recognize text: {0}")]
    RecognitionError(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to get a completion: {0}")]
    CompletionError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl BotError {
    /// Short, stable label for structured log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::TransportError(_) => "transport",
            BotError::DecodeError(_) => "decode",
            BotError::RecognitionError(_) => "recognition",
            BotError::ParseError(_) => "parse",
            BotError::CompletionError(_) => "completion",
            BotError::ConfigError(_) => "config",
        }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::TransportError(error.to_string())
    }
}

impl From<image::ImageError> for BotError {
    fn from(error: image::ImageError) -> Self {
        BotError::DecodeError(error.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(error: serde_json::Error) -> Self {
        BotError::ParseError(error.to_string())
    }
}

impl From<url::ParseError> for BotError {
    fn from(error: url::ParseError) -> Self {
        BotError::ParseError(format!("invalid URL: {}", error))
    }
}

// The OCR engine runs as a child process; I/O failures talking to it are
// recognition failures.
impl From<std::io::Error> for BotError {
    fn from(error: std::io::Error) -> Self {
        BotError::RecognitionError(error.to_string())
    }
}
