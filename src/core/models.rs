use serde_json::Value;
use url::Url;
use uuid::Uuid;

/// Normalized inbound skill request, produced by the platform adapter.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub callback_url: Url,
    pub utterance: String,
    /// Raw `secureimage` action parameter. Only the image route interprets it.
    pub secure_image: Option<Value>,
}

/// Which pipeline a task runs, with its operation-specific payload.
#[derive(Debug, Clone)]
pub enum TaskKind {
    Ask { utterance: String },
    SummarizeUrl { url: Url },
    ExtractImageText { image_url: Url },
}

impl TaskKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Ask { .. } => "ask",
            TaskKind::SummarizeUrl { .. } => "summarize_url",
            TaskKind::ExtractImageText { .. } => "extract_image_text",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineTask {
    pub correlation_id: String,
    pub callback_url: Url,
    pub kind: TaskKind,
}

impl PipelineTask {
    #[must_use]
    pub fn new(callback_url: Url, kind: TaskKind) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            callback_url,
            kind,
        }
    }
}
