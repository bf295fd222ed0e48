//! Background pipelines, callback delivery and the task launcher

pub mod completion;
pub mod deliver;
pub mod handler;
pub mod image_text;
pub mod launcher;
pub mod summarize;

use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::ai::CompletionService;
use crate::ocr::TextRecognizer;

pub use deliver::CallbackDispatcher;
pub use handler::process_task;
pub use launcher::{LaunchError, TaskLauncher, WorkerPool};

/// Delivered instead of an empty OCR result.
pub const NO_TEXT_RECOGNIZED: &str = "텍스트를 인식하지 못했습니다.";

pub const COMPLETION_FAILURE_PREFIX: &str = "답변을 생성하는 중 오류가 발생했습니다";
pub const PAGE_FAILURE_PREFIX: &str = "웹 페이지를 가져오는 중 오류가 발생했습니다";
pub const OCR_FAILURE_PREFIX: &str = "OCR 처리 중 오류 발생";

/// Sent when a pipeline aborts before reaching its own delivery.
pub const TASK_FAILURE_MESSAGE: &str = "요청을 처리하는 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

/// Process-wide handles shared by every pipeline. Built once at startup.
#[derive(Clone)]
pub struct WorkerDeps {
    pub http_client: HttpClient,
    pub llm: Arc<dyn CompletionService>,
    pub recognizer: Arc<dyn TextRecognizer>,
    pub dispatcher: CallbackDispatcher,
}

impl WorkerDeps {
    #[must_use]
    pub fn new(
        http_client: HttpClient,
        llm: Arc<dyn CompletionService>,
        recognizer: Arc<dyn TextRecognizer>,
    ) -> Self {
        let dispatcher = CallbackDispatcher::new(http_client.clone());
        Self {
            http_client,
            llm,
            recognizer,
            dispatcher,
        }
    }
}
