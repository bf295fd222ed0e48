/// kakaobot - a Kakao i Open Builder skill server that answers through callbacks.
///
/// Every skill request is acknowledged immediately with `useCallback: true`;
/// the real answer is produced by a background pipeline and POSTed to the
/// callback address supplied with the request.
///
/// # Architecture
///
/// - `api`: axum routes that parse the skill payload, launch a task and ack
/// - `worker`: the bounded launcher, the three pipelines (text completion,
///   page summarization, image text extraction) and callback delivery
/// - `ai`: chat-completion client and prompt building
/// - `ocr`: grayscale/threshold normalization and the OCR engine
/// - `kakao`: skill payload parsing and response envelopes
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use kakaobot::ai::LlmClient;
/// use kakaobot::core::config::AppConfig;
/// use kakaobot::ocr::TesseractRecognizer;
/// use kakaobot::worker::{TaskLauncher, WorkerDeps};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     kakaobot::setup_logging();
///     let config = AppConfig::from_env()?;
///
///     let http_client = reqwest::Client::new();
///     let llm = LlmClient::new(
///         http_client.clone(),
///         config.openai_api_key.clone(),
///         config.openai_org_id.clone(),
///         config.model_name().to_string(),
///         config.base_url().to_string(),
///     );
///     let recognizer = TesseractRecognizer::new(&config.tesseract_cmd, &config.ocr_languages);
///     let deps = WorkerDeps::new(http_client, Arc::new(llm), Arc::new(recognizer));
///
///     let (launcher, pool) = TaskLauncher::start(deps, config.worker_count, config.queue_capacity);
///     let app = kakaobot::api::router(launcher);
///     let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
///     axum::serve(listener, app).await?;
///     pool.join().await;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod kakao;
pub mod ocr;
pub mod utils;
pub mod worker;

pub use errors::BotError;

/// Configure structured JSON logging.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// kakaobot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
