use std::sync::Arc;

use anyhow::{Context, Result};
use kakaobot::ai::LlmClient;
use kakaobot::core::config::AppConfig;
use kakaobot::ocr::TesseractRecognizer;
use kakaobot::worker::{TaskLauncher, WorkerDeps};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    kakaobot::setup_logging();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let llm_http_client = reqwest::Client::builder()
        .timeout(config.llm_timeout)
        .build()
        .context("Failed to build model HTTP client")?;

    let llm = LlmClient::new(
        llm_http_client,
        config.openai_api_key.clone(),
        config.openai_org_id.clone(),
        config.model_name().to_string(),
        config.base_url().to_string(),
    );
    let recognizer = TesseractRecognizer::new(&config.tesseract_cmd, &config.ocr_languages);
    let deps = WorkerDeps::new(http_client, Arc::new(llm), Arc::new(recognizer));

    let (launcher, pool) = TaskLauncher::start(deps, config.worker_count, config.queue_capacity);
    let app = kakaobot::api::router(launcher);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!(bind_addr = %config.bind_addr, model = config.model_name(), "Skill server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // The router (and with it the last launcher handle) is gone; let the
    // workers drain so accepted callbacks are still delivered.
    info!("Server stopped, waiting for in-flight tasks");
    pool.join().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
