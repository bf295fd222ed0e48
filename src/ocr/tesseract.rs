use std::process::Stdio;

use async_trait::async_trait;
use image::GrayImage;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::TextRecognizer;
use super::preprocess::encode_png;
use crate::errors::BotError;

/// OCR through the `tesseract` command-line engine.
///
/// The image goes in on stdin as PNG and the recognized text comes back on
/// stdout, so no temporary files are involved.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    command: String,
    languages: String,
}

impl TesseractRecognizer {
    #[must_use]
    pub fn new(command: impl Into<String>, languages: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            languages: languages.into(),
        }
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: GrayImage) -> Result<String, BotError> {
        let png = tokio::task::spawn_blocking(move || encode_png(&image))
            .await
            .map_err(|e| BotError::RecognitionError(format!("PNG encoding task failed: {e}")))??;

        let mut child = Command::new(&self.command)
            .args(["stdin", "stdout", "-l", &self.languages])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                BotError::RecognitionError(format!("Failed to start {}: {e}", self.command))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&png).await?;
            stdin.shutdown().await?;
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(BotError::RecognitionError(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(chars = text.chars().count(), "OCR finished");
        Ok(text)
    }
}
