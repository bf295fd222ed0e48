#![allow(dead_code)]

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use image::{GrayImage, ImageFormat, Rgb, RgbImage};
use kakaobot::ai::CompletionService;
use kakaobot::ai::client::build_chat_messages;
use kakaobot::errors::BotError;
use kakaobot::ocr::TextRecognizer;
use kakaobot::worker::WorkerDeps;
use openai_api_rs::v1::chat_completion::ChatCompletionMessage;
use serde_json::Value;
use tokio::sync::{Notify, Semaphore};
use url::Url;

/// Completion service double that records every prompt it receives.
pub struct FakeLlm {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<Vec<Value>>>,
    gate: Option<(Arc<Notify>, Arc<Semaphore>)>,
}

impl FakeLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Signals `started` on each call, then waits for a permit on `release`.
    pub fn gated(reply: &str, started: Arc<Notify>, release: Arc<Semaphore>) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
            gate: Some((started, release)),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Vec<Value> {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl CompletionService for FakeLlm {
    async fn complete(&self, messages: Vec<ChatCompletionMessage>) -> Result<String, BotError> {
        self.prompts
            .lock()
            .unwrap()
            .push(build_chat_messages(&messages));

        if let Some((started, release)) = &self.gate {
            started.notify_one();
            let _permit = release.acquire().await.unwrap();
        }

        self.reply
            .clone()
            .map_err(BotError::CompletionError)
    }
}

/// OCR double returning a fixed result and remembering the pixels it saw.
pub struct FakeRecognizer {
    result: Result<String, String>,
    calls: AtomicUsize,
    pub last_pixels: Mutex<Vec<u8>>,
}

impl FakeRecognizer {
    pub fn returning(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_pixels: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_pixels: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextRecognizer for FakeRecognizer {
    async fn recognize(&self, image: GrayImage) -> Result<String, BotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_pixels.lock().unwrap() = image.into_raw();
        self.result.clone().map_err(BotError::RecognitionError)
    }
}

pub fn deps(llm: Arc<FakeLlm>, recognizer: Arc<FakeRecognizer>) -> WorkerDeps {
    WorkerDeps::new(reqwest::Client::new(), llm, recognizer)
}

pub fn url(base: &str, path: &str) -> Url {
    Url::parse(&format!("{base}{path}")).unwrap()
}

/// A 2x1 PNG: one light pixel, one dark pixel.
pub fn two_tone_png() -> Vec<u8> {
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Rgb([220, 220, 220]));
    img.put_pixel(1, 0, Rgb([60, 60, 60]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Raw JSON of the callback envelope for `text`.
pub fn envelope_json(text: &str) -> Value {
    serde_json::json!({
        "version": "2.0",
        "template": {
            "outputs": [
                { "simpleText": { "text": text } }
            ]
        }
    })
}
