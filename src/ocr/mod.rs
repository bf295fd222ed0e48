//! Image normalization and optical character recognition

pub mod preprocess;
pub mod tesseract;

use async_trait::async_trait;
use image::GrayImage;

use crate::errors::BotError;

pub use preprocess::{BINARIZE_THRESHOLD, binarize};
pub use tesseract::TesseractRecognizer;

/// An OCR engine. Returns the recognized text, possibly empty.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: GrayImage) -> Result<String, BotError>;
}
