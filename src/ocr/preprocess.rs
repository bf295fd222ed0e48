use image::{GrayImage, ImageFormat, Luma};
use std::io::Cursor;

use crate::errors::BotError;

/// Luminance at or above which a pixel becomes white.
pub const BINARIZE_THRESHOLD: u8 = 150;

/// Decode image bytes, convert to single-channel luminance and apply the
/// global threshold.
pub fn binarize(bytes: &[u8]) -> Result<GrayImage, BotError> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(threshold(decoded.to_luma8(), BINARIZE_THRESHOLD))
}

/// Map every pixel to 255 when `>= level`, else 0.
#[must_use]
pub fn threshold(mut gray: GrayImage, level: u8) -> GrayImage {
    for Luma([value]) in gray.pixels_mut() {
        *value = if *value >= level { u8::MAX } else { 0 };
    }
    gray
}

/// Encode a grayscale image as PNG, the input format handed to the OCR engine.
pub fn encode_png(gray: &GrayImage) -> Result<Vec<u8>, BotError> {
    let mut buf = Cursor::new(Vec::new());
    gray.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
