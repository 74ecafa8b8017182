//! OCR domain: Tesseract via rusty-tesseract.
//!
//! Wraps the Tesseract CLI for use in the answer pipeline.
//! External code should only use the public functions here.

use image::DynamicImage;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Language used when `OCR_LANG` is not set.
pub const DEFAULT_LANG: &str = "eng";

/// Result of OCR processing.
#[derive(Debug, Clone, Default)]
pub struct OcrOutput {
    pub text: String,
    pub char_count: usize,
    pub latency_ms: u128,
}

impl OcrOutput {
    fn from_text(text: String, latency_ms: u128) -> Self {
        Self {
            char_count: text.chars().count(),
            text,
            latency_ms,
        }
    }
}

/// Recognize text in a captured region.
///
/// The image is converted to grayscale before recognition. Engine
/// failures are logged and yield empty text; an empty image yields empty
/// text without invoking the engine.
pub fn recognize_text(image: &DynamicImage, lang: &str) -> OcrOutput {
    if image.width() == 0 || image.height() == 0 {
        log::debug!("[OCR] Empty image, skipping recognition");
        return OcrOutput::default();
    }

    let start = std::time::Instant::now();
    let gray = image.grayscale();

    match run_tesseract(&gray, lang) {
        Ok(text) => {
            let output = OcrOutput::from_text(text, start.elapsed().as_millis());
            log::info!(
                "[OCR] Extracted {} chars in {}ms",
                output.char_count,
                output.latency_ms
            );
            output
        }
        Err(e) => {
            log::error!("[OCR] Error in OCR processing: {}", e);
            OcrOutput::default()
        }
    }
}

/// Write the image to a scratch PNG and hand it to the Tesseract CLI.
fn run_tesseract(image: &DynamicImage, lang: &str) -> Result<String, String> {
    let path = scratch_path();
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|e| format!("PNG encode failed: {}", e))?;

    let args = rusty_tesseract::Args {
        lang: lang.to_string(),
        ..rusty_tesseract::Args::default()
    };
    let result = rusty_tesseract::Image::from_path(path.clone())
        .and_then(|img| rusty_tesseract::image_to_string(&img, &args))
        .map_err(|e| e.to_string());

    if let Err(e) = std::fs::remove_file(&path) {
        log::debug!("[OCR] Could not remove {}: {}", path.display(), e);
    }
    result
}

fn scratch_path() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("quizsnap-ocr-{}-{}.png", std::process::id(), n))
}

/// Check that the Tesseract binary is reachable.
/// Call once at startup so a missing install shows up in the log early.
pub fn warm_up() -> Option<String> {
    match rusty_tesseract::get_tesseract_version() {
        Ok(version) => Some(version.trim().to_string()),
        Err(e) => {
            log::warn!("[OCR] Tesseract not available: {}", e);
            None
        }
    }
}
