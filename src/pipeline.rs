//! Show-answer pipeline.
//!
//! capture → OCR for each filled slot (question first, then options)
//! → assemble prompt → one completion call → text for the display.
//!
//! A capture failure on any slot aborts the whole run: the remaining
//! slots are not captured and the completion is never requested.

use crate::capture::{self, CaptureError, Region};
use crate::llm::{self, Completer, OpenAiCompleter};
use crate::ocr;
use crate::regions::{RegionState, Slot, SlotRegion};

/// Turns a screen region into text.
pub trait TextExtractor {
    fn extract_text(&self, region: &Region) -> Result<String, CaptureError>;
}

/// Production extractor: xcap screenshot + Tesseract.
pub struct ScreenTextExtractor {
    ocr_lang: String,
}

impl ScreenTextExtractor {
    pub fn new(ocr_lang: impl Into<String>) -> Self {
        Self {
            ocr_lang: ocr_lang.into(),
        }
    }
}

impl TextExtractor for ScreenTextExtractor {
    fn extract_text(&self, region: &Region) -> Result<String, CaptureError> {
        let image = capture::capture_region(region)?;
        Ok(ocr::recognize_text(&image, &self.ocr_lang).text)
    }
}

/// How a show-answer run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The completion ran; the answer may be empty if it failed.
    Answered(String),
    /// Capture failed for `slot`; nothing was sent.
    Aborted { slot: Slot, error: String },
}

impl AnswerOutcome {
    /// Text for the main window's display area.
    pub fn into_display(self) -> String {
        match self {
            AnswerOutcome::Answered(answer) => answer,
            AnswerOutcome::Aborted { error, .. } => format!("Error taking screenshot: {}\n", error),
        }
    }
}

/// Run the pipeline over `filled`, which must already be in slot order.
pub async fn answer_regions<E, C>(
    filled: &[SlotRegion],
    extractor: &E,
    completer: &C,
) -> AnswerOutcome
where
    E: TextExtractor + Sync,
    C: Completer + Sync,
{
    let start = std::time::Instant::now();
    let mut fragments = Vec::with_capacity(filled.len());

    for entry in filled {
        match extractor.extract_text(&entry.region) {
            Ok(text) => {
                log::info!(
                    "[PIPELINE] {}: {} chars from {}",
                    entry.slot.label(),
                    text.chars().count(),
                    entry.region
                );
                fragments.push(text);
            }
            Err(e) => {
                log::error!("[PIPELINE] {} capture failed: {}", entry.slot.label(), e);
                return AnswerOutcome::Aborted {
                    slot: entry.slot,
                    error: e.to_string(),
                };
            }
        }
    }
    let local_ms = start.elapsed().as_millis();

    let prompt = llm::build_answer_prompt(fragments.as_slice());
    let answer = completer.complete(&prompt).await;

    log::info!(
        "[PIPELINE] Total: {}ms (capture+ocr={}ms, {} regions)",
        start.elapsed().as_millis(),
        local_ms,
        fragments.len()
    );
    AnswerOutcome::Answered(answer)
}

/// Tauri command: capture every filled slot, ask the LLM, return the text to show.
#[tauri::command]
pub async fn show_answer(
    regions: tauri::State<'_, RegionState>,
    extractor: tauri::State<'_, ScreenTextExtractor>,
    completer: tauri::State<'_, OpenAiCompleter>,
) -> Result<String, String> {
    let filled = {
        let guard = regions.slots.lock().map_err(|e| e.to_string())?;
        guard.filled()
    };
    log::info!("[PIPELINE] Show answer: {} filled slots", filled.len());

    let outcome = answer_regions(&filled, extractor.inner(), completer.inner()).await;
    Ok(outcome.into_display())
}
