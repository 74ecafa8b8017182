//! Build script for the QuizSnap Tauri app.
//!
//! Generates the Tauri context (config, capabilities, frontend assets).
//! OCR runs through the Tesseract CLI at runtime, so nothing is linked here.

fn main() {
    tauri_build::build();
}
