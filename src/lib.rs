//! QuizSnap: Tauri application entry point.
//!
//! This is the app shell that wires together all domains and commands.
//! No business logic lives here, only module declarations, settings
//! resolution, the Tesseract check, state management, and the command
//! registry.
//!
//! Commands are split across:
//!   - commands.rs: region selection + clipboard
//!   - pipeline.rs: show_answer (capture → OCR → completion)
//!   - settings.rs: configuration status for the main window

pub mod capture;
mod commands;
pub mod llm;
pub mod ocr;
pub mod pipeline;
pub mod regions;
pub mod settings;

use llm::OpenAiCompleter;
use pipeline::ScreenTextExtractor;
use regions::RegionState;
use settings::AppSettings;

/// Entry point, called by the binary.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env.local → .env from the crate root, first one found wins.
    let project_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    'env_load: for env_file in [".env.local", ".env"] {
        let path = project_root.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    let start = std::time::Instant::now();
    let tesseract_version = ocr::warm_up();
    match &tesseract_version {
        Some(version) => log::info!(
            "[OCR] {} ready in {}ms",
            version.lines().next().unwrap_or("tesseract"),
            start.elapsed().as_millis()
        ),
        None => log::warn!("[OCR] Install Tesseract to enable text recognition"),
    }

    let settings = AppSettings::from_env().with_tesseract_version(tesseract_version);
    settings.log_summary();
    let completer = OpenAiCompleter::from_settings(&settings);
    let extractor = ScreenTextExtractor::new(settings.ocr_lang.clone());

    tauri::Builder::default()
        .manage(RegionState::new())
        .manage(completer)
        .manage(extractor)
        .manage(settings)
        .invoke_handler(tauri::generate_handler![
            // Selection + utility commands (commands.rs)
            commands::begin_selection,
            commands::selection_press,
            commands::selection_drag,
            commands::selection_release,
            commands::cancel_selection,
            commands::get_regions,
            commands::copy_to_clipboard,
            // Pipeline (pipeline.rs)
            pipeline::show_answer,
            // Settings (settings.rs)
            settings::get_settings_status,
        ])
        .setup(|_app| {
            log::info!("QuizSnap starting up");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error running QuizSnap");
}
