//! Startup configuration and the settings status command.
//!
//! Everything is resolved once in `run()` and handed to the adapters
//! that need it. Nothing reads the environment or re-checks Tesseract
//! after startup.
//!
//! API key lookup order:
//! 1. `OPENAI_API_KEY` env var (including `.env.local` / `.env`)
//! 2. OS keychain entry `quizsnap` / `openai` (read-only)
//! 3. Placeholder. Every completion then fails authentication and the
//!    answer comes back empty.

use crate::ocr;
use serde::Serialize;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const OCR_LANG_ENV: &str = "OCR_LANG";

pub const PLACEHOLDER_API_KEY: &str = "default_api_key_here";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const KEYRING_SERVICE: &str = "quizsnap";
const KEYRING_USER: &str = "openai";

/// Where the API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeySource {
    Env,
    Keychain,
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub api_key: String,
    pub key_source: KeySource,
    pub base_url: String,
    pub ocr_lang: String,
    /// Tesseract version found at startup, `None` if it is not installed.
    pub tesseract_version: Option<String>,
}

impl AppSettings {
    /// Resolve settings from the process environment and the OS keychain.
    pub fn from_env() -> Self {
        let env_key = non_empty(std::env::var(API_KEY_ENV).ok());
        // Only touch the keychain when the env var is missing.
        let keychain_key = match env_key {
            Some(_) => None,
            None => keychain_api_key(),
        };
        Self::resolve(
            env_key,
            keychain_key,
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(OCR_LANG_ENV).ok(),
        )
    }

    /// Pure resolution step, separated from the lookups for testing.
    pub fn resolve(
        env_key: Option<String>,
        keychain_key: Option<String>,
        base_url: Option<String>,
        ocr_lang: Option<String>,
    ) -> Self {
        let (api_key, key_source) = match (non_empty(env_key), non_empty(keychain_key)) {
            (Some(key), _) => (key, KeySource::Env),
            (None, Some(key)) => (key, KeySource::Keychain),
            (None, None) => (PLACEHOLDER_API_KEY.to_string(), KeySource::Placeholder),
        };

        let base_url = non_empty(base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let ocr_lang = non_empty(ocr_lang).unwrap_or_else(|| ocr::DEFAULT_LANG.to_string());

        Self {
            api_key,
            key_source,
            base_url,
            ocr_lang,
            tesseract_version: None,
        }
    }

    pub fn with_tesseract_version(mut self, version: Option<String>) -> Self {
        self.tesseract_version = version;
        self
    }

    pub fn has_real_key(&self) -> bool {
        self.key_source != KeySource::Placeholder
    }

    /// Startup log line. Never prints the key itself.
    pub fn log_summary(&self) {
        match self.key_source {
            KeySource::Placeholder => log::warn!(
                "[SETTINGS] No {} set, using placeholder key, answers will be empty",
                API_KEY_ENV
            ),
            source => log::info!(
                "[SETTINGS] API key loaded from {:?} ({} chars)",
                source,
                self.api_key.chars().count()
            ),
        }
        log::info!("[SETTINGS] Completion endpoint: {}", self.base_url);
        log::info!("[SETTINGS] OCR language: {}", self.ocr_lang);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn keychain_api_key() -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    match entry.get_password() {
        Ok(key) => {
            log::info!("[SETTINGS] Loaded API key from OS keychain");
            non_empty(Some(key))
        }
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            log::debug!("[SETTINGS] Keychain lookup failed: {}", e);
            None
        }
    }
}

/// What the main window needs to know about configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsStatus {
    pub key_configured: bool,
    pub key_source: KeySource,
    pub ocr_lang: String,
    pub tesseract_version: Option<String>,
}

impl SettingsStatus {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            key_configured: settings.has_real_key(),
            key_source: settings.key_source,
            ocr_lang: settings.ocr_lang.clone(),
            tesseract_version: settings.tesseract_version.clone(),
        }
    }
}

/// Tauri command: report configuration status to the main window.
#[tauri::command]
pub fn get_settings_status(settings: tauri::State<'_, AppSettings>) -> SettingsStatus {
    SettingsStatus::from_settings(&settings)
}
