//! Settings loading and API key storage.
//!
//! Handles:
//! - API key resolution (env var, then OS keychain via keyring crate)
//! - Saving the API key to the keychain
//! - Optional JSON overrides for model, endpoint and locales
//!
//! Settings are loaded once at startup and passed by reference. Without an
//! API key there are no settings and the feature stays off.

use crate::llm::gemini::{GEMINI_ENDPOINT, GEMINI_MODEL};
use crate::prompts::{DEFAULT_ALTERNATE_LOCALE, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const KEYRING_SERVICE: &str = "gloss-panel";
const KEYRING_USER: &str = "gemini";

#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub locale: String,
    pub alternate_locale: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("locale", &self.locale)
            .field("alternate_locale", &self.alternate_locale)
            .finish()
    }
}

/// On-disk overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub locale: Option<String>,
    pub alternate_locale: Option<String>,
}

impl Settings {
    /// Resolve the API key and read the settings file.
    ///
    /// Returns `None` when no API key is configured anywhere.
    pub fn load() -> Option<Settings> {
        let Some(api_key) = resolve_api_key() else {
            log::warn!("[SETTINGS] No {} set — feature disabled", API_KEY_ENV);
            return None;
        };
        let file = load_settings_file(&settings_path());
        let settings = Settings::from_parts(api_key, file);
        log::info!("[SETTINGS] Loaded: {:?}", settings);
        Some(settings)
    }

    /// Apply file overrides on top of the built-in defaults.
    pub fn from_parts(api_key: String, file: SettingsFile) -> Settings {
        Settings {
            api_key,
            model: file.model.unwrap_or_else(|| GEMINI_MODEL.to_string()),
            endpoint: file.endpoint.unwrap_or_else(|| GEMINI_ENDPOINT.to_string()),
            locale: file.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            alternate_locale: file
                .alternate_locale
                .unwrap_or_else(|| DEFAULT_ALTERNATE_LOCALE.to_string()),
        }
    }
}

/// `~/.config/gloss-panel/settings.json` (platform config dir).
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gloss-panel")
        .join("settings.json")
}

/// Read overrides from `path`.
///
/// Returns defaults if the file doesn't exist or is invalid.
pub fn load_settings_file(path: &Path) -> SettingsFile {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return SettingsFile::default(),
    };
    match serde_json::from_str(&raw) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("[SETTINGS] Ignoring invalid {}: {}", path.display(), e);
            SettingsFile::default()
        }
    }
}

/// Find the API key: env var first, then the OS keychain.
fn resolve_api_key() -> Option<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Some(key);
        }
    }

    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    match entry.get_password() {
        Ok(key) if !key.is_empty() => {
            log::info!("[SETTINGS] Loaded API key from OS keychain");
            Some(key)
        }
        _ => None,
    }
}

/// Save an API key to the OS keychain.
///
/// Also sets the env var so the current process picks it up immediately.
pub fn save_api_key(api_key: &str) -> Result<(), String> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err("API key is empty".to_string());
    }
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .map_err(|e| format!("Keyring error: {}", e))?;
    entry
        .set_password(api_key)
        .map_err(|e| format!("Failed to save key: {}", e))?;
    std::env::set_var(API_KEY_ENV, api_key);

    log::info!("[SETTINGS] API key saved to OS keychain");
    Ok(())
}
