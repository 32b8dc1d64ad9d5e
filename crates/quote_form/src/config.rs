use std::{fs, path::Path, time::Duration};

use client_core::DEFAULT_PREDICT_PATH;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "quote.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub predict_path: String,
    pub toast_ttl_ms: u64,
    pub count_up_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            predict_path: DEFAULT_PREDICT_PATH.into(),
            toast_ttl_ms: 3000,
            count_up_ms: 1200,
        }
    }
}

impl Settings {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn count_up(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }

    /// Applies a flat TOML table. Unknown keys and malformed files are ignored.
    pub fn apply_file_str(&mut self, raw: &str) {
        let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
            tracing::warn!("ignoring malformed {SETTINGS_FILE}");
            return;
        };

        if let Some(v) = file_cfg.server_url {
            self.server_url = v;
        }
        if let Some(v) = file_cfg.predict_path {
            self.predict_path = v;
        }
        if let Some(v) = file_cfg.toast_ttl_ms {
            self.toast_ttl_ms = v;
        }
        if let Some(v) = file_cfg.count_up_ms {
            self.count_up_ms = v;
        }
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("QUOTE_SERVER_URL") {
            self.server_url = v;
        }
        if let Some(v) = var("APP__SERVER_URL") {
            self.server_url = v;
        }

        if let Some(v) = var("APP__PREDICT_PATH") {
            self.predict_path = v;
        }

        if let Some(v) = var("APP__TOAST_TTL_MS") {
            if let Ok(parsed) = v.parse::<u64>() {
                self.toast_ttl_ms = parsed;
            }
        }
        if let Some(v) = var("APP__COUNT_UP_MS") {
            if let Ok(parsed) = v.parse::<u64>() {
                self.count_up_ms = parsed;
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    predict_path: Option<String>,
    toast_ttl_ms: Option<u64>,
    count_up_ms: Option<u64>,
}

/// Defaults, then `quote.toml` in the working directory, then environment overrides.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, var: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        settings.apply_file_str(&raw);
    }
    settings.apply_env(var);

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
