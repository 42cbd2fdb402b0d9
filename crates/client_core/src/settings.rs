use std::{collections::HashMap, fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    pub base_url: String,
    pub search_url: String,
    pub request_timeout_secs: u64,
    pub debounce_ms: u64,
    pub search_limit: Option<u32>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api-v2-b2sit6oh3a-uc.a.run.app/".into(),
            search_url: "https://mock.apidog.com/m1/735111-711675-default/search".into(),
            request_timeout_secs: 30,
            debounce_ms: 200,
            search_limit: None,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Defaults, then `catalog.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => apply_file_overrides(&mut settings, &file_cfg),
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable settings file"),
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file_overrides(settings: &mut ClientSettings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_cfg.get("base_url").and_then(toml::Value::as_str) {
        settings.base_url = v.to_string();
    }
    if let Some(v) = file_cfg.get("search_url").and_then(toml::Value::as_str) {
        settings.search_url = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("request_timeout_secs")
        .and_then(toml::Value::as_integer)
        .and_then(|v| u64::try_from(v).ok())
    {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file_cfg
        .get("debounce_ms")
        .and_then(toml::Value::as_integer)
        .and_then(|v| u64::try_from(v).ok())
    {
        settings.debounce_ms = v;
    }
    if let Some(v) = file_cfg
        .get("search_limit")
        .and_then(toml::Value::as_integer)
        .and_then(|v| u32::try_from(v).ok())
    {
        settings.search_limit = Some(v);
    }
}

fn apply_env_overrides(settings: &mut ClientSettings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("CATALOG_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = env("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = env("CATALOG_SEARCH_URL") {
        settings.search_url = v;
    }
    if let Some(v) = env("APP__SEARCH_URL") {
        settings.search_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }

    if let Some(v) = env("APP__DEBOUNCE_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.debounce_ms = parsed;
        }
    }

    if let Some(v) = env("APP__SEARCH_LIMIT") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.search_limit = Some(parsed);
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
