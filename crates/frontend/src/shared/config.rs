//! Runtime configuration read from `window.APP_CONFIG`
//!
//! The page loads `env.js` before the wasm bundle; it defines:
//!
//! ```js
//! window.APP_CONFIG = {
//!   API_BASE_URL: "http://localhost:8082",
//!   CALCULATE_API_BASE_URL: false,
//!   LOG_LEVEL: "debug"            // optional
//! };
//! ```
//!
//! Missing or malformed config falls back to the defaults below.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8082";

/// Host name fragment of the UI deployment, swapped for the fights service
/// host when the base URL is calculated.
const UI_HOST_MARKER: &str = "ui-super-heroes";
const FIGHTS_HOST_MARKER: &str = "rest-fights";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window is not available")]
    NoWindow,
    #[error("failed to read window.APP_CONFIG: {0}")]
    Js(String),
    #[error("invalid window.APP_CONFIG: {0}")]
    Invalid(#[from] serde_wasm_bindgen::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "API_BASE_URL", default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(rename = "CALCULATE_API_BASE_URL", default)]
    pub calculate_api_base_url: bool,
    #[serde(rename = "LOG_LEVEL", default)]
    pub log_level: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            calculate_api_base_url: false,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Console log level; unknown or missing values mean `Debug`.
    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| log::Level::from_str(level.trim()).ok())
            .unwrap_or(log::Level::Debug)
    }

    /// Base URL of the fights service for a page served from
    /// `protocol//host`.
    pub fn resolve_api_base(&self, protocol: &str, host: &str) -> String {
        if self.calculate_api_base_url {
            format!(
                "{}//{}",
                protocol,
                host.replace(UI_HOST_MARKER, FIGHTS_HOST_MARKER)
            )
        } else {
            self.api_base_url.trim_end_matches('/').to_string()
        }
    }
}

/// Reads `window.APP_CONFIG`, or returns the defaults when it is not set.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str("APP_CONFIG"))
        .map_err(|e| ConfigError::Js(format!("{e:?}")))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_wasm_bindgen::from_value(raw)?;
    Ok(config)
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Configuration resolved once per page load.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        load_config().unwrap_or_else(|e| {
            // logger is not initialised yet
            web_sys::console::warn_1(&format!("{e}; using default configuration").into());
            AppConfig::default()
        })
    })
}
