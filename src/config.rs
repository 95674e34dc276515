use crate::constants::{
    APP_DIR_NAME, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_TYPEWRITER_DELAY_MS, MAX_TYPEWRITER_DELAY_MS,
};
use crate::errors::{CvChatError, CvChatResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub typewriter_delay_ms: u64,
    pub include_thinking: bool,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            typewriter_delay_ms: DEFAULT_TYPEWRITER_DELAY_MS,
            include_thinking: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn typewriter_delay(&self) -> Duration {
        Duration::from_millis(self.typewriter_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads the user config (creating it with defaults on first run) and applies
/// the `CVCHAT_BASE_URL` override.
pub fn initialize_config() -> CvChatResult<Config> {
    resolve_config(&get_config_path()?, env::var(BASE_URL_ENV).ok())
}

/// Loads the config at `path`, replaces `base_url` when an override is given
/// and validates the result.
pub fn resolve_config(path: &Path, base_url_override: Option<String>) -> CvChatResult<Config> {
    let mut config = load_or_create(path)?;
    if let Some(url) = base_url_override {
        config.base_url = url;
    }
    validate_config(&config)?;
    Ok(config)
}

/// Reads the config at `path`, or writes the defaults there if it is missing.
pub fn load_or_create(path: &Path) -> CvChatResult<Config> {
    if path.exists() {
        let config_str = fs::read_to_string(path).map_err(|e| {
            CvChatError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| CvChatError::config_error(format!("Failed to parse config: {}", e)))?;

        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CvChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(&config)?;
    fs::write(path, config_str)
        .map_err(|e| CvChatError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(config)
}

/// Directory holding the config file and the log files.
pub fn get_config_dir() -> CvChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| CvChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join(APP_DIR_NAME))
}

fn get_config_path() -> CvChatResult<PathBuf> {
    Ok(get_config_dir()?.join("config.json"))
}

pub fn validate_config(config: &Config) -> CvChatResult<()> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| CvChatError::config_error(format!("Invalid base_url: {}", e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CvChatError::config_error("base_url must be http or https"));
    }

    if config.request_timeout_secs == 0 {
        return Err(CvChatError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    if config.typewriter_delay_ms > MAX_TYPEWRITER_DELAY_MS {
        return Err(CvChatError::config_error(format!(
            "typewriter_delay_ms must be at most {}",
            MAX_TYPEWRITER_DELAY_MS
        )));
    }

    match config.log_level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
        other => Err(CvChatError::config_error(format!(
            "Unknown log_level '{}'",
            other
        ))),
    }
}
