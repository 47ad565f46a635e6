//! Optional `news_app.ron` configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use news_core::{ApiConfig, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE};
use news_engine::TransportSettings;
use news_logging::{news_warn, LogDestination};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_FILENAME: &str = "news_app.ron";
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub api_key: String,
    pub page_size: u32,
    pub data_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub log: LogTarget,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: "test".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            data_dir: PathBuf::from(".news_app"),
            request_timeout_secs: 30,
            log: LogTarget::File,
        }
    }
}

impl AppConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }

    pub fn api_config(&self) -> ApiConfig {
        let defaults = ApiConfig::default();
        let endpoint = match Url::parse(&self.endpoint) {
            Ok(url) => url,
            Err(err) => {
                news_warn!(
                    "Invalid endpoint {:?} ({}); using {}",
                    self.endpoint,
                    err,
                    defaults.endpoint
                );
                defaults.endpoint
            }
        };
        ApiConfig {
            endpoint,
            api_key: self.api_key.clone(),
            page_size: self.page_size.max(1),
        }
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            ..TransportSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_config(), ApiConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"(api_key: "abc", page_size: 10, log: Both)"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.log, LogTarget::Both);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(api_key: ").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn env_key_overrides_file_key() {
        let config = AppConfig::default().with_api_key_override(Some("env-key".to_string()));
        assert_eq!(config.api_config().api_key, "env-key");

        let config = AppConfig::default().with_api_key_override(Some("  ".to_string()));
        assert_eq!(config.api_key, "test");
    }

    #[test]
    fn bad_endpoint_falls_back_to_default() {
        let config = AppConfig {
            endpoint: "not a url".to_string(),
            page_size: 0,
            ..AppConfig::default()
        };
        let api = config.api_config();
        assert_eq!(api.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(api.page_size, 1);
    }
}
