use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_registry_url")]
    pub registry_url: String,

    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_geocode_timeout_ms")]
    pub geocode_timeout_ms: u64,

    #[serde(default = "default_geocode_enabled")]
    pub geocode_enabled: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Daily rolling log files are written here when set
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_registry_url() -> String {
    "https://www.arrl.org/advanced-call-sign-search".to_string()
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_user_agent() -> String {
    "arrl_call-sign_search".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_geocode_timeout_ms() -> u64 {
    2000
}

fn default_geocode_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            registry_url: default_registry_url(),
            geocoder_url: default_geocoder_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
            geocode_timeout_ms: default_geocode_timeout_ms(),
            geocode_enabled: default_geocode_enabled(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl SearchConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: SearchConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to the built-in defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_millis(self.geocode_timeout_ms)
    }
}
