//! Service configuration
//!
//! Settings are read from a TOML file (see [`paths::config_file`]). A missing
//! file means defaults; a present but malformed file is an error.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8501
//! session_ttl_secs = 1800    # idle sessions are dropped after this
//!
//! [classifier]
//! mode = "static"            # or "remote" (requires the `llm` feature)
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o-mini"
//! api_key_env = "MAU2_LLM_API_KEY"
//! timeout_secs = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::session::DEFAULT_SESSION_TTL;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Classifier selection and remote settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seconds a session may stay idle before it is dropped
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8501
}

const fn default_session_ttl_secs() -> u64 {
    DEFAULT_SESSION_TTL.as_secs()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Idle time after which a session is dropped
    #[must_use]
    pub const fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

/// Which classifier implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    /// Static lookup table only
    #[default]
    Static,
    /// Language-model call with static fallback
    Remote,
}

impl std::fmt::Display for ClassifierMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for ClassifierMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "remote" => Ok(Self::Remote),
            _ => Err(format!("Invalid classifier mode: {s}. Use: static, remote")),
        }
    }
}

/// Classifier settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Implementation selected at startup
    #[serde(default)]
    pub mode: ClassifierMode,
    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model name sent with each request
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the bearer token
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "MAU2_LLM_API_KEY".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: ClassifierMode::default(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from `path`, or from the default location when `None`
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
