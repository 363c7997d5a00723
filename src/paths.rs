//! Centralized path definitions for mau2
//!
//! mau2 keeps no data on disk; the only file it reads is its configuration.
//!
//! ```text
//! ~/.config/mau2/
//! └── config.toml               # Server and classifier settings
//! ```
//!
//! The location can be overridden with the `MAU2_CONFIG` environment
//! variable or the `--config` flag.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "MAU2_CONFIG";

/// Config directory name under the user config dir
const CONFIG_DIR: &str = "mau2";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the config directory.
///
/// Returns `~/.config/mau2/` on Linux (platform config dir elsewhere).
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the config file path.
///
/// Honors `MAU2_CONFIG` when set and non-empty.
#[must_use]
pub fn config_file() -> PathBuf {
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => config_dir().join(CONFIG_FILE),
    }
}
