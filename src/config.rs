use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GitSemverError, Result};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "gitsemver.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".gitsemver.toml";

/// Represents the complete configuration for git-semver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "error".to_string()
}

/// Controls how describe output is turned into a version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Report uncommitted changes as `+dirty`. When false the dirty marker
    /// from git is ignored; the untagged fallback stays dirty regardless.
    #[serde(default = "default_true")]
    pub show_dirty: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig { show_dirty: true }
    }
}

/// Logging defaults, overridden by `RUST_LOG` or `--verbose`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

/// Locate the configuration file to use, if any.
///
/// Search order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `gitsemver.toml` in current directory
/// 3. `.gitsemver.toml` in user config directory
pub fn find_config_file(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(path) = find_config_file(config_path) else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitSemverError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| GitSemverError::config(format!("cannot parse {}: {}", path.display(), e)))?;

    Ok(config)
}
