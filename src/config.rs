//! Configuration loading
//!
//! The config file is optional. Anything missing falls back to defaults, and
//! a file that cannot be used produces a warning instead of an error so the
//! calculator always starts.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{ClipboardBackend, ClipboardConfig, Config, KeysConfig};

use crate::error::CalcError;

const CONFIG_DIR: &str = "calcterm";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a message for the user when it fell back
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location: `~/.config/calcterm/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `path_override` or the default location
pub fn load_config(path_override: Option<&Path>) -> ConfigResult {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return ConfigResult::default(),
        },
    };

    match load_config_from_path(&path) {
        Ok(Some(config)) => {
            log::debug!("loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Ok(None) => ConfigResult::default(),
        Err(err) => {
            log::warn!("{err}");
            ConfigResult {
                config: Config::default(),
                warning: Some(err.to_string()),
            }
        }
    }
}

/// Read and parse one config file; a missing file is `Ok(None)`
pub fn load_config_from_path(path: &Path) -> Result<Option<Config>, CalcError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    parse_config(&contents, path).map(Some)
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config, CalcError> {
    let invalid = |message: String| CalcError::InvalidConfig {
        path: path.display().to_string(),
        message,
    };

    let config: Config = toml::from_str(content).map_err(|e| invalid(e.message().to_string()))?;
    config.keys.validate().map_err(invalid)?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
