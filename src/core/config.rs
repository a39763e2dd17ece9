//! Configuration.
//!
//! Resolves the data directory and the encryption key material. Precedence:
//! environment variables, then `~/.vocabvault/config.toml`, then embedded
//! defaults. The config file is optional; a missing file is not an error.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted slots.
    pub data_dir: PathBuf,
    /// Key material for encryption at rest.
    pub secret_key: String,
}

/// Optional on-disk overrides (`~/.vocabvault/config.toml`).
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    secret_key: Option<String>,
}

impl Config {
    /// Load configuration with env > file > default precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if no home directory can be
    /// determined, or `ConfigError::Parse` if an existing config file is
    /// malformed.
    pub fn load() -> Result<Self> {
        let app_dir = app_dir()?;
        let file = load_file(&app_dir)?;

        let data_dir = std::env::var_os(constants::DATA_DIR_ENV)
            .map(PathBuf::from)
            .or(file.data_dir)
            .unwrap_or(app_dir);

        let secret_key = std::env::var(constants::SECRET_KEY_ENV)
            .ok()
            .or(file.secret_key)
            .unwrap_or_else(|| constants::DEFAULT_SECRET_KEY.to_string());

        debug!(data_dir = %data_dir.display(), "config resolved");

        Ok(Self {
            data_dir,
            secret_key,
        })
    }
}

/// Application directory (`~/.vocabvault`).
fn app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(constants::APP_DIR))
}

fn load_file(app_dir: &std::path::Path) -> Result<ConfigFile> {
    let path = app_dir.join(constants::CONFIG_FILE);
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    debug!(path = %path.display(), "loading config file");
    let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
    let file: ConfigFile = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(file)
}
