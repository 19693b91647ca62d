//! Configuration structures and loading logic.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Basic-auth credentials for the foauth gateway.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountConfig {
    /// Email to authenticate foauth with.
    #[serde(default)]
    pub email: String,

    /// Password to authenticate foauth with.
    #[serde(default)]
    pub password: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// The foauth endpoint to use.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// The directory downloaded images are written to.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            output_directory: default_output_directory(),
        }
    }
}

fn default_endpoint() -> String {
    "https://foauth.org".to_string()
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("Instadown")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
