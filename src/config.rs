//! User configuration stored in `~/.version-control-config.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::atomic::write_atomic;
use crate::error::ConfigError;
use crate::i18n::Language;

pub const CONFIG_FILE_NAME: &str = ".version-control-config.json";

/// Persisted user preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Interface language; detected from the environment when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl Config {
    /// Get config file path (~/.version-control-config.json)
    pub fn path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoHomeDirectory)
    }

    /// Load config from the user's home directory.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                debug!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from `path`. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| serde_json::from_str(&contents).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => config,
            Err(e) => {
                debug!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user's home directory.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::SerializeFailed)?;
        write_atomic(path, &format!("{}\n", contents)).map_err(|source| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Language chosen with `config --lang`, if any.
pub fn configured_language() -> Option<Language> {
    Config::load().language
}

/// Persist `language` as the interface language.
pub fn set_language(language: Language) -> Result<(), ConfigError> {
    let mut config = Config::load();
    config.language = Some(language);
    config.save()
}

/// Remove the configured language so detection applies again.
pub fn clear_language() -> Result<(), ConfigError> {
    let mut config = Config::load();
    config.language = None;
    config.save()
}
