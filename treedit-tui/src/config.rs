//! User configuration.
//!
//! Read from `config.json` in the platform config directory. Every field is
//! optional:
//!
//! ```json
//! { "theme": "light", "tree": "/path/to/tree.json", "log_level": "info", "indent": 4 }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use treedit_lib::ThemeMode;

use crate::paths;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Display mode at startup.
    pub theme: ThemeMode,
    /// JSON seed file for the initial tree. The demo tree is used when unset.
    pub tree: Option<PathBuf>,
    pub log_level: String,
    /// Columns of indentation per depth level.
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            tree: None,
            log_level: "debug".into(),
            indent: 2,
        }
    }
}

impl Config {
    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Config = serde_json::from_str(json)?;
        config.indent = config.indent.clamp(1, 8);
        Ok(config)
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
