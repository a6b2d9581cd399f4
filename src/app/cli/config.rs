//! TOML configuration file parsing and loading
//!
//! Handles default config file discovery, parsing, and merging file values
//! with command-line arguments. Command-line values always win.

use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use super::args::Args;
use crate::core::error_handling::ContextualError;
use crate::core::validation::{validate_log_format, validate_log_level, ValidationError};

/// Values accepted in `strqueue.toml`
///
/// ```toml
/// head = false
/// sort = true
/// reverse = false
/// max_len = 80
/// log_level = "info"
/// log_format = "ext"
/// log_file = "/tmp/strqueue.log"
/// color = false
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub head: Option<bool>,
    pub sort: Option<bool>,
    pub reverse: Option<bool>,
    pub max_len: Option<usize>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Read {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { message } | ConfigError::Parse { message, .. } => {
                Some(message.as_str())
            }
            ConfigError::Invalid(e) => e.user_message(),
            ConfigError::Read { .. } => None,
        }
    }
}

/// Default location: `<config dir>/Strqueue/strqueue.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Strqueue").join("strqueue.toml"))
}

/// Load the configuration file
///
/// An explicitly named file must exist. The default file is optional and
/// yields an empty configuration when absent.
pub fn load_config(config_file: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = match config_file {
        Some(path) if !path.exists() => {
            return Err(ConfigError::NotFound {
                message: format!(
                    "The specified configuration file does not exist: {}",
                    path.display()
                ),
            });
        }
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(FileConfig::default()),
        },
    };

    log::debug!("Loading configuration from {}", path.display());
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        message: format!("Error reading configuration file {}", path.display()),
        source,
    })?;
    parse_config(&contents).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            message: format!(
                "Error parsing configuration file {}: {}",
                path.display(),
                source.message()
            ),
            source,
        },
        other => other,
    })
}

/// Parse configuration text
pub fn parse_config(contents: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str::<FileConfig>(contents).map_err(|source| ConfigError::Parse {
        message: format!("Error parsing configuration: {}", source.message()),
        source,
    })
}

/// Effective settings after merging the config file with the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub insert_at_head: bool,
    pub sort: bool,
    pub reverse: bool,
    pub max_len: Option<usize>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        if file.max_len == Some(0) {
            return Err(
                ValidationError::new("max_len in configuration must be greater than 0").into(),
            );
        }
        let log_level = args
            .log_level
            .clone()
            .or(file.log_level)
            .map(|level| validate_log_level(&level))
            .transpose()?;
        let log_format = args
            .log_format
            .clone()
            .or(file.log_format)
            .map(|format| validate_log_format(&format))
            .transpose()?;

        Ok(Self {
            insert_at_head: args.head_choice().or(file.head).unwrap_or(false),
            sort: args.sort_choice().or(file.sort).unwrap_or(false),
            reverse: args.reverse_choice().or(file.reverse).unwrap_or(false),
            max_len: args.max_len.or(file.max_len),
            log_level,
            log_format,
            log_file: args.log_file.clone().or(file.log_file),
            color: args.color_choice().or(file.color),
        })
    }

    /// Explicit preference, otherwise color only when stderr is a terminal
    pub fn use_color(&self) -> bool {
        self.color.unwrap_or_else(|| std::io::stderr().is_terminal())
    }
}
