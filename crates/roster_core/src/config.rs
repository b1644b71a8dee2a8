//! Application configuration.
//!
//! Optional JSON file, every key defaulted:
//! ```json
//! {
//!   "logLevel": "info",
//!   "logDir": "/var/log/roster",
//!   "sessionDir": ".roster",
//!   "sessionSlot": "user",
//!   "seedDemoRoster": false
//! }
//! ```

use crate::logging::{default_log_level, normalize_level};
use crate::session::storage::DEFAULT_SESSION_SLOT;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DEFAULT_SESSION_DIR: &str = ".roster";

/// Configuration load/validation failures.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Roster application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterConfig {
    pub log_level: String,
    /// Absolute directory for rolling logs; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// Directory holding the durable session slot.
    pub session_dir: PathBuf,
    pub session_slot: String,
    /// Start with the demo students instead of an empty roster.
    pub seed_demo_roster: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            session_slot: DEFAULT_SESSION_SLOT.to_string(),
            seed_demo_roster: false,
        }
    }
}

impl RosterConfig {
    /// Loads settings from `path`; a missing file yields defaults.
    ///
    /// # Errors
    /// Unreadable or malformed files, and values rejected by [`Self::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match std::fs::read_to_string(path) {
            Ok(contents) => {
                serde_json::from_str::<Self>(&contents).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let slot = self.session_slot.trim();
        if slot.is_empty() {
            return Err(ConfigError::Invalid("sessionSlot cannot be empty".to_string()));
        }
        if slot.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "sessionSlot must be a plain name, got `{slot}`"
            )));
        }

        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "logDir must be an absolute path, got `{}`",
                    log_dir.display()
                )));
            }
        }
        Ok(())
    }
}
