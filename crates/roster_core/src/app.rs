//! Application composition root.
//!
//! # Responsibility
//! - Construct the roster and session stores once at startup.
//! - Hand them to consumers by reference instead of ambient global lookup.
//!
//! # Invariants
//! - One `RosterApp` owns exactly one roster and one session store.

use crate::config::{ConfigError, RosterConfig};
use crate::logging::{init_logging, LoggingError};
use crate::repo::roster_repo::{InMemoryRosterRepository, RosterRepository};
use crate::service::roster_service::RosterService;
use crate::session::credentials::{CredentialVerifier, MockCredentialVerifier};
use crate::session::storage::{FileSessionStorage, SessionStorage};
use crate::session::{SessionError, SessionStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Startup failures.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Logging(LoggingError),
    Session(SessionError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Session(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Session(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for AppError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

/// Owner of both stores for the lifetime of the running application.
pub struct RosterApp<
    R: RosterRepository = InMemoryRosterRepository,
    S: SessionStorage = FileSessionStorage,
    V: CredentialVerifier = MockCredentialVerifier,
> {
    roster: RosterService<R>,
    session: SessionStore<S, V>,
}

impl RosterApp {
    /// Loads configuration from `path` and builds the application.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let config = RosterConfig::load(path)?;
        Self::from_config(&config)
    }

    /// Builds the application from already loaded settings.
    ///
    /// Starts logging when `log_dir` is set, opens the file-backed session
    /// slot and seeds the roster when requested.
    pub fn from_config(config: &RosterConfig) -> Result<Self, AppError> {
        config.validate()?;
        if let Some(log_dir) = &config.log_dir {
            init_logging(&config.log_level, log_dir)?;
        }

        let storage =
            FileSessionStorage::with_slot(&config.session_dir, config.session_slot.trim());
        let session = SessionStore::open_mock(storage)?;
        let roster = if config.seed_demo_roster {
            RosterService::with_demo_roster()
        } else {
            RosterService::in_memory()
        };

        info!(
            "event=app_ready module=app status=ok students={} signed_in={}",
            roster.len(),
            session.is_signed_in()
        );
        Ok(Self::new(roster, session))
    }
}

impl<R: RosterRepository, S: SessionStorage, V: CredentialVerifier> RosterApp<R, S, V> {
    /// Assembles the application from explicitly constructed parts.
    pub fn new(roster: RosterService<R>, session: SessionStore<S, V>) -> Self {
        Self { roster, session }
    }

    pub fn roster(&self) -> &RosterService<R> {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut RosterService<R> {
        &mut self.roster
    }

    pub fn session(&self) -> &SessionStore<S, V> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore<S, V> {
        &mut self.session
    }

    /// Whether the main view (rather than the auth view) should be shown.
    pub fn shows_main_view(&self) -> bool {
        self.session.is_signed_in()
    }
}
