//! Core domain logic for the student roster.
//! This crate is the single source of truth for roster and session invariants.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use app::{AppError, RosterApp};
pub use config::{ConfigError, RosterConfig};
pub use form::student_form::{FormErrors, StudentField, StudentForm};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::course::{Course, CourseParseError};
pub use model::identity::{derive_display_name, SessionIdentity};
pub use model::student::{NewStudent, Student, StudentId, StudentPatch};
pub use repo::roster_repo::{InMemoryRosterRepository, RepoError, RepoResult, RosterRepository};
pub use service::roster_query::{RosterQuery, SortOrder};
pub use service::roster_service::{demo_roster, RosterService, RosterServiceError};
pub use session::credentials::{CredentialVerifier, MockCredentialVerifier};
pub use session::storage::{
    FileSessionStorage, MemorySessionStorage, SessionStorage, StorageError, DEFAULT_SESSION_SLOT,
};
pub use session::{SessionError, SessionResult, SessionState, SessionStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
