//! Mock authentication session.
//!
//! # Responsibility
//! - Track zero or one signed-in identity.
//! - Persist that identity in a single durable storage slot.
//! - Keep credential checking behind a swappable verifier.
//!
//! # Invariants
//! - At most one identity is current at any time.
//! - The slot is written on every successful login/signup and removed on
//!   logout; it is read only once, when the store opens.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod credentials;
pub mod storage;
mod store;

pub use store::{SessionState, SessionStore};

pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level failures surfaced as one top-level message.
#[derive(Debug)]
pub enum SessionError {
    /// Login with an empty field, or rejected by the verifier.
    InvalidCredentials,
    /// Signup with an empty field.
    MissingFields,
    /// Durable slot could not be read or written.
    Storage(storage::StorageError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid credentials"),
            Self::MissingFields => write!(f, "Please fill all fields"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::InvalidCredentials | Self::MissingFields => None,
        }
    }
}

impl From<storage::StorageError> for SessionError {
    fn from(value: storage::StorageError) -> Self {
        Self::Storage(value)
    }
}
