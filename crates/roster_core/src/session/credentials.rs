//! Credential verification strategies.

use super::{SessionError, SessionResult};
use crate::model::identity::SessionIdentity;

/// Verifies login credentials and produces the identity to sign in.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> SessionResult<SessionIdentity>;
}

/// Accepts any non-empty email/password pair.
///
/// No stored credentials are consulted. The identity name is the email's
/// local part (see [`crate::model::identity::derive_display_name`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCredentialVerifier;

impl CredentialVerifier for MockCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> SessionResult<SessionIdentity> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }
        Ok(SessionIdentity::from_email(email))
    }
}

impl<V: CredentialVerifier + ?Sized> CredentialVerifier for Box<V> {
    fn verify(&self, email: &str, password: &str) -> SessionResult<SessionIdentity> {
        (**self).verify(email, password)
    }
}
