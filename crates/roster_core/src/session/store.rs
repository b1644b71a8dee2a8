//! Session state machine.

use super::credentials::{CredentialVerifier, MockCredentialVerifier};
use super::storage::{SessionStorage, StorageError};
use super::{SessionError, SessionResult};
use crate::model::identity::SessionIdentity;
use log::{info, warn};

/// Whether an identity is currently signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    SignedIn,
}

/// Owner of the zero-or-one current identity.
///
/// Transitions: `SignedOut -> SignedIn` on successful login/signup,
/// `SignedIn -> SignedOut` on logout. Failed attempts change nothing.
pub struct SessionStore<S: SessionStorage, V: CredentialVerifier = MockCredentialVerifier> {
    storage: S,
    verifier: V,
    current: Option<SessionIdentity>,
}

impl<S: SessionStorage> SessionStore<S, MockCredentialVerifier> {
    /// Opens a store using the mock credential check.
    pub fn open_mock(storage: S) -> SessionResult<Self> {
        Self::open(storage, MockCredentialVerifier)
    }
}

impl<S: SessionStorage, V: CredentialVerifier> SessionStore<S, V> {
    /// Opens the store, restoring a previously stored identity if present.
    ///
    /// An unparsable slot is treated as signed-out and left untouched.
    ///
    /// # Errors
    /// Returns `SessionError::Storage` when the slot cannot be read.
    pub fn open(storage: S, verifier: V) -> SessionResult<Self> {
        let current = match storage.load()? {
            Some(raw) => match serde_json::from_str::<SessionIdentity>(&raw) {
                Ok(identity) => {
                    info!("event=session_restore module=session status=ok");
                    Some(identity)
                }
                Err(err) => {
                    warn!(
                        "event=session_restore module=session status=error error_code=slot_unparsable error={err}"
                    );
                    None
                }
            },
            None => {
                info!("event=session_restore module=session status=empty");
                None
            }
        };

        Ok(Self {
            storage,
            verifier,
            current,
        })
    }

    /// Signs in through the credential verifier and persists the identity.
    ///
    /// # Errors
    /// - `InvalidCredentials` when the verifier rejects the pair.
    /// - `Storage` when the slot cannot be written; state is unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> SessionResult<SessionIdentity> {
        let identity = match self.verifier.verify(email, password) {
            Ok(identity) => identity,
            Err(err) => {
                warn!("event=session_login module=session status=rejected");
                return Err(err);
            }
        };
        self.sign_in(identity, "session_login")
    }

    /// Creates a fresh local identity and signs it in.
    ///
    /// No account registry exists, so any stored identity is overwritten.
    ///
    /// # Errors
    /// - `MissingFields` when any argument is empty.
    /// - `Storage` when the slot cannot be written; state is unchanged.
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> SessionResult<SessionIdentity> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            warn!("event=session_signup module=session status=rejected");
            return Err(SessionError::MissingFields);
        }
        self.sign_in(SessionIdentity::new(email, name), "session_signup")
    }

    /// Clears the current identity and removes the durable slot.
    ///
    /// The in-memory identity is always cleared, even if slot removal fails.
    pub fn logout(&mut self) -> SessionResult<()> {
        self.current = None;
        self.storage.remove()?;
        info!("event=session_logout module=session status=ok");
        Ok(())
    }

    pub fn current(&self) -> Option<&SessionIdentity> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::SignedIn
        } else {
            SessionState::SignedOut
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.state() == SessionState::SignedIn
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn sign_in(
        &mut self,
        identity: SessionIdentity,
        event: &'static str,
    ) -> SessionResult<SessionIdentity> {
        let serialized = serde_json::to_string(&identity).map_err(StorageError::from)?;
        self.storage.save(&serialized)?;
        info!("event={event} module=session status=ok");
        self.current = Some(identity.clone());
        Ok(identity)
    }
}
