//! Session identity model.
//!
//! # Responsibility
//! - Define the signed-in identity persisted in the durable session slot.
//! - Own the display-name derivation rule used by login.
//!
//! # Invariants
//! - `id` is freshly generated for every login/signup.
//! - `avatar` is always `None` for locally created identities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The currently signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SessionIdentity {
    /// Creates an identity with a generated id.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            avatar: None,
        }
    }

    /// Creates an identity whose name is derived from `email`.
    ///
    /// See [`derive_display_name`].
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = derive_display_name(&email).to_string();
        Self::new(email, name)
    }
}

/// Derives a display name from an email address.
///
/// Rule: the local part, i.e. everything before the first `@`. An address
/// without `@` is returned whole.
pub fn derive_display_name(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_display_name, SessionIdentity};

    #[test]
    fn display_name_is_local_part() {
        assert_eq!(derive_display_name("a@b.com"), "a");
        assert_eq!(derive_display_name("jane.doe@x@y.com"), "jane.doe");
        assert_eq!(derive_display_name("no-at-sign"), "no-at-sign");
        assert_eq!(derive_display_name("@domain.com"), "");
    }

    #[test]
    fn from_email_assigns_fresh_ids() {
        let first = SessionIdentity::from_email("a@b.com");
        let second = SessionIdentity::from_email("a@b.com");
        assert_eq!(first.name, "a");
        assert!(first.avatar.is_none());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn missing_avatar_field_deserializes_as_none() {
        let identity: SessionIdentity =
            serde_json::from_str(r#"{"id":"1","email":"a@b.com","name":"a"}"#).unwrap();
        assert!(identity.avatar.is_none());
    }
}
