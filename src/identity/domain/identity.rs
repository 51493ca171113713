//! Resolved identities and raw session users.

use super::{Email, IdentityDomainError, UserId};
use serde::{Deserialize, Serialize};

/// User reported by the live authentication session, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-issued user identifier.
    pub uid: String,
    /// Email address attached to the session.
    pub email: String,
}

impl SessionUser {
    /// Creates a session user.
    #[must_use]
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
        }
    }
}

/// A validated person: identifier, email, and optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    uid: UserId,
    email: Email,
    display_name: Option<String>,
}

impl Identity {
    /// Creates an identity from validated parts.
    #[must_use]
    pub const fn new(uid: UserId, email: Email) -> Self {
        Self {
            uid,
            email,
            display_name: None,
        }
    }

    /// Validates raw parts into an identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError`] when the identifier or email is
    /// malformed.
    pub fn parse(uid: impl Into<String>, email: impl Into<String>) -> Result<Self, IdentityDomainError> {
        Ok(Self::new(UserId::new(uid)?, Email::new(email)?))
    }

    /// Sets the display name; blank names are ignored.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        let raw = name.into();
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.display_name = Some(trimmed.to_owned());
        }
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn uid(&self) -> &UserId {
        &self.uid
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the display name, falling back to the email local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.email.local_part())
    }
}

impl TryFrom<SessionUser> for Identity {
    type Error = IdentityDomainError;

    fn try_from(user: SessionUser) -> Result<Self, Self::Error> {
        Self::parse(user.uid, user.email)
    }
}
