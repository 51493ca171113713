//! Validated identity scalars.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable user identifier issued by the identity provider.
///
/// # Examples
///
/// ```
/// use servicedesk::identity::domain::UserId;
///
/// assert!(UserId::new("Qm9vdGhfdGVjaG5pY2lhbl8wMDAx").is_ok());
/// assert!(UserId::new("too-short").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Shortest identifier the provider issues.
    pub const MIN_LENGTH: usize = 28;

    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidUserId`] when the value is
    /// shorter than [`Self::MIN_LENGTH`] or contains characters outside
    /// `[A-Za-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let is_valid = raw.len() >= Self::MIN_LENGTH
            && raw
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !is_valid {
            return Err(IdentityDomainError::InvalidUserId(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for UserId {
    type Error = IdentityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized email address: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a normalized email address.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidEmail`] when the value is blank,
    /// contains whitespace, or lacks a non-empty local part and domain around
    /// a single `@`.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();
        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !normalized.chars().any(char::is_whitespace);
        if !is_valid {
            return Err(IdentityDomainError::InvalidEmail(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part before `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }

    /// Compares against a raw, possibly unnormalized address.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().to_lowercase() == self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Email {
    type Error = IdentityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
