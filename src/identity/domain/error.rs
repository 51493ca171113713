//! Errors for identity value validation.

use thiserror::Error;

/// Errors returned while constructing identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The user identifier does not have the identity-provider shape.
    #[error("invalid user id '{0}', expected at least 28 characters from [A-Za-z0-9_-]")]
    InvalidUserId(String),

    /// The email address is blank or malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}
