//! Cross-module error classification.

use std::fmt;

/// Coarse failure category shared by every service desk error.
///
/// Callers use this to choose a user-facing response without matching on
/// each module's error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// User input broke a business rule.
    Validation,
    /// A referenced document is absent.
    NotFound,
    /// A call parameter is malformed.
    InvalidArgument,
    /// The caller's identity does not own the target record.
    PermissionDenied,
    /// Technician and employee are the same person.
    IdentityConflict,
    /// The document store failed.
    Store,
}

impl ErrorKind {
    /// Returns a stable snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::InvalidArgument => "invalid_argument",
            Self::PermissionDenied => "permission_denied",
            Self::IdentityConflict => "identity_conflict",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
