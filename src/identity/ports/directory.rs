//! User directory port.

use super::IdentityResult;
use crate::identity::domain::{Email, Identity};
use async_trait::async_trait;

/// Lookup of known users by email address.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds the user registered under `email`.
    ///
    /// Returns `None` when no user has that address.
    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<Identity>>;
}
