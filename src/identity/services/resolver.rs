//! Resolves who is acting in a resolution or feedback flow.

use crate::identity::{
    domain::{Email, Identity},
    ports::{IdentityError, IdentityProvider, IdentityResult, UserDirectory},
};
use std::sync::Arc;

/// Combines the live session with the user directory.
///
/// The live session wins when its email matches the person being resolved;
/// otherwise the directory is consulted, which covers a technician working
/// from a shared or differently-addressed session.
#[derive(Clone)]
pub struct IdentityResolver<P, D>
where
    P: IdentityProvider,
    D: UserDirectory,
{
    provider: Arc<P>,
    directory: Arc<D>,
}

impl<P, D> IdentityResolver<P, D>
where
    P: IdentityProvider,
    D: UserDirectory,
{
    /// Creates a resolver.
    #[must_use]
    pub const fn new(provider: Arc<P>, directory: Arc<D>) -> Self {
        Self {
            provider,
            directory,
        }
    }

    /// Returns the validated identity of the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::SignedOut`] when nobody is signed in, or
    /// [`IdentityError::Domain`] when the session carries malformed values.
    pub async fn current(&self) -> IdentityResult<Identity> {
        let user = self
            .provider
            .current_user()
            .await?
            .ok_or(IdentityError::SignedOut)?;
        Ok(Identity::try_from(user)?)
    }

    /// Resolves the technician assigned under `assigned_email`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotFound`] when neither the session nor the
    /// directory knows the address, or [`IdentityError::Domain`] when the
    /// matching session carries a malformed identifier.
    pub async fn resolve_technician(&self, assigned_email: &Email) -> IdentityResult<Identity> {
        if let Some(user) = self.provider.current_user().await? {
            if assigned_email.matches(&user.email) {
                return Ok(Identity::try_from(user)?);
            }
            tracing::debug!(
                session_email = %user.email,
                assigned_email = %assigned_email,
                "session does not match assigned technician; using directory"
            );
        }

        self.directory
            .find_by_email(assigned_email)
            .await?
            .ok_or_else(|| IdentityError::NotFound(assigned_email.clone()))
    }
}
