//! Fixed-session identity provider.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::SessionUser,
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Identity provider returning a session set by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    session: Arc<RwLock<Option<SessionUser>>>,
}

impl StaticIdentityProvider {
    /// Creates a provider with `user` signed in.
    #[must_use]
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(user))),
        }
    }

    /// Creates a provider with nobody signed in.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Replaces the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the session lock is
    /// poisoned.
    pub fn set_session(&self, user: Option<SessionUser>) -> IdentityResult<()> {
        let mut session = self
            .session
            .write()
            .map_err(|err| IdentityError::provider(std::io::Error::other(err.to_string())))?;
        *session = user;
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_user(&self) -> IdentityResult<Option<SessionUser>> {
        let session = self
            .session
            .read()
            .map_err(|err| IdentityError::provider(std::io::Error::other(err.to_string())))?;
        Ok(session.clone())
    }
}
