//! Live-session identity provider port.

use crate::error::ErrorKind;
use crate::identity::domain::{Email, IdentityDomainError, SessionUser};
use crate::store::ports::DocumentStoreError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Source of the currently signed-in user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in user, or `None` when nobody is signed in.
    async fn current_user(&self) -> IdentityResult<Option<SessionUser>>;
}

/// Errors returned by identity ports and services.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// An identity value failed validation.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),

    /// Nobody is signed in.
    #[error("no user is signed in")]
    SignedOut,

    /// Neither the session nor the directory knows the address.
    #[error("no user found for {0}")]
    NotFound(Email),

    /// The user directory could not be read.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),

    /// The identity provider failed.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps an identity provider failure.
    #[must_use]
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }

    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::InvalidArgument,
            Self::SignedOut => ErrorKind::PermissionDenied,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Store(_) | Self::Provider(_) => ErrorKind::Store,
        }
    }
}
