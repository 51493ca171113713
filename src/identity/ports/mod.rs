//! Port contracts for identity lookup.

pub mod directory;
pub mod provider;

pub use directory::UserDirectory;
pub use provider::{IdentityError, IdentityProvider, IdentityResult};
