//! Identity domain types.

mod error;
mod ids;
mod identity;

pub use error::IdentityDomainError;
pub use ids::{Email, UserId};
pub use identity::{Identity, SessionUser};
