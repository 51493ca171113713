//! Identity resolution services.

mod resolver;

pub use resolver::IdentityResolver;
