//! Identity adapters.

pub mod document;
pub mod memory;

pub use document::DocumentUserDirectory;
pub use memory::StaticIdentityProvider;
