//! Port contracts for document persistence.

pub mod document_store;

pub use document_store::{DocumentStore, DocumentStoreError, DocumentStoreResult};
