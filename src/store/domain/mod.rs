//! Collection names, documents, and equality queries.

mod collection;
mod document;
mod query;

pub use collection::Collection;
pub use document::{Document, DocumentId, Fields};
pub use query::{FieldFilter, Query};
