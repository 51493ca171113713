//! Document store port.

use crate::store::domain::{Collection, Document, DocumentId, Fields, Query};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// Remote document database contract.
///
/// Every operation is atomic for the single document it touches. Nothing
/// spans documents; callers needing several writes sequence them and handle
/// partial failure themselves.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads a document by identifier.
    ///
    /// Returns `None` when the document does not exist.
    async fn get(&self, collection: Collection, id: &DocumentId)
    -> DocumentStoreResult<Option<Document>>;

    /// Returns documents satisfying every equality filter of `query`, in
    /// store order, truncated to the query limit.
    async fn query(&self, collection: Collection, query: &Query)
    -> DocumentStoreResult<Vec<Document>>;

    /// Creates a document and returns its identifier.
    ///
    /// A fresh identifier is generated when `id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::AlreadyExists`] when an explicit
    /// identifier is already taken.
    async fn create(
        &self,
        collection: Collection,
        id: Option<DocumentId>,
        fields: Fields,
    ) -> DocumentStoreResult<DocumentId>;

    /// Merges `patch` into the top-level fields of an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::NotFound`] when the document does not
    /// exist.
    async fn update(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Fields,
    ) -> DocumentStoreResult<()>;
}

/// Errors returned by document store implementations.
#[derive(Debug, Clone, Error)]
pub enum DocumentStoreError {
    /// The document does not exist.
    #[error("document {collection}/{id} not found")]
    NotFound {
        /// Collection that was searched.
        collection: Collection,
        /// Missing document identifier.
        id: DocumentId,
    },

    /// A document with the requested identifier already exists.
    #[error("document {collection}/{id} already exists")]
    AlreadyExists {
        /// Target collection.
        collection: Collection,
        /// Conflicting document identifier.
        id: DocumentId,
    },

    /// A record could not be converted to or from its document form.
    #[error("document codec error: {0}")]
    Codec(String),

    /// The backing database failed.
    #[error("document store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl DocumentStoreError {
    /// Wraps a backend failure.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Wraps an encoding or decoding failure.
    #[must_use]
    pub fn codec(err: &impl fmt::Display) -> Self {
        Self::Codec(err.to_string())
    }
}
