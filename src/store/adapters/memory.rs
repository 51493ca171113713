//! In-memory document store for tests and local runs.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use crate::store::{
    domain::{Collection, Document, DocumentId, Fields, Query},
    ports::{DocumentStore, DocumentStoreError, DocumentStoreResult},
};

/// Thread-safe in-memory document store.
///
/// Documents are kept in identifier order so query results are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    collections: HashMap<Collection, BTreeMap<DocumentId, Fields>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every document of a collection in identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Backend`] when the state lock is
    /// poisoned.
    pub fn snapshot(&self, collection: Collection) -> DocumentStoreResult<Vec<Document>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn poisoned<T>(err: PoisonError<T>) -> DocumentStoreError {
    DocumentStoreError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> DocumentStoreResult<Option<Document>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .collections
            .get(&collection)
            .and_then(|documents| documents.get(id))
            .map(|fields| Document::new(id.clone(), fields.clone())))
    }

    async fn query(
        &self,
        collection: Collection,
        query: &Query,
    ) -> DocumentStoreResult<Vec<Document>> {
        let state = self.state.read().map_err(poisoned)?;
        let Some(documents) = state.collections.get(&collection) else {
            return Ok(Vec::new());
        };
        let limit = query.limit().unwrap_or(usize::MAX);
        Ok(documents
            .iter()
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .filter(|document| query.matches(document))
            .take(limit)
            .collect())
    }

    async fn create(
        &self,
        collection: Collection,
        id: Option<DocumentId>,
        fields: Fields,
    ) -> DocumentStoreResult<DocumentId> {
        let mut state = self.state.write().map_err(poisoned)?;
        let documents = state.collections.entry(collection).or_default();
        let document_id = match id {
            Some(requested) if documents.contains_key(&requested) => {
                return Err(DocumentStoreError::AlreadyExists {
                    collection,
                    id: requested,
                });
            }
            Some(requested) => requested,
            None => DocumentId::generate(),
        };
        documents.insert(document_id.clone(), fields);
        tracing::debug!(%collection, id = %document_id, "document created");
        Ok(document_id)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Fields,
    ) -> DocumentStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let fields = state
            .collections
            .get_mut(&collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| DocumentStoreError::NotFound {
                collection,
                id: id.clone(),
            })?;
        fields.extend(patch);
        tracing::debug!(%collection, %id, "document updated");
        Ok(())
    }
}
