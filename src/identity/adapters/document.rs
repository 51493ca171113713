//! User directory backed by the `User` collection.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::identity::{
    domain::{Email, Identity, UserId},
    ports::{IdentityResult, UserDirectory},
};
use crate::store::{
    codec::decode_document,
    domain::{Collection, Query},
    ports::DocumentStore,
};

/// Stored shape of a `User` document; the document id is the user id.
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
}

/// [`UserDirectory`] reading the `User` collection of a document store.
#[derive(Debug)]
pub struct DocumentUserDirectory<S> {
    store: Arc<S>,
}

impl<S> Clone for DocumentUserDirectory<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> DocumentUserDirectory<S> {
    /// Creates a directory over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore> UserDirectory for DocumentUserDirectory<S> {
    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<Identity>> {
        // Profiles keep the address as entered, so match after reading.
        let documents = self.store.query(Collection::User, &Query::new()).await?;
        let Some(document) = documents.iter().find(|document| {
            document
                .field("email")
                .and_then(Value::as_str)
                .is_some_and(|raw| email.matches(raw))
        }) else {
            return Ok(None);
        };
        let record: UserRecord = decode_document(document)?;
        let identity = Identity::new(UserId::new(record.id)?, Email::new(record.email)?);
        Ok(Some(match record.name {
            Some(name) => identity.with_display_name(name),
            None => identity,
        }))
    }
}
