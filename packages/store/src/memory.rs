//! In-process document store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use casa_resources_resource_models::Collection;
use tokio::sync::RwLock;

use crate::{CollectionData, Document, DocumentStore, StoreError, merge, new_id, with_id};

/// A [`DocumentStore`] that keeps every collection in memory.
///
/// Used by tests and for dry runs where nothing should be persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<Collection, CollectionData>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|data| {
                data.iter()
                    .map(|(id, doc)| with_id(id, doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn add(&self, collection: Collection, record: Document) -> Result<String, StoreError> {
        let id = new_id();
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .insert(id.clone(), with_id(&id, record));
        Ok(id)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: Document,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(&collection)
            .and_then(|data| data.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.to_string(),
            })?;
        merge(doc, partial);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        self.collections
            .write()
            .await
            .get_mut(&collection)
            .and_then(|data| data.remove(id))
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.to_string(),
            })
    }
}
