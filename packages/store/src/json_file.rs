//! Document store persisted as one JSON file per collection.
//!
//! Each file holds a JSON array of records, every record carrying its id.
//! A missing file is an empty collection. Writes go to a temporary file
//! that is then renamed over the original.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use casa_resources_resource_models::Collection;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    CollectionData, Document, DocumentStore, StoreError, merge, new_id, paths, with_id,
};

/// A [`DocumentStore`] backed by JSON files in a data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store rooted at `data_dir`. The directory is created on
    /// first write.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a store rooted at [`paths::data_dir`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(paths::data_dir())
    }

    /// The directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read(&self, collection: Collection) -> Result<CollectionData, StoreError> {
        let path = paths::collection_path(&self.data_dir, collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} does not exist; treating as empty", path.display());
                return Ok(CollectionData::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<Value> = serde_json::from_slice(&bytes)?;
        let mut data = CollectionData::new();
        for record in records {
            let Value::Object(mut doc) = record else {
                return Err(StoreError::InvalidRecord {
                    message: format!("{collection} contains a non-object record"),
                });
            };
            let Some(Value::String(id)) = doc.remove("id") else {
                return Err(StoreError::InvalidRecord {
                    message: format!("{collection} contains a record without a string id"),
                });
            };
            data.insert(id, doc);
        }
        Ok(data)
    }

    async fn write(&self, collection: Collection, data: CollectionData) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let records: Vec<Value> = data
            .into_iter()
            .map(|(id, doc)| Value::Object(with_id(&id, doc)))
            .collect();
        let json = serde_json::to_vec_pretty(&records)?;

        let path = paths::collection_path(&self.data_dir, collection);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;
        log::debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn get(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .read(collection)
            .await?
            .into_iter()
            .map(|(id, doc)| with_id(&id, doc))
            .collect())
    }

    async fn add(&self, collection: Collection, record: Document) -> Result<String, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.read(collection).await?;
        let id = new_id();
        let mut record = record;
        record.remove("id");
        data.insert(id.clone(), record);
        self.write(collection, data).await?;
        Ok(id)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: Document,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.read(collection).await?;
        let doc = data.get_mut(id).ok_or_else(|| StoreError::NotFound {
            collection,
            id: id.to_string(),
        })?;
        merge(doc, partial);
        self.write(collection, data).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.read(collection).await?;
        if data.remove(id).is_none() {
            return Err(StoreError::NotFound {
                collection,
                id: id.to_string(),
            });
        }
        self.write(collection, data).await
    }
}
