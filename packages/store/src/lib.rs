#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Document store client for the resource directory.
//!
//! Records are JSON objects grouped into named [`Collection`]s. The
//! [`DocumentStore`] trait covers the generic get/add/update/delete calls;
//! [`MemoryStore`] keeps everything in process and [`JsonFileStore`]
//! persists one JSON file per collection. Updates are shallow merges and
//! the last write wins.

pub mod json_file;
pub mod memory;
pub mod paths;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;

use async_trait::async_trait;
use casa_resources_coverage_models::GeographicCoverage;
use casa_resources_resource_models::{Collection, Resource};
use serde_json::{Map, Value};

/// A stored record. Always carries its id under the `"id"` key when
/// returned from a store.
pub type Document = Map<String, Value>;

/// Errors that can occur during document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No record with the given id exists.
    #[error("No record '{id}' in {collection}")]
    NotFound {
        /// Collection that was searched.
        collection: Collection,
        /// Requested record id.
        id: String,
    },

    /// A stored record does not have the expected shape.
    #[error("Invalid record: {message}")]
    InvalidRecord {
        /// Description of what went wrong.
        message: String,
    },
}

/// Generic CRUD over named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every record in a collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be read.
    async fn get(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Returns a single record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has the id.
    async fn get_one(&self, collection: Collection, id: &str) -> Result<Document, StoreError> {
        self.get(collection)
            .await?
            .into_iter()
            .find(|doc| doc.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.to_string(),
            })
    }

    /// Inserts a new record and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record cannot be written.
    async fn add(&self, collection: Collection, record: Document) -> Result<String, StoreError>;

    /// Merges `partial` into an existing record, replacing the top-level
    /// fields it names.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has the id.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: Document,
    ) -> Result<(), StoreError>;

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has the id.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;
}

/// Records of one collection keyed by id.
pub(crate) type CollectionData = BTreeMap<String, Document>;

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Applies a partial record on top of an existing one. The id is never
/// overwritten.
pub(crate) fn merge(target: &mut Document, partial: Document) {
    for (key, value) in partial {
        if key != "id" {
            target.insert(key, value);
        }
    }
}

pub(crate) fn with_id(id: &str, mut doc: Document) -> Document {
    doc.insert("id".to_string(), Value::String(id.to_string()));
    doc
}

/// Loads and decodes a single resource.
///
/// # Errors
///
/// Returns [`StoreError`] if the record is missing or is not a valid
/// resource.
pub async fn load_resource(store: &dyn DocumentStore, id: &str) -> Result<Resource, StoreError> {
    let doc = store.get_one(Collection::Resources, id).await?;
    Ok(serde_json::from_value(Value::Object(doc))?)
}

/// Loads every resource, skipping records that fail to decode.
///
/// # Errors
///
/// Returns [`StoreError`] if the collection cannot be read.
pub async fn list_resources(store: &dyn DocumentStore) -> Result<Vec<Resource>, StoreError> {
    let docs = store.get(Collection::Resources).await?;
    let mut resources = Vec::with_capacity(docs.len());
    for doc in docs {
        match serde_json::from_value::<Resource>(Value::Object(doc)) {
            Ok(resource) => resources.push(resource),
            Err(e) => log::warn!("Skipping malformed resource record: {e}"),
        }
    }
    Ok(resources)
}

/// Writes a resource's coverage fields in a single update call.
///
/// # Errors
///
/// Returns [`StoreError`] if the resource does not exist or the write fails.
pub async fn save_coverage(
    store: &dyn DocumentStore,
    resource_id: &str,
    coverage: &GeographicCoverage,
) -> Result<(), StoreError> {
    let patch = Resource::coverage_patch(coverage, chrono::Utc::now());
    store
        .update(Collection::Resources, resource_id, patch)
        .await?;
    log::info!(
        "Saved coverage for resource {resource_id}: {} cities, statewide={}",
        coverage.geographic_cities.len(),
        coverage.statewide
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_resources_coverage_models::SelectedCity;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn merge_keeps_id_and_replaces_fields() {
        let mut target = doc(json!({ "id": "a", "name": "Old", "phone": "555" }));
        merge(&mut target, doc(json!({ "id": "b", "name": "New" })));
        assert_eq!(target["id"], "a");
        assert_eq!(target["name"], "New");
        assert_eq!(target["phone"], "555");
    }

    #[tokio::test]
    async fn save_coverage_replaces_all_four_fields() {
        let store = MemoryStore::new();
        let id = store
            .add(
                Collection::Resources,
                doc(json!({
                    "name": "Pantry",
                    "hours": "Daily",
                    "geographicRegions": ["Central Mass"],
                    "statewide": true
                })),
            )
            .await
            .unwrap();

        let coverage = GeographicCoverage {
            geographic_cities: vec![SelectedCity {
                city: "Lenox".to_string(),
                zip_codes: vec!["01240".to_string()],
                county: "Berkshire".to_string(),
                region: "Western Mass".to_string(),
            }],
            ..GeographicCoverage::default()
        };
        save_coverage(&store, &id, &coverage).await.unwrap();

        let resource = load_resource(&store, &id).await.unwrap();
        assert_eq!(resource.id, id);
        assert_eq!(resource.coverage, coverage);
        assert!(resource.updated_at.is_some());
        assert_eq!(resource.extra["hours"], "Daily");
    }

    #[tokio::test]
    async fn save_coverage_on_missing_resource_fails() {
        let store = MemoryStore::new();
        let err = save_coverage(&store, "missing", &GeographicCoverage::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_resources_skips_malformed_records() {
        let store = MemoryStore::new();
        store
            .add(Collection::Resources, doc(json!({ "name": "Shelter" })))
            .await
            .unwrap();
        store
            .add(Collection::Resources, doc(json!({ "name": 7 })))
            .await
            .unwrap();

        let resources = list_resources(&store).await.unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].name, "Shelter");
    }
}
