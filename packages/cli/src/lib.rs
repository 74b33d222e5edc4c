#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line tools for the community resource directory.
//!
//! Lists the geography catalog, looks up ZIP codes, summarizes where a
//! resource provides service, and edits a resource's coverage through an
//! interactive checkbox-style menu.

pub mod editor;
pub mod interactive;
pub mod report;

use casa_resources_coverage::CoverageSelection;
use casa_resources_geography::GeographyCatalog;
use casa_resources_store::{DocumentStore, StoreError, load_resource, save_coverage};

/// Errors that can occur while running a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Terminal prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Loads a resource and renders its service-area summary.
///
/// # Errors
///
/// Returns [`CliError`] if the resource cannot be loaded.
pub async fn summary(
    store: &dyn DocumentStore,
    catalog: &GeographyCatalog,
    resource_id: &str,
) -> Result<String, CliError> {
    let resource = load_resource(store, resource_id).await?;
    Ok(report::render_summary(catalog, &resource))
}

/// Opens the interactive coverage editor for a resource and saves the
/// result, unless the user cancels or nothing changed.
///
/// Returns whether anything was written.
///
/// # Errors
///
/// Returns [`CliError`] if loading, prompting, or saving fails.
pub async fn edit_coverage(
    store: &dyn DocumentStore,
    catalog: &GeographyCatalog,
    resource_id: &str,
) -> Result<bool, CliError> {
    let resource = load_resource(store, resource_id).await?;
    println!("Editing coverage for {}", resource.name);

    let mut selection = CoverageSelection::from_record(catalog, resource.coverage.clone());
    match editor::run(&mut selection)? {
        editor::Outcome::Save => {
            let record = selection.to_record();
            if record == resource.coverage {
                log::info!("Coverage unchanged; nothing to save");
                return Ok(false);
            }
            save_coverage(store, resource_id, &record).await?;
            Ok(true)
        }
        editor::Outcome::Cancel => {
            log::info!("Discarded coverage edits for {}", resource.name);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_resources_resource_models::Collection;
    use casa_resources_store::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn summary_of_stored_resource() {
        let store = MemoryStore::new();
        let id = store
            .add(
                Collection::Resources,
                json!({
                    "name": "Berkshire Shelter",
                    "geographicCities": [
                        { "city": "Lenox", "zipCodes": ["01240"], "county": "Berkshire", "region": "Western Mass" }
                    ],
                    "geographicRegions": ["Western Mass"]
                })
                .as_object()
                .cloned()
                .unwrap(),
            )
            .await
            .unwrap();

        let text = summary(&store, GeographyCatalog::massachusetts(), &id)
            .await
            .unwrap();
        assert!(text.contains("Berkshire Shelter"));
        assert!(text.contains("Western Mass (Berkshire, Franklin, Hampshire, Hampden)"));
        assert!(text.contains("Lenox"));
    }

    #[tokio::test]
    async fn summary_of_missing_resource_fails() {
        let store = MemoryStore::new();
        let err = summary(&store, GeographyCatalog::massachusetts(), "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Store(StoreError::NotFound { .. })));
    }
}
