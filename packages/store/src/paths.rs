//! Data directory resolution for the JSON file store.

use std::path::{Path, PathBuf};

use casa_resources_resource_models::Collection;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CASA_DATA_DIR";

/// Returns the data directory: `CASA_DATA_DIR` if set, otherwise `data/`
/// relative to the working directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV).map_or_else(|_| PathBuf::from("data"), PathBuf::from)
}

/// Returns the JSON file holding a collection.
#[must_use]
pub fn collection_path(data_dir: &Path, collection: Collection) -> PathBuf {
    data_dir.join(format!("{collection}.json"))
}
