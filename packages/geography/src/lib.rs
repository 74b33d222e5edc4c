#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Massachusetts geography catalog.
//!
//! The catalog is a static region, county, and city table baked into the
//! binary from TOML files in `regions/`. It never changes at runtime.
//! [`GeographyCatalog::massachusetts`] returns the shared instance, and
//! [`GeographyCatalog::from_regions`] builds a validated catalog from
//! arbitrary regions (used by tests and tooling).

pub mod catalog;
pub mod registry;

pub use catalog::{CityLocation, GeographyCatalog};

use thiserror::Error;

/// Errors raised while validating a geography catalog.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The catalog has no regions.
    #[error("Catalog has no regions")]
    Empty,

    /// Two regions share a name.
    #[error("Duplicate region: {region}")]
    DuplicateRegion {
        /// The repeated region name.
        region: String,
    },

    /// Two counties in the same region share a name.
    #[error("Duplicate county '{county}' in region '{region}'")]
    DuplicateCounty {
        /// Region containing the duplicate.
        region: String,
        /// The repeated county name.
        county: String,
    },

    /// A city name appears more than once anywhere in the catalog.
    #[error("Duplicate city '{city}' (in {first_county} and {second_county})")]
    DuplicateCity {
        /// The repeated city name.
        city: String,
        /// County of the first occurrence.
        first_county: String,
        /// County of the second occurrence.
        second_county: String,
    },

    /// A county or region has no children.
    #[error("'{name}' has no {children}")]
    Childless {
        /// Name of the empty county or region.
        name: String,
        /// What is missing ("counties" or "cities").
        children: &'static str,
    },

    /// A city is missing ZIP codes or carries a malformed one.
    #[error("Invalid ZIP code for {city}: {message}")]
    InvalidZip {
        /// City carrying the bad code.
        city: String,
        /// Description of what went wrong.
        message: String,
    },

    /// Embedded region TOML failed to parse.
    #[error("Failed to parse region '{id}': {source}")]
    Parse {
        /// Registry id of the region file.
        id: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}
