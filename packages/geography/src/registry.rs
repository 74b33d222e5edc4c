//! Compile-time registry of region definitions.
//!
//! Each entry is a `(id, toml_content)` pair embedded via `include_str!`.
//! Adding a region requires creating a TOML file in `regions/` and adding
//! a corresponding entry here.

use casa_resources_geography_models::Region;

use crate::GeoError;

/// Number of registered regions. Enforced by a test.
#[cfg(test)]
const EXPECTED_REGION_COUNT: usize = 6;

/// Embedded TOML region definitions, in display order.
const REGION_TOMLS: &[(&str, &str)] = &[
    ("central_mass", include_str!("../regions/central_mass.toml")),
    ("western_mass", include_str!("../regions/western_mass.toml")),
    ("northeast", include_str!("../regions/northeast.toml")),
    (
        "greater_boston",
        include_str!("../regions/greater_boston.toml"),
    ),
    ("southeast", include_str!("../regions/southeast.toml")),
    (
        "cape_and_islands",
        include_str!("../regions/cape_and_islands.toml"),
    ),
];

/// Parses a single region definition.
///
/// # Errors
///
/// Returns [`GeoError::Parse`] if the TOML does not match the region schema.
pub fn parse_region_toml(id: &str, toml_str: &str) -> Result<Region, GeoError> {
    toml::de::from_str(toml_str).map_err(|source| GeoError::Parse {
        id: id.to_string(),
        source,
    })
}

/// Returns all registered regions in display order.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught by the tests below.
#[must_use]
pub fn all_regions() -> Vec<Region> {
    REGION_TOMLS
        .iter()
        .map(|(id, toml_str)| {
            parse_region_toml(id, toml_str).unwrap_or_else(|e| panic!("{e}"))
        })
        .collect()
}
