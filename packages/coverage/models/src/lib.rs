#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic coverage types as stored on resource records.
//!
//! A resource records the cities it serves as denormalized copies (name,
//! ZIP codes, county, region) so a saved record renders without the
//! catalog. The county, region, and statewide fields are derived caches
//! maintained by `casa_resources_coverage`; every field defaults to empty
//! so older records that predate the caches still deserialize.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// A city a resource serves, copied out of the catalog at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCity {
    /// City name.
    pub city: String,
    /// ZIP codes of the city when it was selected.
    #[serde(default)]
    pub zip_codes: Vec<String>,
    /// County the city belongs to.
    pub county: String,
    /// Region the county belongs to.
    pub region: String,
}

/// A county whose every city is selected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCounty {
    /// Region containing the county.
    pub region: String,
    /// County name.
    pub county: String,
}

impl SelectedCounty {
    /// Creates a county key.
    #[must_use]
    pub fn new(region: impl Into<String>, county: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            county: county.into(),
        }
    }
}

/// The four coverage fields of a resource record.
///
/// These are always written together; there is no partial update of a
/// subset of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicCoverage {
    /// Cities served.
    #[serde(default)]
    pub geographic_cities: Vec<SelectedCity>,
    /// Counties whose every city is served.
    #[serde(default)]
    pub geographic_counties: Vec<SelectedCounty>,
    /// Regions whose every county is served.
    #[serde(default)]
    pub geographic_regions: Vec<String>,
    /// Whether every region is served.
    #[serde(default)]
    pub statewide: bool,
}

impl GeographicCoverage {
    /// Whether no coverage of any kind is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.statewide
            && self.geographic_cities.is_empty()
            && self.geographic_counties.is_empty()
            && self.geographic_regions.is_empty()
    }
}

/// Checkbox state of a county, region, or the statewide toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SelectionState {
    /// Every city underneath is selected.
    Checked,
    /// No city underneath is selected.
    Unchecked,
    /// Some but not all cities underneath are selected.
    Indeterminate,
}

impl SelectionState {
    /// Combines the full/partial predicates into a single state.
    #[must_use]
    pub const fn from_flags(full: bool, partial: bool) -> Self {
        if full {
            Self::Checked
        } else if partial {
            Self::Indeterminate
        } else {
            Self::Unchecked
        }
    }

    /// Short text marker for terminal rendering.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Checked => "[x]",
            Self::Unchecked => "[ ]",
            Self::Indeterminate => "[-]",
        }
    }
}

/// Human-facing summary of where a resource provides service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceArea {
    /// No coverage recorded.
    None,
    /// Every region is served.
    Statewide,
    /// A single whole region, with every county the catalog lists for it.
    Region {
        /// Region name.
        name: String,
        /// Catalog county names of the region.
        counties: Vec<String>,
    },
    /// Whatever regions and counties appear among the selected cities.
    Areas {
        /// Distinct region names, in order of first appearance.
        regions: Vec<String>,
        /// Distinct county names, in order of first appearance.
        counties: Vec<String>,
    },
}

impl fmt::Display for ServiceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Not specified"),
            Self::Statewide => write!(f, "Statewide"),
            Self::Region { name, counties } => {
                write!(f, "{name} ({})", counties.join(", "))
            }
            Self::Areas { regions, counties } => {
                write!(f, "Regions: {}", regions.join(", "))?;
                if !counties.is_empty() {
                    write!(f, "; Counties: {}", counties.join(", "))?;
                }
                Ok(())
            }
        }
    }
}
