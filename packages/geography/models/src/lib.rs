#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region, county, and city reference types.
//!
//! These types describe the static three-level geography (region, county,
//! city) that resources are tagged against. Each region is deserialized
//! from a TOML file embedded in `casa_resources_geography`; the types here
//! carry no behavior beyond simple child lookups.

use serde::{Deserialize, Serialize};

/// A top-level grouping of counties (e.g. "Central Mass").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region name. Unique across the catalog.
    pub name: String,
    /// Counties in display order.
    pub counties: Vec<County>,
}

impl Region {
    /// Returns the county with the given name, if it belongs to this region.
    #[must_use]
    pub fn county(&self, name: &str) -> Option<&County> {
        self.counties.iter().find(|county| county.name == name)
    }

    /// Iterates over the county names of this region in display order.
    pub fn county_names(&self) -> impl Iterator<Item = &str> {
        self.counties.iter().map(|county| county.name.as_str())
    }

    /// Total number of cities across every county in this region.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.counties.iter().map(|county| county.cities.len()).sum()
    }
}

/// A county within a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    /// County name. Unique within its region.
    pub name: String,
    /// Cities and towns in display order.
    pub cities: Vec<City>,
}

impl County {
    /// Returns the city with the given name, if it belongs to this county.
    #[must_use]
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.name == name)
    }
}

/// A city or town, the leaf unit of coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City name. Unique across the catalog.
    pub name: String,
    /// Five-digit ZIP codes served by this city. Never empty.
    pub zip_codes: Vec<String>,
}

impl City {
    /// Whether this city carries the given ZIP code.
    #[must_use]
    pub fn has_zip(&self, zip: &str) -> bool {
        self.zip_codes.iter().any(|code| code == zip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION_TOML: &str = r#"
name = "Central Mass"

[[counties]]
name = "Worcester"
cities = [
  { name = "Worcester", zip_codes = ["01608", "01609"] },
  { name = "Auburn", zip_codes = ["01501"] },
]
"#;

    #[test]
    fn deserializes_region_toml() {
        let region: Region = toml::de::from_str(REGION_TOML).unwrap();
        assert_eq!(region.name, "Central Mass");
        assert_eq!(region.county_names().collect::<Vec<_>>(), ["Worcester"]);
        assert_eq!(region.city_count(), 2);
    }

    #[test]
    fn child_lookups() {
        let region: Region = toml::de::from_str(REGION_TOML).unwrap();
        let county = region.county("Worcester").unwrap();
        assert!(region.county("Berkshire").is_none());

        let city = county.city("Worcester").unwrap();
        assert!(city.has_zip("01609"));
        assert!(!city.has_zip("01501"));
        assert!(county.city("Lenox").is_none());
    }
}
