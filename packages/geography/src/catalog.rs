//! Validated, indexed view over the region/county/city table.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use casa_resources_geography_models::{City, County, Region};

use crate::{GeoError, registry};

static MASSACHUSETTS: LazyLock<GeographyCatalog> = LazyLock::new(|| {
    GeographyCatalog::from_regions(registry::all_regions())
        .unwrap_or_else(|e| panic!("Embedded geography catalog is invalid: {e}"))
});

/// A city together with the county and region it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityLocation<'a> {
    /// The catalog city.
    pub city: &'a City,
    /// Name of the containing county.
    pub county: &'a str,
    /// Name of the containing region.
    pub region: &'a str,
}

/// Position of a city inside the region/county/city vectors.
#[derive(Debug, Clone, Copy)]
struct CityIndex {
    region: usize,
    county: usize,
    city: usize,
}

/// The static three-level geography table.
///
/// Region names are globally unique, county names are unique within a
/// region, and city names are unique across the whole catalog, so a city
/// name alone identifies its county and region.
#[derive(Debug, Clone)]
pub struct GeographyCatalog {
    regions: Vec<Region>,
    cities: BTreeMap<String, CityIndex>,
}

impl GeographyCatalog {
    /// Returns the embedded Massachusetts catalog.
    ///
    /// # Panics
    ///
    /// Panics on first use if the embedded region files are malformed.
    #[must_use]
    pub fn massachusetts() -> &'static Self {
        &MASSACHUSETTS
    }

    /// Builds a catalog from regions, validating the naming invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the catalog is empty, has duplicate
    /// region/county/city names, empty regions or counties, or cities
    /// without well-formed five-digit ZIP codes.
    pub fn from_regions(regions: Vec<Region>) -> Result<Self, GeoError> {
        if regions.is_empty() {
            return Err(GeoError::Empty);
        }

        let mut region_names = BTreeSet::new();
        let mut cities: BTreeMap<String, CityIndex> = BTreeMap::new();

        for (region_idx, region) in regions.iter().enumerate() {
            if !region_names.insert(region.name.as_str()) {
                return Err(GeoError::DuplicateRegion {
                    region: region.name.clone(),
                });
            }
            if region.counties.is_empty() {
                return Err(GeoError::Childless {
                    name: region.name.clone(),
                    children: "counties",
                });
            }

            let mut county_names = BTreeSet::new();
            for (county_idx, county) in region.counties.iter().enumerate() {
                if !county_names.insert(county.name.as_str()) {
                    return Err(GeoError::DuplicateCounty {
                        region: region.name.clone(),
                        county: county.name.clone(),
                    });
                }
                if county.cities.is_empty() {
                    return Err(GeoError::Childless {
                        name: county.name.clone(),
                        children: "cities",
                    });
                }

                for (city_idx, city) in county.cities.iter().enumerate() {
                    validate_zip_codes(city)?;

                    let index = CityIndex {
                        region: region_idx,
                        county: county_idx,
                        city: city_idx,
                    };
                    if let Some(existing) = cities.insert(city.name.clone(), index) {
                        return Err(GeoError::DuplicateCity {
                            city: city.name.clone(),
                            first_county: regions[existing.region].counties[existing.county]
                                .name
                                .clone(),
                            second_county: county.name.clone(),
                        });
                    }
                }
            }
        }

        log::debug!(
            "Built geography catalog: {} regions, {} cities",
            regions.len(),
            cities.len()
        );

        Ok(Self { regions, cities })
    }

    /// All regions in display order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region names in display order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|region| region.name.as_str())
    }

    /// Looks up a region by name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// Counties of a region, or an empty slice for an unknown region.
    #[must_use]
    pub fn counties_in_region(&self, region: &str) -> &[County] {
        self.region(region)
            .map(|r| r.counties.as_slice())
            .unwrap_or_default()
    }

    /// Looks up a county within a region.
    #[must_use]
    pub fn county(&self, region: &str, county: &str) -> Option<&County> {
        self.region(region).and_then(|r| r.county(county))
    }

    /// Cities of a county, or an empty slice for an unknown county.
    #[must_use]
    pub fn cities_in_county(&self, region: &str, county: &str) -> &[City] {
        self.county(region, county)
            .map(|c| c.cities.as_slice())
            .unwrap_or_default()
    }

    /// Looks up a city by name, returning its county and region.
    #[must_use]
    pub fn city(&self, name: &str) -> Option<CityLocation<'_>> {
        self.cities.get(name).map(|index| self.location(*index))
    }

    /// Iterates over every city in display order.
    pub fn cities(&self) -> impl Iterator<Item = CityLocation<'_>> {
        self.regions.iter().flat_map(|region| {
            region.counties.iter().flat_map(move |county| {
                county.cities.iter().map(move |city| CityLocation {
                    city,
                    county: &county.name,
                    region: &region.name,
                })
            })
        })
    }

    /// Every city carrying the given ZIP code, in display order.
    #[must_use]
    pub fn find_by_zip(&self, zip: &str) -> Vec<CityLocation<'_>> {
        self.cities()
            .filter(|location| location.city.has_zip(zip))
            .collect()
    }

    /// Total number of cities in the catalog.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Total number of counties in the catalog.
    #[must_use]
    pub fn county_count(&self) -> usize {
        self.regions.iter().map(|region| region.counties.len()).sum()
    }

    fn location(&self, index: CityIndex) -> CityLocation<'_> {
        let region = &self.regions[index.region];
        let county = &region.counties[index.county];
        CityLocation {
            city: &county.cities[index.city],
            county: &county.name,
            region: &region.name,
        }
    }
}

fn validate_zip_codes(city: &City) -> Result<(), GeoError> {
    if city.zip_codes.is_empty() {
        return Err(GeoError::InvalidZip {
            city: city.name.clone(),
            message: "no ZIP codes listed".to_string(),
        });
    }
    for zip in &city.zip_codes {
        if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GeoError::InvalidZip {
                city: city.name.clone(),
                message: format!("'{zip}' is not a five-digit code"),
            });
        }
    }
    Ok(())
}
