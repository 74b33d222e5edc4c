//! Read-only service-area summaries of a saved coverage record.
//!
//! Saved records are rendered as they were stored, and older records may
//! carry cities without the county/region caches. The summary therefore
//! works from the stored cities and uses a heuristic to decide whether a
//! record "meant" a whole region:
//!
//! 1. Statewide if the flag is set or every catalog region looks whole.
//! 2. A single whole region if the cities all come from one region and
//!    that region is listed explicitly, spans more than one county, or
//!    touches every county the catalog lists for it.
//! 3. Otherwise the distinct regions and counties of the stored cities.
//!
//! The heuristic cannot tell a region picked county by county from one
//! toggled as a whole, and a single-region record spanning two counties is
//! shown as the whole region. Saved records have always rendered this way.

use std::collections::BTreeSet;

use casa_resources_coverage_models::{GeographicCoverage, ServiceArea};
use casa_resources_geography::GeographyCatalog;

/// Summarizes where a resource provides service.
#[must_use]
pub fn service_area(catalog: &GeographyCatalog, coverage: &GeographicCoverage) -> ServiceArea {
    if coverage.is_empty() {
        return ServiceArea::None;
    }

    if coverage.statewide
        || catalog
            .region_names()
            .all(|region| region_looks_whole(catalog, coverage, region))
    {
        return ServiceArea::Statewide;
    }

    let regions = distinct(coverage.geographic_cities.iter().map(|c| c.region.as_str()));
    if let [region] = regions.as_slice() {
        if let Some(entry) = catalog.region(region) {
            let counties_in_region = distinct(
                coverage
                    .geographic_cities
                    .iter()
                    .filter(|c| c.region == *region)
                    .map(|c| c.county.as_str()),
            );
            if coverage.geographic_regions.iter().any(|r| r == region)
                || counties_in_region.len() > 1
                || region_looks_whole(catalog, coverage, region)
            {
                return ServiceArea::Region {
                    name: entry.name.clone(),
                    counties: entry.county_names().map(str::to_string).collect(),
                };
            }
        }
    }

    if coverage.geographic_cities.is_empty() {
        // Records that only kept the caches.
        return ServiceArea::Areas {
            regions: distinct(coverage.geographic_regions.iter().map(String::as_str)),
            counties: distinct(
                coverage
                    .geographic_counties
                    .iter()
                    .map(|c| c.county.as_str()),
            ),
        };
    }

    ServiceArea::Areas {
        regions,
        counties: distinct(
            coverage
                .geographic_cities
                .iter()
                .map(|c| c.county.as_str()),
        ),
    }
}

/// Distinct city names in stored order, for the "Communities served" list.
#[must_use]
pub fn communities_served(coverage: &GeographicCoverage) -> Vec<String> {
    distinct(
        coverage
            .geographic_cities
            .iter()
            .map(|c| c.city.as_str()),
    )
}

/// Region names a map view should highlight for this coverage.
#[must_use]
pub fn highlighted_regions(
    catalog: &GeographyCatalog,
    coverage: &GeographicCoverage,
) -> Vec<String> {
    match service_area(catalog, coverage) {
        ServiceArea::None => vec![],
        ServiceArea::Statewide => catalog.region_names().map(str::to_string).collect(),
        ServiceArea::Region { name, .. } => vec![name],
        ServiceArea::Areas { regions, .. } => regions,
    }
}

/// A region looks whole when it is listed explicitly or every catalog
/// county of it appears among the stored cities.
fn region_looks_whole(
    catalog: &GeographyCatalog,
    coverage: &GeographicCoverage,
    region: &str,
) -> bool {
    if coverage.geographic_regions.iter().any(|r| r == region) {
        return true;
    }

    let counties = catalog.counties_in_region(region);
    !counties.is_empty()
        && counties.iter().all(|county| {
            coverage
                .geographic_cities
                .iter()
                .any(|c| c.region == region && c.county == county.name)
        })
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
