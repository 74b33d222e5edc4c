//! Plain-text renderings of the catalog and of resource coverage.

use std::fmt::Write as _;

use casa_resources_coverage::{communities_served, highlighted_regions, service_area};
use casa_resources_geography::GeographyCatalog;
use casa_resources_resource_models::Resource;

/// Renders the region/county tree with city counts.
#[must_use]
pub fn render_regions(catalog: &GeographyCatalog) -> String {
    let mut out = String::new();
    for region in catalog.regions() {
        let _ = writeln!(out, "{} ({} cities)", region.name, region.city_count());
        for county in &region.counties {
            let _ = writeln!(out, "  {:<12} {:>3} cities", county.name, county.cities.len());
        }
    }
    let _ = writeln!(
        out,
        "{} regions, {} counties, {} cities",
        catalog.regions().len(),
        catalog.county_count(),
        catalog.city_count()
    );
    out
}

/// Renders the cities carrying a ZIP code.
#[must_use]
pub fn render_zip_lookup(catalog: &GeographyCatalog, zip: &str) -> String {
    let matches = catalog.find_by_zip(zip);
    if matches.is_empty() {
        return format!("No cities found for ZIP {zip}\n");
    }

    let mut out = String::new();
    for location in matches {
        let _ = writeln!(
            out,
            "{zip}: {} ({} County, {})",
            location.city.name, location.county, location.region
        );
    }
    out
}

/// Renders the service area, map regions, and communities of a resource.
#[must_use]
pub fn render_summary(catalog: &GeographyCatalog, resource: &Resource) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", resource.name);
    if let Some(category) = &resource.category {
        let _ = writeln!(out, "Category: {category}");
    }
    let _ = writeln!(
        out,
        "Service Area: {}",
        service_area(catalog, &resource.coverage)
    );

    let regions = highlighted_regions(catalog, &resource.coverage);
    if !regions.is_empty() {
        let _ = writeln!(out, "Map regions: {}", regions.join(", "));
    }

    let communities = communities_served(&resource.coverage);
    if !communities.is_empty() {
        let _ = writeln!(out, "Communities served: {}", communities.join(", "));
    }
    out
}
