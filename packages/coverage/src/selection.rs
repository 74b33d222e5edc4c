//! The coverage selection engine.
//!
//! [`CoverageSelection`] owns the set of selected cities for one resource
//! while it is being edited. Counties, regions, and the statewide flag are
//! never set directly: every toggle edits the city set and then re-derives
//! the three caches from it, so they always equal the "fully covered"
//! closure of the selected cities under the catalog.

use std::collections::{BTreeMap, BTreeSet};

use casa_resources_coverage_models::{
    GeographicCoverage, SelectedCity, SelectedCounty, SelectionState,
};
use casa_resources_geography::GeographyCatalog;
use casa_resources_geography_models::{City, County, Region};

/// Mutable coverage state for a single resource.
///
/// Names passed to the query and toggle methods must come from the
/// catalog this selection was created with. An unknown name is a
/// programming error and panics.
#[derive(Debug, Clone)]
pub struct CoverageSelection<'a> {
    catalog: &'a GeographyCatalog,
    cities: BTreeMap<String, SelectedCity>,
    counties: BTreeSet<SelectedCounty>,
    regions: BTreeSet<String>,
    statewide: bool,
}

impl PartialEq for CoverageSelection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cities == other.cities
            && self.counties == other.counties
            && self.regions == other.regions
            && self.statewide == other.statewide
    }
}

impl Eq for CoverageSelection<'_> {}

impl<'a> CoverageSelection<'a> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new(catalog: &'a GeographyCatalog) -> Self {
        Self {
            catalog,
            cities: BTreeMap::new(),
            counties: BTreeSet::new(),
            regions: BTreeSet::new(),
            statewide: false,
        }
    }

    /// Loads a selection from a persisted record.
    ///
    /// Only the stored cities are trusted; the county, region, and
    /// statewide caches are re-derived from them. Cities the catalog does
    /// not list are kept as saved but never count toward a county.
    #[must_use]
    pub fn from_record(catalog: &'a GeographyCatalog, record: GeographicCoverage) -> Self {
        let mut selection = Self::new(catalog);
        for city in record.geographic_cities {
            if catalog.city(&city.city).is_none() {
                log::warn!(
                    "Keeping city '{}' ({}, {}) that is not in the geography catalog",
                    city.city,
                    city.county,
                    city.region
                );
            }
            selection.cities.entry(city.city.clone()).or_insert(city);
        }
        selection.recompute();

        let stored_counties: BTreeSet<_> = record.geographic_counties.into_iter().collect();
        let stored_regions: BTreeSet<_> = record.geographic_regions.into_iter().collect();
        if stored_counties != selection.counties
            || stored_regions != selection.regions
            || record.statewide != selection.statewide
        {
            log::debug!("Stored coverage caches were stale; re-derived from cities");
        }

        selection
    }

    /// Converts the selection into the four persisted fields.
    ///
    /// Cities, counties, and regions are emitted in catalog display order;
    /// cities missing from the catalog follow, ordered by name.
    #[must_use]
    pub fn to_record(&self) -> GeographicCoverage {
        let mut geographic_cities: Vec<SelectedCity> = self
            .catalog
            .cities()
            .filter_map(|location| self.cities.get(&location.city.name))
            .cloned()
            .collect();
        geographic_cities.extend(
            self.cities
                .values()
                .filter(|city| self.catalog.city(&city.city).is_none())
                .cloned(),
        );

        let geographic_counties = self
            .catalog
            .regions()
            .iter()
            .flat_map(|region| {
                region
                    .counties
                    .iter()
                    .map(move |county| SelectedCounty::new(&region.name, &county.name))
            })
            .filter(|key| self.counties.contains(key))
            .collect();

        let geographic_regions = self
            .catalog
            .region_names()
            .filter(|name| self.regions.contains(*name))
            .map(str::to_string)
            .collect();

        GeographicCoverage {
            geographic_cities,
            geographic_counties,
            geographic_regions,
            statewide: self.statewide,
        }
    }

    /// The catalog this selection validates names against.
    #[must_use]
    pub const fn catalog(&self) -> &'a GeographyCatalog {
        self.catalog
    }

    /// Selected cities, ordered by name.
    pub fn selected_cities(&self) -> impl Iterator<Item = &SelectedCity> {
        self.cities.values()
    }

    /// Fully covered counties.
    #[must_use]
    pub const fn selected_counties(&self) -> &BTreeSet<SelectedCounty> {
        &self.counties
    }

    /// Fully covered regions.
    #[must_use]
    pub const fn selected_regions(&self) -> &BTreeSet<String> {
        &self.regions
    }

    /// Whether every region is fully covered.
    #[must_use]
    pub const fn is_statewide(&self) -> bool {
        self.statewide
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Whether the named city is selected.
    #[must_use]
    pub fn is_city_selected(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// Whether every catalog city of the county is selected.
    ///
    /// # Panics
    ///
    /// Panics if the county is not in the catalog.
    #[must_use]
    pub fn is_county_fully_selected(&self, region: &str, county: &str) -> bool {
        self.county_fully_selected(self.expect_county(region, county))
    }

    /// Whether at least one, but not every, city of the county is selected.
    ///
    /// # Panics
    ///
    /// Panics if the county is not in the catalog.
    #[must_use]
    pub fn is_county_partially_selected(&self, region: &str, county: &str) -> bool {
        let county = self.expect_county(region, county);
        self.county_has_any(county) && !self.county_fully_selected(county)
    }

    /// Whether every county of the region is fully selected.
    ///
    /// # Panics
    ///
    /// Panics if the region is not in the catalog.
    #[must_use]
    pub fn is_region_fully_selected(&self, region: &str) -> bool {
        self.region_fully_selected(self.expect_region(region))
    }

    /// Whether some city of the region is selected but not all of them.
    ///
    /// # Panics
    ///
    /// Panics if the region is not in the catalog.
    #[must_use]
    pub fn is_region_partially_selected(&self, region: &str) -> bool {
        let region = self.expect_region(region);
        region.counties.iter().any(|county| self.county_has_any(county))
            && !self.region_fully_selected(region)
    }

    /// Whether every region is fully selected.
    #[must_use]
    pub fn is_statewide_selected(&self) -> bool {
        self.catalog
            .regions()
            .iter()
            .all(|region| self.region_fully_selected(region))
    }

    /// Whether anything is selected without the whole state being covered.
    #[must_use]
    pub fn is_statewide_partially_selected(&self) -> bool {
        !self.cities.is_empty() && !self.is_statewide_selected()
    }

    /// Checkbox state of a county.
    ///
    /// # Panics
    ///
    /// Panics if the county is not in the catalog.
    #[must_use]
    pub fn county_state(&self, region: &str, county: &str) -> SelectionState {
        SelectionState::from_flags(
            self.is_county_fully_selected(region, county),
            self.is_county_partially_selected(region, county),
        )
    }

    /// Checkbox state of a region.
    ///
    /// # Panics
    ///
    /// Panics if the region is not in the catalog.
    #[must_use]
    pub fn region_state(&self, region: &str) -> SelectionState {
        SelectionState::from_flags(
            self.is_region_fully_selected(region),
            self.is_region_partially_selected(region),
        )
    }

    /// Checkbox state of the statewide toggle.
    #[must_use]
    pub fn statewide_state(&self) -> SelectionState {
        SelectionState::from_flags(
            self.is_statewide_selected(),
            self.is_statewide_partially_selected(),
        )
    }

    /// Selects the city if it is unselected, otherwise deselects it.
    ///
    /// Deselecting a city always drops its county and region from the
    /// fully covered sets; selecting the last missing city of a county
    /// promotes the county (and the region, if that completes it).
    ///
    /// # Panics
    ///
    /// Panics if the catalog does not list the city under the given
    /// county and region.
    pub fn toggle_city(&mut self, city: &str, zip_codes: &[String], county: &str, region: &str) {
        let location = self
            .catalog
            .city(city)
            .unwrap_or_else(|| panic!("Unknown city '{city}'"));
        assert!(
            location.county == county && location.region == region,
            "City '{city}' is in {}/{}, not {region}/{county}",
            location.region,
            location.county
        );

        if self.cities.remove(city).is_some() {
            log::debug!("Deselected city {city} ({county}, {region})");
        } else {
            self.cities.insert(
                city.to_string(),
                SelectedCity {
                    city: city.to_string(),
                    zip_codes: zip_codes.to_vec(),
                    county: county.to_string(),
                    region: region.to_string(),
                },
            );
            log::debug!("Selected city {city} ({county}, {region})");
        }

        self.recompute();
    }

    /// Selects every city of the county, or deselects them all if the
    /// county is already fully selected.
    ///
    /// # Panics
    ///
    /// Panics if the county is not in the catalog.
    pub fn toggle_county(&mut self, region: &str, county: &str) {
        let entry = self.expect_county(region, county);
        if self.county_fully_selected(entry) {
            self.remove_cities(&entry.cities);
            log::debug!("Deselected county {county} ({region})");
        } else {
            self.add_cities(region, entry);
            log::debug!("Selected county {county} ({region})");
        }

        self.recompute();
    }

    /// Selects every city of the region, or deselects them all if the
    /// region is already fully selected.
    ///
    /// # Panics
    ///
    /// Panics if the region is not in the catalog.
    pub fn toggle_region(&mut self, region: &str) {
        let entry = self.expect_region(region);
        if self.region_fully_selected(entry) {
            for county in &entry.counties {
                self.remove_cities(&county.cities);
            }
            log::debug!("Deselected region {region}");
        } else {
            for county in &entry.counties {
                self.add_cities(&entry.name, county);
            }
            log::debug!("Selected region {region}");
        }

        self.recompute();
    }

    /// Selects the whole catalog, or clears everything (including cities
    /// the catalog does not list) if the selection is already statewide.
    pub fn toggle_statewide(&mut self) {
        if self.statewide {
            self.cities.clear();
            log::debug!("Cleared statewide coverage");
        } else {
            let catalog = self.catalog;
            for region in catalog.regions() {
                for county in &region.counties {
                    self.add_cities(&region.name, county);
                }
            }
            log::debug!("Selected statewide coverage");
        }

        self.recompute();
    }

    fn add_cities(&mut self, region: &str, county: &County) {
        for city in &county.cities {
            self.cities
                .entry(city.name.clone())
                .or_insert_with(|| SelectedCity {
                    city: city.name.clone(),
                    zip_codes: city.zip_codes.clone(),
                    county: county.name.clone(),
                    region: region.to_string(),
                });
        }
    }

    fn remove_cities(&mut self, cities: &[City]) {
        for city in cities {
            self.cities.remove(&city.name);
        }
    }

    /// Re-derives the county, region, and statewide caches from the city
    /// set. Called after every mutation.
    fn recompute(&mut self) {
        let catalog = self.catalog;
        let mut counties = BTreeSet::new();
        let mut regions = BTreeSet::new();

        for region in catalog.regions() {
            let mut whole_region = true;
            for county in &region.counties {
                if self.county_fully_selected(county) {
                    counties.insert(SelectedCounty::new(&region.name, &county.name));
                } else {
                    whole_region = false;
                }
            }
            if whole_region {
                regions.insert(region.name.clone());
            }
        }

        self.statewide = regions.len() == catalog.regions().len();
        self.counties = counties;
        self.regions = regions;
    }

    fn county_fully_selected(&self, county: &County) -> bool {
        county
            .cities
            .iter()
            .all(|city| self.cities.contains_key(&city.name))
    }

    fn county_has_any(&self, county: &County) -> bool {
        county
            .cities
            .iter()
            .any(|city| self.cities.contains_key(&city.name))
    }

    fn region_fully_selected(&self, region: &Region) -> bool {
        region
            .counties
            .iter()
            .all(|county| self.county_fully_selected(county))
    }

    fn expect_region(&self, region: &str) -> &'a Region {
        self.catalog
            .region(region)
            .unwrap_or_else(|| panic!("Unknown region '{region}'"))
    }

    fn expect_county(&self, region: &str, county: &str) -> &'a County {
        self.catalog
            .county(region, county)
            .unwrap_or_else(|| panic!("Unknown county '{county}' in region '{region}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scenario_catalog, zips};

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Asserts the caches equal the closure of the city set, computed
    /// independently of the engine.
    fn assert_closure(selection: &CoverageSelection<'_>) {
        let catalog = selection.catalog();
        let expected_counties: BTreeSet<SelectedCounty> = catalog
            .regions()
            .iter()
            .flat_map(|region| {
                region.counties.iter().filter_map(move |county| {
                    county
                        .cities
                        .iter()
                        .all(|city| selection.is_city_selected(&city.name))
                        .then(|| SelectedCounty::new(&region.name, &county.name))
                })
            })
            .collect();
        let expected_regions: BTreeSet<String> = catalog
            .regions()
            .iter()
            .filter(|region| {
                region.counties.iter().all(|county| {
                    expected_counties.contains(&SelectedCounty::new(&region.name, &county.name))
                })
            })
            .map(|region| region.name.clone())
            .collect();

        assert_eq!(selection.selected_counties(), &expected_counties);
        assert_eq!(selection.selected_regions(), &expected_regions);
        assert_eq!(
            selection.is_statewide(),
            expected_regions.len() == catalog.regions().len()
        );
        assert_eq!(selection.is_statewide(), selection.is_statewide_selected());

        for region in catalog.regions() {
            assert!(
                !(selection.is_region_fully_selected(&region.name)
                    && selection.is_region_partially_selected(&region.name)),
                "Region {} is both full and partial",
                region.name
            );
            for county in &region.counties {
                assert!(
                    !(selection.is_county_fully_selected(&region.name, &county.name)
                        && selection.is_county_partially_selected(&region.name, &county.name)),
                    "County {} is both full and partial",
                    county.name
                );
            }
        }
        assert!(!(selection.is_statewide_selected() && selection.is_statewide_partially_selected()));
    }

    fn random_toggle(selection: &mut CoverageSelection<'_>, rng: &mut ChaCha8Rng) {
        let catalog = selection.catalog();
        match rng.gen_range(0..10) {
            0..=5 => {
                let cities: Vec<_> = catalog.cities().collect();
                let location = cities[rng.gen_range(0..cities.len())];
                selection.toggle_city(
                    &location.city.name,
                    &location.city.zip_codes,
                    location.county,
                    location.region,
                );
            }
            6 | 7 => {
                let region = &catalog.regions()[rng.gen_range(0..catalog.regions().len())];
                let county = &region.counties[rng.gen_range(0..region.counties.len())];
                selection.toggle_county(&region.name, &county.name);
            }
            8 => {
                let region = &catalog.regions()[rng.gen_range(0..catalog.regions().len())];
                selection.toggle_region(&region.name);
            }
            _ => selection.toggle_statewide(),
        }
    }

    #[test]
    fn scenario_walkthrough() {
        let catalog = scenario_catalog();
        let mut selection = CoverageSelection::new(&catalog);

        selection.toggle_city("Worcester", &zips(&["01608"]), "Worcester", "Central Mass");
        assert!(selection.is_city_selected("Worcester"));
        assert!(selection.selected_counties().is_empty());
        assert!(selection.is_county_partially_selected("Central Mass", "Worcester"));
        assert_eq!(
            selection.county_state("Central Mass", "Worcester"),
            SelectionState::Indeterminate
        );

        selection.toggle_city("Auburn", &zips(&["01501"]), "Worcester", "Central Mass");
        assert_eq!(
            selection.selected_counties(),
            &BTreeSet::from([SelectedCounty::new("Central Mass", "Worcester")])
        );
        assert_eq!(
            selection.selected_regions(),
            &BTreeSet::from(["Central Mass".to_string()])
        );
        assert!(selection.is_region_fully_selected("Central Mass"));

        selection.toggle_region("Berkshires");
        assert!(selection.is_city_selected("Lenox"));
        assert_eq!(
            selection.selected_regions(),
            &BTreeSet::from(["Berkshires".to_string(), "Central Mass".to_string()])
        );
        assert!(!selection.is_statewide_selected());
        assert!(selection.is_statewide_partially_selected());

        selection.toggle_city("Auburn", &zips(&["01501"]), "Worcester", "Central Mass");
        let names: Vec<&str> = selection
            .selected_cities()
            .map(|city| city.city.as_str())
            .collect();
        assert_eq!(names, ["Lenox", "Worcester"]);
        assert_eq!(
            selection.selected_counties(),
            &BTreeSet::from([SelectedCounty::new("Berkshires", "Berkshire")])
        );
        assert_eq!(
            selection.selected_regions(),
            &BTreeSet::from(["Berkshires".to_string()])
        );
        assert_closure(&selection);
    }

    #[test]
    fn toggle_city_twice_restores_state() {
        let catalog = scenario_catalog();
        let mut selection = CoverageSelection::new(&catalog);
        selection.toggle_region("Berkshires");
        selection.toggle_city("Worcester", &zips(&["01608"]), "Worcester", "Central Mass");
        let before = selection.clone();

        for (city, zip) in [("Auburn", "01501"), ("Worcester", "01608")] {
            selection.toggle_city(city, &zips(&[zip]), "Worcester", "Central Mass");
            selection.toggle_city(city, &zips(&[zip]), "Worcester", "Central Mass");
            assert_eq!(selection, before);
            assert_eq!(selection.to_record(), before.to_record());
        }
    }

    #[test]
    fn toggle_county_twice_restores_state_and_is_never_indeterminate() {
        let catalog = GeographyCatalog::massachusetts();
        let mut selection = CoverageSelection::new(catalog);
        selection.toggle_city("Lenox", &zips(&["01240"]), "Berkshire", "Western Mass");
        let before = selection.clone();

        for (region, county) in [("Central Mass", "Worcester"), ("Western Mass", "Berkshire")] {
            let was_full = selection.is_county_fully_selected(region, county);
            selection.toggle_county(region, county);
            assert_ne!(selection.is_county_fully_selected(region, county), was_full);
            assert!(!selection.is_county_partially_selected(region, county));
            selection.toggle_county(region, county);
            assert!(!selection.is_county_partially_selected(region, county));
            assert_closure(&selection);
        }

        // Berkshire started partial: the first toggle fills it, the second
        // clears it entirely rather than restoring the single city.
        assert!(!selection.is_city_selected("Lenox"));
        selection.toggle_city("Lenox", &zips(&["01240"]), "Berkshire", "Western Mass");
        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_county_round_trip_from_empty() {
        let catalog = GeographyCatalog::massachusetts();
        let mut selection = CoverageSelection::new(catalog);
        let empty = selection.clone();
        for region in catalog.regions() {
            for county in &region.counties {
                selection.toggle_county(&region.name, &county.name);
                assert!(selection.is_county_fully_selected(&region.name, &county.name));
                assert!(!selection.is_county_partially_selected(&region.name, &county.name));
                selection.toggle_county(&region.name, &county.name);
                assert!(!selection.is_county_fully_selected(&region.name, &county.name));
                assert!(!selection.is_county_partially_selected(&region.name, &county.name));
                assert_eq!(selection, empty);
            }
        }
    }

    #[test]
    fn toggle_region_selects_and_clears_every_county() {
        let catalog = GeographyCatalog::massachusetts();
        let mut selection = CoverageSelection::new(catalog);

        selection.toggle_region("Western Mass");
        assert_eq!(selection.region_state("Western Mass"), SelectionState::Checked);
        for county in catalog.counties_in_region("Western Mass") {
            assert!(selection.is_county_fully_selected("Western Mass", &county.name));
        }
        assert_eq!(selection.region_state("Central Mass"), SelectionState::Unchecked);

        selection.toggle_city("Lenox", &zips(&["01240"]), "Berkshire", "Western Mass");
        assert_eq!(
            selection.region_state("Western Mass"),
            SelectionState::Indeterminate
        );

        // A partial region toggles to full, not to empty.
        selection.toggle_region("Western Mass");
        assert!(selection.is_region_fully_selected("Western Mass"));
        selection.toggle_region("Western Mass");
        assert!(selection.is_empty());
    }

    #[test]
    fn statewide_selects_every_city_exactly_once() {
        let catalog = GeographyCatalog::massachusetts();
        let mut selection = CoverageSelection::new(catalog);
        selection.toggle_statewide();

        let record = selection.to_record();
        assert!(record.statewide);
        assert_eq!(record.geographic_cities.len(), catalog.city_count());
        let unique: BTreeSet<&str> = record
            .geographic_cities
            .iter()
            .map(|city| city.city.as_str())
            .collect();
        assert_eq!(unique.len(), catalog.city_count());
        assert_eq!(record.geographic_counties.len(), catalog.county_count());
        assert_eq!(record.geographic_regions.len(), catalog.regions().len());
        assert_eq!(selection.statewide_state(), SelectionState::Checked);

        selection.toggle_statewide();
        assert_eq!(selection.to_record(), GeographicCoverage::default());
        assert_eq!(selection.statewide_state(), SelectionState::Unchecked);
    }

    #[test]
    fn selecting_last_region_by_hand_turns_statewide_on() {
        let catalog = scenario_catalog();
        let mut selection = CoverageSelection::new(&catalog);
        for region in catalog.region_names() {
            selection.toggle_region(region);
        }
        assert!(selection.is_statewide());

        selection.toggle_city("Lenox", &zips(&["01240"]), "Berkshire", "Berkshires");
        assert!(!selection.is_statewide());
        assert!(!selection.selected_regions().contains("Berkshires"));
        assert_eq!(selection.statewide_state(), SelectionState::Indeterminate);
    }

    #[test]
    fn from_record_rederives_stale_caches() {
        let catalog = scenario_catalog();
        let record = GeographicCoverage {
            geographic_cities: vec![SelectedCity {
                city: "Lenox".to_string(),
                zip_codes: zips(&["01240"]),
                county: "Berkshire".to_string(),
                region: "Berkshires".to_string(),
            }],
            geographic_counties: vec![],
            geographic_regions: vec!["Central Mass".to_string()],
            statewide: true,
        };

        let selection = CoverageSelection::from_record(&catalog, record);
        assert!(!selection.is_statewide());
        assert_eq!(
            selection.selected_regions(),
            &BTreeSet::from(["Berkshires".to_string()])
        );
        assert_closure(&selection);
    }

    #[test]
    fn from_record_keeps_unlisted_cities() {
        let catalog = scenario_catalog();
        let stale = SelectedCity {
            city: "Old Town".to_string(),
            zip_codes: zips(&["01999"]),
            county: "Worcester".to_string(),
            region: "Central Mass".to_string(),
        };
        let record = GeographicCoverage {
            geographic_cities: vec![stale.clone(), stale.clone()],
            ..GeographicCoverage::default()
        };

        let mut selection = CoverageSelection::from_record(&catalog, record);
        assert!(selection.is_city_selected("Old Town"));
        assert!(!selection.is_county_partially_selected("Central Mass", "Worcester"));
        assert_eq!(selection.to_record().geographic_cities, vec![stale]);

        selection.toggle_statewide();
        selection.toggle_statewide();
        assert!(selection.is_empty());
    }

    #[test]
    fn to_record_uses_catalog_order() {
        let catalog = scenario_catalog();
        let mut selection = CoverageSelection::new(&catalog);
        selection.toggle_region("Berkshires");
        selection.toggle_city("Auburn", &zips(&["01501"]), "Worcester", "Central Mass");
        selection.toggle_city("Worcester", &zips(&["01608"]), "Worcester", "Central Mass");

        let record = selection.to_record();
        let names: Vec<&str> = record
            .geographic_cities
            .iter()
            .map(|city| city.city.as_str())
            .collect();
        assert_eq!(names, ["Worcester", "Auburn", "Lenox"]);
        assert_eq!(record.geographic_regions, ["Central Mass", "Berkshires"]);
    }

    #[test]
    fn random_toggle_sequences_preserve_closure() {
        let catalogs = [scenario_catalog(), GeographyCatalog::massachusetts().clone()];
        for (seed, catalog) in catalogs.iter().enumerate() {
            let mut rng = ChaCha8Rng::seed_from_u64(seed as u64 + 42);
            let mut selection = CoverageSelection::new(catalog);
            for _ in 0..500 {
                random_toggle(&mut selection, &mut rng);
                assert_closure(&selection);

                let reloaded = CoverageSelection::from_record(catalog, selection.to_record());
                assert_eq!(reloaded, selection);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Unknown county")]
    fn unknown_county_panics() {
        let catalog = scenario_catalog();
        let mut selection = CoverageSelection::new(&catalog);
        selection.toggle_county("Central Mass", "Middlesex");
    }

    #[test]
    #[should_panic(expected = "not Berkshires/Worcester")]
    fn mismatched_city_location_panics() {
        let catalog = scenario_catalog();
        let mut selection = CoverageSelection::new(&catalog);
        selection.toggle_city("Auburn", &zips(&["01501"]), "Worcester", "Berkshires");
    }
}
