#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Coverage selection and service-area rollup for resource records.
//!
//! [`CoverageSelection`] is the editable city/county/region/statewide
//! selection behind the coverage checkboxes. The [`rollup`] functions turn
//! a saved [`GeographicCoverage`] record back into a display summary.

pub mod rollup;
pub mod selection;

pub use casa_resources_coverage_models::{
    GeographicCoverage, SelectedCity, SelectedCounty, SelectionState, ServiceArea,
};
pub use rollup::{communities_served, highlighted_regions, service_area};
pub use selection::CoverageSelection;
