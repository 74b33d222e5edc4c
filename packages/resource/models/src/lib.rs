#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Resource directory record types.
//!
//! A [`Resource`] is one organization in the community resource directory.
//! Records live in the `resources` [`Collection`] of the document store and
//! are written by several clients, so fields this crate does not model are
//! carried through untouched in [`Resource::extra`].

use casa_resources_coverage_models::GeographicCoverage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Named collections in the document store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Collection {
    /// Directory entries.
    Resources,
    /// Volunteer and staff accounts.
    Users,
    /// Pending requests for directory access.
    AccessRequests,
    /// Per-volunteer case tracker entries.
    Cases,
}

impl Collection {
    /// Every collection, in a stable order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// An organization listed in the resource directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Document id assigned by the store.
    #[serde(default)]
    pub id: String,
    /// Organization name.
    pub name: String,
    /// Service category (e.g. "Housing", "Food").
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text description of services.
    #[serde(default)]
    pub description: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Last time the record was saved.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Cities, counties, and regions served.
    #[serde(flatten)]
    pub coverage: GeographicCoverage,
    /// Fields written by other clients that this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    /// Builds the partial record that saves new coverage: the four coverage
    /// fields plus the update timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the coverage types fail to serialize, which cannot happen
    /// for plain string and boolean fields.
    #[must_use]
    pub fn coverage_patch(
        coverage: &GeographicCoverage,
        now: DateTime<Utc>,
    ) -> Map<String, Value> {
        let Value::Object(mut patch) = serde_json::to_value(coverage)
            .unwrap_or_else(|e| panic!("Failed to serialize coverage: {e}"))
        else {
            unreachable!("GeographicCoverage serializes to an object");
        };
        patch.insert("updatedAt".to_string(), Value::String(now.to_rfc3339()));
        patch
    }
}
