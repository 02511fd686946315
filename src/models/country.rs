//! Visited-country models for the map widget.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VisitedCountry {
    pub name: String,
    pub flag: String,
    pub note: String,
}

/// Body of `GET /api/countries`.
///
/// `visited_codes` and `visited_names` are parallel lists in row order. They can be longer
/// than `visited` when a code appears twice.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryList {
    pub visited: BTreeMap<String, VisitedCountry>,
    pub visited_codes: Vec<String>,
    pub visited_names: Vec<String>,
}
