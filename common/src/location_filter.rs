//! Administrative-level location filter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    organism::OrganismConfig,
    query_params::{QueryParams, parse_string, serialize_string},
};

/// Field name to value; a missing field means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationFilter(BTreeMap<String, String>);

impl LocationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns a new filter with `field` set. An empty value clears the field.
    pub fn with(&self, field: &str, value: &str) -> Self {
        let mut fields = self.0.clone();
        if value.is_empty() {
            fields.remove(field);
        } else {
            fields.insert(field.to_string(), value.to_string());
        }
        Self(fields)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads only the organism's location fields; anything else in the URL is ignored.
    pub fn parse(params: &QueryParams, config: &OrganismConfig) -> Self {
        let fields = config
            .location_fields
            .iter()
            .filter_map(|field| parse_string(params, field).map(|value| (field.to_string(), value)))
            .collect();
        Self(fields)
    }

    pub fn render(&self, params: &mut QueryParams, config: &OrganismConfig) {
        for field in config.location_fields {
            serialize_string(params, field, self.get(field));
        }
    }
}
