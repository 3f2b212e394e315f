//! The dataset-wide ("baseline") part of a page: where and when.

use serde::{Deserialize, Serialize};

use crate::{
    date_range::DateRange,
    lapis_filter::LapisFilter,
    location_filter::LocationFilter,
    organism::OrganismConfig,
    query_params::{QueryParams, parse_date_range, serialize_date_range},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFilter {
    pub location: LocationFilter,
    pub date_range: DateRange,
}

impl DatasetFilter {
    pub fn default_for(config: &OrganismConfig) -> Self {
        Self {
            location: LocationFilter::new(),
            date_range: config.default_date_range,
        }
    }

    pub fn parse(params: &QueryParams, config: &OrganismConfig) -> Self {
        Self {
            location: LocationFilter::parse(params, config),
            date_range: parse_date_range(params, config.date_field)
                .unwrap_or(config.default_date_range),
        }
    }

    pub fn render(&self, params: &mut QueryParams, config: &OrganismConfig) {
        self.location.render(params, config);
        serialize_date_range(
            params,
            config.date_field,
            &self.date_range,
            &config.default_date_range,
        );
    }

    /// Resolved date range plus location fields, as consumed by the query API.
    pub fn to_lapis_filter(&self, config: &OrganismConfig) -> LapisFilter {
        let range = self.date_range.to_concrete_today(config.earliest_date);
        let mut filter = LapisFilter::new();
        filter.insert_date_range(config.date_field, &range);
        for (field, value) in self.location.iter() {
            filter.insert_text(field, value);
        }
        filter
    }
}
