//! Sequencing volume over a dataset, no variant: `/{organism}/sequencing-efforts`.

use serde::{Deserialize, Serialize};

use crate::{
    dataset_filter::DatasetFilter,
    organism::Organism,
    query_params::QueryParams,
    views::{ComparisonFilter, RouteCodec, View},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencingEffortsState {
    pub dataset_filter: DatasetFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencingEffortsRoute {
    organism: Organism,
}

impl SequencingEffortsRoute {
    pub fn new(organism: Organism) -> Self {
        Self { organism }
    }
}

impl RouteCodec for SequencingEffortsRoute {
    type State = SequencingEffortsState;

    fn organism(&self) -> Organism {
        self.organism
    }

    fn view(&self) -> View {
        View::SequencingEfforts
    }

    fn default_state(&self) -> SequencingEffortsState {
        SequencingEffortsState {
            dataset_filter: DatasetFilter::default_for(&self.config()),
        }
    }

    fn parse_params(&self, params: &QueryParams) -> Option<SequencingEffortsState> {
        Some(SequencingEffortsState {
            dataset_filter: DatasetFilter::parse(params, &self.config()),
        })
    }

    fn render_params(&self, state: &SequencingEffortsState) -> QueryParams {
        let mut params = QueryParams::new();
        state.dataset_filter.render(&mut params, &self.config());
        params
    }

    fn lapis_filters(&self, state: &SequencingEffortsState) -> Vec<ComparisonFilter> {
        let filter = state.dataset_filter.to_lapis_filter(&self.config());
        vec![ComparisonFilter {
            id: None,
            label: "All sequences".to_string(),
            numerator: filter.clone(),
            denominator: filter,
        }]
    }
}
