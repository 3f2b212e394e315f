//! One variant against its dataset: `/{organism}/single-variant`.

use serde::{Deserialize, Serialize};

use crate::{
    dataset_filter::DatasetFilter,
    lapis_filter::LapisFilter,
    organism::Organism,
    query_params::{QueryParams, parse_integer, serialize_integer},
    variant_filter::VariantFilter,
    views::{ComparisonFilter, RouteCodec, View},
};

pub const COLLECTION_ID: &str = "collectionId";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleVariantState {
    pub dataset_filter: DatasetFilter,
    pub variant_filter: VariantFilter,
    pub collection_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleVariantRoute {
    organism: Organism,
}

impl SingleVariantRoute {
    pub fn new(organism: Organism) -> Self {
        Self { organism }
    }

    pub fn base_lapis_filter(&self, state: &SingleVariantState) -> LapisFilter {
        state.dataset_filter.to_lapis_filter(&self.config())
    }

    pub fn variant_lapis_filter(&self, state: &SingleVariantState) -> LapisFilter {
        let config = self.config();
        self.base_lapis_filter(state)
            .merged(&state.variant_filter.to_lapis_filter(&config))
    }
}

impl RouteCodec for SingleVariantRoute {
    type State = SingleVariantState;

    fn organism(&self) -> Organism {
        self.organism
    }

    fn view(&self) -> View {
        View::SingleVariant
    }

    fn default_state(&self) -> SingleVariantState {
        let config = self.config();
        SingleVariantState {
            dataset_filter: DatasetFilter::default_for(&config),
            variant_filter: VariantFilter::default_for(&config),
            collection_id: None,
        }
    }

    fn parse_params(&self, params: &QueryParams) -> Option<SingleVariantState> {
        let config = self.config();
        Some(SingleVariantState {
            dataset_filter: DatasetFilter::parse(params, &config),
            variant_filter: VariantFilter::parse(params, &config),
            collection_id: parse_integer(params, COLLECTION_ID),
        })
    }

    fn render_params(&self, state: &SingleVariantState) -> QueryParams {
        let config = self.config();
        let mut params = QueryParams::new();
        state.dataset_filter.render(&mut params, &config);
        state.variant_filter.render(&mut params, &config);
        serialize_integer(&mut params, COLLECTION_ID, state.collection_id);
        params
    }

    fn lapis_filters(&self, state: &SingleVariantState) -> Vec<ComparisonFilter> {
        vec![ComparisonFilter {
            id: None,
            label: state.variant_filter.display_name(),
            numerator: self.variant_lapis_filter(state),
            denominator: self.base_lapis_filter(state),
        }]
    }
}
