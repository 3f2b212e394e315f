//! Variants relative to a baseline variant: `/{organism}/compare-to-baseline`.
//!
//! The dataset and the baseline use plain keys (single-filter rules, the
//! advanced query wins); the compared variants carry their id.

use serde::{Deserialize, Serialize};

use crate::{
    dataset_filter::DatasetFilter,
    id_map::{Id, IdMap},
    lapis_filter::LapisFilter,
    multiplexed::demultiplex,
    organism::Organism,
    query_params::QueryParams,
    variant_filter::VariantFilter,
    views::{
        ComparisonFilter, RouteCodec, View,
        compare_variants::{default_variants, parse_variants, render_variants},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareToBaselineState {
    pub dataset_filter: DatasetFilter,
    pub variants: IdMap<VariantFilter>,
    pub baseline_filter: VariantFilter,
}

impl CompareToBaselineState {
    /// `None` when every variant id is taken.
    pub fn with_variant(&self, variant: VariantFilter) -> Option<(Self, Id)> {
        let (variants, id) = self.variants.with_added(variant)?;
        Some((Self { variants, ..self.clone() }, id))
    }

    pub fn without_variant(&self, id: Id) -> Self {
        Self {
            variants: self.variants.without(id),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareToBaselineRoute {
    organism: Organism,
}

impl CompareToBaselineRoute {
    pub fn new(organism: Organism) -> Self {
        Self { organism }
    }

    /// Dataset restricted to the baseline variant.
    pub fn baseline_lapis_filter(&self, state: &CompareToBaselineState) -> LapisFilter {
        let config = self.config();
        state
            .dataset_filter
            .to_lapis_filter(&config)
            .merged(&state.baseline_filter.to_lapis_filter(&config))
    }
}

impl RouteCodec for CompareToBaselineRoute {
    type State = CompareToBaselineState;

    fn organism(&self) -> Organism {
        self.organism
    }

    fn view(&self) -> View {
        View::CompareToBaseline
    }

    fn default_state(&self) -> CompareToBaselineState {
        let config = self.config();
        CompareToBaselineState {
            dataset_filter: DatasetFilter::default_for(&config),
            variants: default_variants(&config),
            baseline_filter: VariantFilter::default_for(&config),
        }
    }

    fn parse_params(&self, params: &QueryParams) -> Option<CompareToBaselineState> {
        let config = self.config();
        let demultiplexed = match demultiplex(params, &config, true) {
            Ok(demultiplexed) => demultiplexed,
            Err(err) => {
                tracing::debug!("rejecting {} query: {err}", self.pathname());
                return None;
            }
        };
        Some(CompareToBaselineState {
            dataset_filter: DatasetFilter::parse(&demultiplexed.shared, &config),
            variants: parse_variants(&demultiplexed.buckets, &config),
            baseline_filter: VariantFilter::parse(&demultiplexed.shared, &config),
        })
    }

    fn render_params(&self, state: &CompareToBaselineState) -> QueryParams {
        let config = self.config();
        let mut params = QueryParams::new();
        state.dataset_filter.render(&mut params, &config);
        state.baseline_filter.render(&mut params, &config);
        render_variants(&mut params, &state.variants, &config);
        params
    }

    fn lapis_filters(&self, state: &CompareToBaselineState) -> Vec<ComparisonFilter> {
        let config = self.config();
        let denominator = self.baseline_lapis_filter(state);
        state
            .variants
            .iter()
            .map(|(id, variant)| ComparisonFilter {
                id: Some(id),
                label: variant.display_name(),
                numerator: denominator.merged(&variant.to_lapis_filter(&config)),
                denominator: denominator.clone(),
            })
            .collect()
    }
}
