//! Several variants within one dataset: `/{organism}/compare-variants`.
//!
//! Dataset keys are plain, variant keys carry the variant id
//! (`country=Germany&nextcladePangoLineage$0=JN.1*&variantQuery$1=S:F456L`).

use serde::{Deserialize, Serialize};

use crate::{
    dataset_filter::DatasetFilter,
    id_map::{Id, IdMap},
    multiplexed::{demultiplex, multiplex},
    organism::{Organism, OrganismConfig},
    query_params::QueryParams,
    variant_filter::VariantFilter,
    views::{ComparisonFilter, RouteCodec, View},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareVariantsState {
    pub dataset_filter: DatasetFilter,
    pub variants: IdMap<VariantFilter>,
}

impl CompareVariantsState {
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

/// Variants preselected on comparison views: the organism's comparison
/// lineages, or its default variant filter when it has none.
pub(crate) fn default_variants(config: &OrganismConfig) -> IdMap<VariantFilter> {
    if config.comparison_lineages.is_empty() {
        return [(0, VariantFilter::default_for(config))].into_iter().collect();
    }
    config
        .comparison_lineages
        .iter()
        .zip(0..)
        .map(|(lineage, id)| (id, VariantFilter::lineage(lineage)))
        .collect()
}

pub(crate) fn parse_variants(
    buckets: &std::collections::BTreeMap<Id, QueryParams>,
    config: &OrganismConfig,
) -> IdMap<VariantFilter> {
    buckets
        .iter()
        .map(|(id, bucket)| (*id, VariantFilter::parse(bucket, config)))
        .collect()
}

pub(crate) fn render_variants(
    params: &mut QueryParams,
    variants: &IdMap<VariantFilter>,
    config: &OrganismConfig,
) {
    let entries = variants.iter().map(|(id, variant)| {
        let mut bucket = QueryParams::new();
        variant.render(&mut bucket, config);
        (id, bucket)
    });
    multiplex(params, entries, config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareVariantsRoute {
    organism: Organism,
}

impl CompareVariantsRoute {
    pub fn new(organism: Organism) -> Self {
        Self { organism }
    }
}

impl RouteCodec for CompareVariantsRoute {
    type State = CompareVariantsState;

    fn organism(&self) -> Organism {
        self.organism
    }

    fn view(&self) -> View {
        View::CompareVariants
    }

    fn default_state(&self) -> CompareVariantsState {
        let config = self.config();
        CompareVariantsState {
            dataset_filter: DatasetFilter::default_for(&config),
            variants: default_variants(&config),
        }
    }

    fn parse_params(&self, params: &QueryParams) -> Option<CompareVariantsState> {
        let config = self.config();
        let demultiplexed = match demultiplex(params, &config, true) {
            Ok(demultiplexed) => demultiplexed,
            Err(err) => {
                tracing::debug!("rejecting {} query: {err}", self.pathname());
                return None;
            }
        };
        Some(CompareVariantsState {
            dataset_filter: DatasetFilter::parse(&demultiplexed.shared, &config),
            variants: parse_variants(&demultiplexed.buckets, &config),
        })
    }

    fn render_params(&self, state: &CompareVariantsState) -> QueryParams {
        let config = self.config();
        let mut params = QueryParams::new();
        state.dataset_filter.render(&mut params, &config);
        render_variants(&mut params, &state.variants, &config);
        params
    }

    fn lapis_filters(&self, state: &CompareVariantsState) -> Vec<ComparisonFilter> {
        let config = self.config();
        let denominator = state.dataset_filter.to_lapis_filter(&config);
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
