use common::{
    lapis_filter::LapisFilter,
    organism::Organism,
    page_state::PageState,
    route_registry::registry,
    views::{ComparisonCount, ComparisonFilter},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::lapis_utils::lapis_client::{aggregated_request, fetch_json_cached};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResponse {
    pub data: Vec<AggregatedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub count: u64,
}

impl AggregatedResponse {
    /// Without grouping fields the API answers one row; summing also covers none.
    pub fn total_count(&self) -> u64 {
        self.data.iter().map(|row| row.count).sum()
    }
}

pub async fn aggregated_count(organism: Organism, filter: &LapisFilter) -> anyhow::Result<u64> {
    let request = aggregated_request(organism, filter)?;
    let response: AggregatedResponse = fetch_json_cached(&request).await?;
    Ok(response.total_count())
}

pub async fn comparison_count(organism: Organism, filter: ComparisonFilter) -> anyhow::Result<ComparisonCount> {
    let (count, total) = futures::try_join!(
        aggregated_count(organism, &filter.numerator),
        aggregated_count(organism, &filter.denominator),
    )?;
    Ok(ComparisonCount {
        id: filter.id,
        label: filter.label,
        count,
        total,
    })
}

/// One count per displayed entry, in the order the route lists them.
pub async fn comparison_counts(
    organism: Organism,
    filters: Vec<ComparisonFilter>,
) -> anyhow::Result<Vec<ComparisonCount>> {
    let t0 = std::time::Instant::now();
    let entries = filters.len();
    let counts =
        futures::future::try_join_all(filters.into_iter().map(|filter| comparison_count(organism, filter))).await?;
    info!("COUNTS: {} entries for {} in {}ms", entries, organism, t0.elapsed().as_millis());
    Ok(counts)
}

pub async fn page_state_counts(state: PageState) -> anyhow::Result<Vec<ComparisonCount>> {
    let filters = registry().lapis_filters(&state);
    comparison_counts(state.organism(), filters).await
}
