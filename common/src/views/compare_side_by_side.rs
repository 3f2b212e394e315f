//! N independent columns next to each other: `/{organism}/compare-side-by-side`.
//!
//! Every key carries the column id (`country$0=Germany&nextcladePangoLineage$1=JN.1`),
//! there are no shared keys.

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
pub struct ColumnFilter {
    pub baseline_filter: DatasetFilter,
    pub variant_filter: VariantFilter,
}

impl ColumnFilter {
    fn parse(params: &QueryParams, config: &OrganismConfig) -> Self {
        Self {
            baseline_filter: DatasetFilter::parse(params, config),
            variant_filter: VariantFilter::parse(params, config),
        }
    }

    fn render(&self, config: &OrganismConfig) -> QueryParams {
        let mut params = QueryParams::new();
        self.baseline_filter.render(&mut params, config);
        self.variant_filter.render(&mut params, config);
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareSideBySideState {
    pub filters: IdMap<ColumnFilter>,
}

impl CompareSideBySideState {
    /// Adds a column and returns the new state with the id of the column.
    /// `None` when every column id is taken.
    pub fn with_column(&self, column: ColumnFilter) -> Option<(Self, Id)> {
        let (filters, id) = self.filters.with_added(column)?;
        Some((Self { filters }, id))
    }

    pub fn with_column_replaced(&self, id: Id, column: ColumnFilter) -> Self {
        Self {
            filters: self.filters.with_replaced(id, column),
        }
    }

    pub fn without_column(&self, id: Id) -> Self {
        Self {
            filters: self.filters.without(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareSideBySideRoute {
    organism: Organism,
}

impl CompareSideBySideRoute {
    pub fn new(organism: Organism) -> Self {
        Self { organism }
    }

    pub fn empty_column(&self) -> ColumnFilter {
        let config = self.config();
        ColumnFilter {
            baseline_filter: DatasetFilter::default_for(&config),
            variant_filter: VariantFilter::default(),
        }
    }
}

impl RouteCodec for CompareSideBySideRoute {
    type State = CompareSideBySideState;

    fn organism(&self) -> Organism {
        self.organism
    }

    fn view(&self) -> View {
        View::CompareSideBySide
    }

    fn default_state(&self) -> CompareSideBySideState {
        let config = self.config();
        let first = ColumnFilter {
            baseline_filter: DatasetFilter::default_for(&config),
            variant_filter: VariantFilter::default_for(&config),
        };
        CompareSideBySideState {
            filters: [(0, first), (1, self.empty_column())].into_iter().collect(),
        }
    }

    fn parse_params(&self, params: &QueryParams) -> Option<CompareSideBySideState> {
        let config = self.config();
        let demultiplexed = match demultiplex(params, &config, false) {
            Ok(demultiplexed) => demultiplexed,
            Err(err) => {
                tracing::debug!("rejecting {} query: {err}", self.pathname());
                return None;
            }
        };
        let filters = demultiplexed
            .buckets
            .iter()
            .map(|(id, bucket)| (*id, ColumnFilter::parse(bucket, &config)))
            .collect();
        Some(CompareSideBySideState { filters })
    }

    fn render_params(&self, state: &CompareSideBySideState) -> QueryParams {
        let config = self.config();
        let mut params = QueryParams::new();
        let columns = state
            .filters
            .iter()
            .map(|(id, column)| (id, column.render(&config)));
        multiplex(&mut params, columns, &config);
        params
    }

    fn lapis_filters(&self, state: &CompareSideBySideState) -> Vec<ComparisonFilter> {
        let config = self.config();
        state
            .filters
            .iter()
            .map(|(id, column)| {
                let denominator = column.baseline_filter.to_lapis_filter(&config);
                let numerator = denominator.merged(&column.variant_filter.to_lapis_filter(&config));
                ComparisonFilter {
                    id: Some(id),
                    label: column.variant_filter.display_name(),
                    numerator,
                    denominator,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        date_range::{DateRange, NamedDateRange},
        location_filter::LocationFilter,
        variant_filter::SimpleVariantQuery,
    };
    use pretty_assertions::assert_eq;

    fn route() -> CompareSideBySideRoute {
        CompareSideBySideRoute::new(Organism::Covid)
    }

    #[test]
    fn groups_columns_by_id() {
        let state = route()
            .parse_query(&QueryParams::parse("region$1=CH&region$2=DE&nextcladePangoLineage$1=JN.1"))
            .unwrap();
        assert_eq!(state.filters.ids().collect::<Vec<_>>(), vec![1, 2]);

        let first = state.filters.get(1).unwrap();
        assert_eq!(first.baseline_filter.location.get("region"), Some("CH"));
        assert_eq!(first.variant_filter, VariantFilter::lineage("JN.1"));

        let second = state.filters.get(2).unwrap();
        assert_eq!(second.baseline_filter.location.get("region"), Some("DE"));
        assert_eq!(second.variant_filter, VariantFilter::Simple(SimpleVariantQuery::default()));
    }

    #[test]
    fn mixed_variant_fields_make_the_url_unparseable() {
        let params = QueryParams::parse("variantQuery$1=foo&nextcladePangoLineage$1=bar");
        assert_eq!(route().parse_query(&params), None);
    }

    #[test]
    fn unsuffixed_key_makes_the_url_unparseable() {
        let params = QueryParams::parse("region$1=CH&country=DE");
        assert_eq!(route().parse_query(&params), None);
    }

    #[test]
    fn columns_render_in_ascending_order() {
        let route = route();
        let config = route.config();
        let column = |region: &str| ColumnFilter {
            baseline_filter: DatasetFilter {
                location: LocationFilter::new().with("region", region),
                date_range: config.default_date_range,
            },
            variant_filter: VariantFilter::default(),
        };
        let state = CompareSideBySideState {
            filters: [(7, column("Asia")), (2, column("Europe"))].into_iter().collect(),
        };
        assert_eq!(route.render_query(&state).to_string(), "region%242=Europe&region%247=Asia");
    }

    #[test]
    fn round_trips_with_an_empty_column() {
        let route = route();
        let (state, id) = route.default_state().with_column(route.empty_column()).unwrap();
        assert_eq!(id, 2);
        let state = state.with_column_replaced(
            0,
            ColumnFilter {
                baseline_filter: DatasetFilter {
                    location: LocationFilter::new().with("country", "Switzerland"),
                    date_range: DateRange::Named(NamedDateRange::Last2Months),
                },
                variant_filter: VariantFilter::advanced("S:F456L & !BA.2*"),
            },
        );
        let query = route.render_query(&state).to_string();
        assert_eq!(route.parse_query(&QueryParams::parse(&query)), Some(state));
    }

    #[test]
    fn column_at_the_highest_id_blocks_adding() {
        let route = route();
        let state = route
            .parse_query(&QueryParams::parse("region%24999999=CH&region%240=DE"))
            .unwrap();
        assert_eq!(state.with_column(route.empty_column()), None);
        assert_eq!(state.filters.len(), 2);
    }

    #[test]
    fn oversized_column_id_is_unparseable() {
        let route = route();
        assert_eq!(route.parse_query(&QueryParams::parse("region%244294967295=CH")), None);
    }

    #[test]
    fn removing_a_column_keeps_other_ids() {
        let route = route();
        let state = route.default_state().without_column(0);
        assert_eq!(state.filters.ids().collect::<Vec<_>>(), vec![1]);
        let query = route.render_query(&state).to_string();
        let parsed = route.parse_query(&QueryParams::parse(&query)).unwrap();
        assert_eq!(parsed.filters.ids().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn lapis_filters_per_column() {
        let route = CompareSideBySideRoute::new(Organism::Mpox);
        let state = route.default_state();
        let filters = route.lapis_filters(&state);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].id, Some(0));
        assert_eq!(filters[0].numerator, filters[0].denominator);
        assert!(filters[0].denominator.get("sampleCollectionDateFrom").is_some());
    }
}
