use std::collections::BTreeMap;

use chrono::NaiveDate;
use proptest::prelude::*;

use common::{
    dataset_filter::DatasetFilter,
    date_range::{DateRange, NamedDateRange},
    id_map::IdMap,
    location_filter::LocationFilter,
    organism::Organism,
    page_state::PageState,
    route_registry::registry,
    variant_filter::{MutationQuery, SimpleVariantQuery, VariantFilter},
    views::{
        compare_side_by_side::{ColumnFilter, CompareSideBySideState},
        compare_to_baseline::CompareToBaselineState,
        compare_variants::CompareVariantsState,
        sequencing_efforts::SequencingEffortsState,
        single_variant::SingleVariantState,
    },
};

fn organism_strategy() -> impl Strategy<Value = Organism> {
    prop::sample::select(Organism::ALL.to_vec())
}

// no commas: array elements containing one are split on parse
fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9.*:_]{1,8}"
}

fn free_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .*:&=+$%/-]{1,16}"
}

fn date_range_strategy() -> impl Strategy<Value = DateRange> {
    let date = (2000i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap());
    prop_oneof![
        prop::sample::select(NamedDateRange::ALL.to_vec()).prop_map(DateRange::Named),
        (date.clone(), date).prop_map(|(from, to)| DateRange::concrete(from, to)),
    ]
}

fn dataset_filter_strategy(organism: Organism) -> impl Strategy<Value = DatasetFilter> {
    let fields = organism.config().location_fields;
    (
        prop::collection::vec(prop::option::of(free_text_strategy()), fields.len()),
        date_range_strategy(),
    )
        .prop_map(move |(values, date_range)| {
            let location = fields
                .iter()
                .zip(values)
                .fold(LocationFilter::new(), |location, (field, value)| match value {
                    Some(value) => location.with(field, &value),
                    None => location,
                });
            DatasetFilter { location, date_range }
        })
}

fn variant_filter_strategy() -> impl Strategy<Value = VariantFilter> {
    let mutations = || prop::collection::vec(token_strategy(), 0..3);
    let simple = (
        prop::option::of(token_strategy()),
        mutations(),
        mutations(),
        mutations(),
        mutations(),
    )
        .prop_map(|(lineage, nuc, aa, nuc_ins, aa_ins)| {
            VariantFilter::Simple(SimpleVariantQuery {
                lineage,
                mutations: MutationQuery {
                    nucleotide_mutations: nuc,
                    amino_acid_mutations: aa,
                    nucleotide_insertions: nuc_ins,
                    amino_acid_insertions: aa_ins,
                },
            })
        });
    prop_oneof![
        free_text_strategy().prop_map(|query| VariantFilter::advanced(&query)),
        simple,
    ]
}

fn variants_strategy(min: usize) -> impl Strategy<Value = IdMap<VariantFilter>> {
    prop::collection::btree_map(0u32..20, variant_filter_strategy(), min..4)
        .prop_map(|variants: BTreeMap<_, _>| variants.into_iter().collect())
}

fn page_state_strategy() -> impl Strategy<Value = PageState> {
    organism_strategy().prop_flat_map(|organism| {
        prop_oneof![
            (
                dataset_filter_strategy(organism),
                variant_filter_strategy(),
                prop::option::of(0i64..1000),
            )
                .prop_map(move |(dataset_filter, variant_filter, collection_id)| {
                    PageState::SingleVariant(
                        organism,
                        SingleVariantState { dataset_filter, variant_filter, collection_id },
                    )
                }),
            prop::collection::btree_map(
                0u32..20,
                (dataset_filter_strategy(organism), variant_filter_strategy()),
                1..4,
            )
            .prop_map(move |columns| {
                let filters = columns
                    .into_iter()
                    .map(|(id, (baseline_filter, variant_filter))| {
                        (id, ColumnFilter { baseline_filter, variant_filter })
                    })
                    .collect();
                PageState::CompareSideBySide(organism, CompareSideBySideState { filters })
            }),
            dataset_filter_strategy(organism).prop_map(move |dataset_filter| {
                PageState::SequencingEfforts(organism, SequencingEffortsState { dataset_filter })
            }),
            (dataset_filter_strategy(organism), variants_strategy(0)).prop_map(
                move |(dataset_filter, variants)| {
                    PageState::CompareVariants(organism, CompareVariantsState { dataset_filter, variants })
                }
            ),
            (
                dataset_filter_strategy(organism),
                variants_strategy(0),
                variant_filter_strategy(),
            )
                .prop_map(move |(dataset_filter, variants, baseline_filter)| {
                    PageState::CompareToBaseline(
                        organism,
                        CompareToBaselineState { dataset_filter, variants, baseline_filter },
                    )
                }),
        ]
    })
}

proptest! {
    #[test]
    fn parse_inverts_to_url(state in page_state_strategy()) {
        let url = registry().to_url(&state);
        prop_assert_eq!(registry().parse_url_str(&url), Some(state));
    }

    #[test]
    fn parsed_advanced_and_simple_members_stay_apart(
        lineage in token_strategy(),
        query in free_text_strategy(),
    ) {
        let url = format!(
            "/covid/single-variant?nextcladePangoLineage={lineage}&variantQuery={}",
            url::form_urlencoded::byte_serialize(query.as_bytes()).collect::<String>()
        );
        let Some(PageState::SingleVariant(_, state)) = registry().parse_url_str(&url) else {
            panic!("covid single variant url did not parse");
        };
        prop_assert_eq!(state.variant_filter, VariantFilter::advanced(&query));
    }
}

#[test]
fn default_states_omit_every_parameter() {
    for route in registry().routes() {
        let state = route.default_state();
        assert_eq!(registry().to_url(&state), format!("{}?", route.pathname()));
        assert_eq!(registry().parse_url_str(&route.pathname()), Some(state));
    }
}
