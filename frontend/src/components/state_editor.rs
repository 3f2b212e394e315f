//! Filter controls for each view; every edit produces a whole new page state.

use common::{
    id_map::IdMap,
    organism::Organism,
    page_state::PageState,
    variant_filter::VariantFilter,
    views::{
        compare_side_by_side::{ColumnFilter, CompareSideBySideRoute, CompareSideBySideState},
        compare_to_baseline::CompareToBaselineState,
        compare_variants::CompareVariantsState,
        sequencing_efforts::SequencingEffortsState,
        single_variant::SingleVariantState,
    },
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdDelete, icons::md_content_icons::MdAdd};

use crate::components::{
    collection_selector::CollectionSelector, dataset_filter_editor::DatasetFilterEditor,
    variant_filter_editor::VariantFilterEditor,
};

#[component]
pub fn StateEditor(state: PageState, on_change: Callback<PageState>) -> Element {
    match state {
        PageState::SingleVariant(organism, state) => rsx! {
            SingleVariantEditor { organism, state, on_change }
        },
        PageState::CompareSideBySide(organism, state) => rsx! {
            ColumnListEditor {
                organism,
                state: state.clone(),
                on_change: move |changed| on_change.call(PageState::CompareSideBySide(organism, changed)),
            }
        },
        PageState::SequencingEfforts(organism, state) => rsx! {
            DatasetFilterEditor {
                organism,
                filter: state.dataset_filter.clone(),
                on_change: move |dataset_filter| {
                    on_change.call(PageState::SequencingEfforts(organism, SequencingEffortsState { dataset_filter }))
                },
            }
        },
        PageState::CompareVariants(organism, state) => rsx! {
            CompareVariantsEditor { organism, state, on_change }
        },
        PageState::CompareToBaseline(organism, state) => rsx! {
            CompareToBaselineEditor { organism, state, on_change }
        },
    }
}

#[component]
fn SingleVariantEditor(organism: Organism, state: SingleVariantState, on_change: Callback<PageState>) -> Element {
    let supports_collections = organism.config().supports_collections;
    let emit = move |state: SingleVariantState| on_change.call(PageState::SingleVariant(organism, state));

    rsx! {
        DatasetFilterEditor {
            organism,
            filter: state.dataset_filter.clone(),
            on_change: {
                let state = state.clone();
                move |dataset_filter| emit(SingleVariantState { dataset_filter, ..state.clone() })
            },
        }
        VariantFilterEditor {
            organism,
            filter: state.variant_filter.clone(),
            on_change: {
                let state = state.clone();
                move |variant_filter| emit(SingleVariantState { variant_filter, ..state.clone() })
            },
        }
        if supports_collections {
            CollectionSelector {
                organism,
                collection_id: state.collection_id,
                on_collection: {
                    let state = state.clone();
                    move |collection_id| emit(SingleVariantState { collection_id, ..state.clone() })
                },
                on_variant: {
                    let state = state.clone();
                    move |variant_filter| emit(SingleVariantState { variant_filter, ..state.clone() })
                },
            }
        }
    }
}

#[component]
fn ColumnListEditor(organism: Organism, state: CompareSideBySideState, on_change: Callback<CompareSideBySideState>) -> Element {
    let route = CompareSideBySideRoute::new(organism);

    rsx! {
        div {
            class: "x-entry-row",
            for (id, column) in state.filters.iter().map(|(id, column)| (id, column.clone())) {
                div {
                    key: "{id}",
                    class: "x-entry",
                    EntryHeader {
                        title: format!("Column {id}"),
                        removable: state.filters.len() > 1,
                        on_remove: {
                            let state = state.clone();
                            move |_| on_change.call(state.without_column(id))
                        },
                    }
                    DatasetFilterEditor {
                        organism,
                        filter: column.baseline_filter.clone(),
                        on_change: {
                            let state = state.clone();
                            let column = column.clone();
                            move |baseline_filter| {
                                let changed = ColumnFilter { baseline_filter, ..column.clone() };
                                on_change.call(state.with_column_replaced(id, changed))
                            }
                        },
                    }
                    VariantFilterEditor {
                        organism,
                        filter: column.variant_filter.clone(),
                        on_change: {
                            let state = state.clone();
                            let column = column.clone();
                            move |variant_filter| {
                                let changed = ColumnFilter { variant_filter, ..column.clone() };
                                on_change.call(state.with_column_replaced(id, changed))
                            }
                        },
                    }
                }
            }
        }
        AddEntryButton {
            label: "Add column".to_string(),
            on_add: {
                let state = state.clone();
                move |_| match state.with_column(route.empty_column()) {
                    Some((changed, _)) => on_change.call(changed),
                    None => dioxus::logger::tracing::warn!("No column id left"),
                }
            },
        }
    }
}

#[component]
fn CompareVariantsEditor(organism: Organism, state: CompareVariantsState, on_change: Callback<PageState>) -> Element {
    let emit = move |state: CompareVariantsState| on_change.call(PageState::CompareVariants(organism, state));

    rsx! {
        DatasetFilterEditor {
            organism,
            filter: state.dataset_filter.clone(),
            on_change: {
                let state = state.clone();
                move |dataset_filter| emit(CompareVariantsState { dataset_filter, ..state.clone() })
            },
        }
        VariantListEditor {
            organism,
            variants: state.variants.clone(),
            on_change: {
                let state = state.clone();
                move |variants| emit(CompareVariantsState { variants, ..state.clone() })
            },
        }
    }
}

#[component]
fn CompareToBaselineEditor(organism: Organism, state: CompareToBaselineState, on_change: Callback<PageState>) -> Element {
    let emit = move |state: CompareToBaselineState| on_change.call(PageState::CompareToBaseline(organism, state));

    rsx! {
        DatasetFilterEditor {
            organism,
            filter: state.dataset_filter.clone(),
            on_change: {
                let state = state.clone();
                move |dataset_filter| emit(CompareToBaselineState { dataset_filter, ..state.clone() })
            },
        }
        VariantFilterEditor {
            organism,
            title: "Baseline".to_string(),
            filter: state.baseline_filter.clone(),
            on_change: {
                let state = state.clone();
                move |baseline_filter| emit(CompareToBaselineState { baseline_filter, ..state.clone() })
            },
        }
        VariantListEditor {
            organism,
            variants: state.variants.clone(),
            on_change: {
                let state = state.clone();
                move |variants| emit(CompareToBaselineState { variants, ..state.clone() })
            },
        }
    }
}

#[component]
fn VariantListEditor(organism: Organism, variants: IdMap<VariantFilter>, on_change: Callback<IdMap<VariantFilter>>) -> Element {
    rsx! {
        div {
            class: "x-entry-row",
            for (id, variant) in variants.iter().map(|(id, variant)| (id, variant.clone())) {
                div {
                    key: "{id}",
                    class: "x-entry",
                    EntryHeader {
                        title: format!("Variant {id}"),
                        removable: true,
                        on_remove: {
                            let variants = variants.clone();
                            move |_| on_change.call(variants.without(id))
                        },
                    }
                    VariantFilterEditor {
                        organism,
                        filter: variant,
                        on_change: {
                            let variants = variants.clone();
                            move |changed| on_change.call(variants.with_replaced(id, changed))
                        },
                    }
                }
            }
        }
        AddEntryButton {
            label: "Add variant".to_string(),
            on_add: {
                let variants = variants.clone();
                move |_| match variants.with_added(VariantFilter::default()) {
                    Some((changed, _)) => on_change.call(changed),
                    None => dioxus::logger::tracing::warn!("No variant id left"),
                }
            },
        }
    }
}

#[component]
fn EntryHeader(title: String, removable: bool, on_remove: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-entry-header",
            strong { "{title}" }
            if removable {
                button {
                    class: "x-icon-button",
                    title: "Remove",
                    onclick: move |_| on_remove.call(()),
                    Icon { icon: MdDelete, style: "width: 18px; height: 18px;" }
                }
            }
        }
    }
}

#[component]
fn AddEntryButton(label: String, on_add: Callback<()>) -> Element {
    rsx! {
        button {
            class: "x-button",
            onclick: move |_| on_add.call(()),
            Icon { icon: MdAdd, style: "width: 18px; height: 18px;" }
            "{label}"
        }
    }
}
