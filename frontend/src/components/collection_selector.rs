//! Picks a curated collection, then one of its variants as the variant filter.

use common::{collections::Collection, organism::Organism, variant_filter::VariantFilter};
use dioxus::prelude::*;

use crate::api::dashboard_api::list_collections;
use crate::components::error_boundary::{ComponentErrorDisplay, InlineError};
use crate::components::suspend_boundary::LoadingIndicator;

#[component]
pub fn CollectionSelector(
    organism: ReadSignal<Organism>,
    collection_id: ReadSignal<Option<i64>>,
    on_collection: Callback<Option<i64>>,
    on_variant: Callback<VariantFilter>,
) -> Element {
    let collections = use_resource(move || {
        let organism = *organism.read();
        list_collections(organism)
    });
    let mut variant_error = use_signal(|| None::<String>);

    let collections = collections.read();
    let collections = match collections.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{e}") } },
        Some(Ok(collections)) => collections.clone(),
        None => return rsx! { LoadingIndicator {} },
    };
    let selected: Option<Collection> = collection_id()
        .and_then(|id| collections.iter().find(|collection| collection.id == id).cloned());
    let selected_value = selected.as_ref().map(|collection| collection.id.to_string()).unwrap_or_default();

    rsx! {
        fieldset {
            class: "x-fieldset",
            legend { "Collection" }
            select {
                value: selected_value,
                onchange: move |e: Event<FormData>| {
                    variant_error.set(None);
                    on_collection.call(e.value().parse::<i64>().ok());
                },
                option { value: "", "None" }
                for collection in collections.iter() {
                    option {
                        value: collection.id.to_string(),
                        selected: Some(collection.id) == collection_id(),
                        "{collection.title}"
                    }
                }
            }
            if let Some(collection) = selected {
                if let Some(description) = collection.description.clone() {
                    p { class: "x-muted", "{description}" }
                }
                div {
                    class: "x-chip-row",
                    for (name, hint, variant) in collection.variants.iter().map(|v| (v.name.clone(), v.description.clone().unwrap_or_default(), v.clone())) {
                        button {
                            class: "x-chip",
                            title: hint,
                            onclick: move |_| match variant.variant_filter() {
                                Ok(filter) => {
                                    variant_error.set(None);
                                    on_variant.call(filter);
                                }
                                Err(e) => {
                                    dioxus::logger::tracing::warn!("Unusable collection variant {}: {}", variant.name, e);
                                    variant_error.set(Some(format!("{}: {e}", variant.name)));
                                }
                            },
                            "{name}"
                        }
                    }
                }
            }
            if let Some(message) = variant_error() {
                InlineError { message }
            }
        }
    }
}
