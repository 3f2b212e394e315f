//! Editor for one variant filter: either lineage and mutations, or a free-text query.

use common::{
    organism::Organism,
    variant_filter::{MutationQuery, SimpleVariantQuery, VariantFilter},
};
use dioxus::prelude::*;

fn split_codes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn VariantFilterEditor(
    organism: Organism,
    filter: VariantFilter,
    on_change: Callback<VariantFilter>,
    #[props(default)] title: Option<String>,
) -> Element {
    let config = organism.config();
    let mut advanced_mode = use_signal(|| matches!(filter, VariantFilter::Advanced(_)));
    let is_advanced = advanced_mode() || matches!(filter, VariantFilter::Advanced(_));
    let title = title.unwrap_or_else(|| "Variant".to_string());

    let simple = match &filter {
        VariantFilter::Simple(simple) => simple.clone(),
        VariantFilter::Advanced(_) => SimpleVariantQuery::default(),
    };
    let advanced_query = match &filter {
        VariantFilter::Advanced(advanced) => advanced.variant_query.clone(),
        VariantFilter::Simple(_) => String::new(),
    };
    let lineage_hint = format!("e.g. {}", config.default_lineage.unwrap_or("B.1"));

    let mutation_inputs: [(&str, Vec<String>, fn(&mut MutationQuery) -> &mut Vec<String>); 4] = [
        ("Nucleotide mutations", simple.mutations.nucleotide_mutations.clone(), |m| &mut m.nucleotide_mutations),
        ("Amino acid mutations", simple.mutations.amino_acid_mutations.clone(), |m| &mut m.amino_acid_mutations),
        ("Nucleotide insertions", simple.mutations.nucleotide_insertions.clone(), |m| &mut m.nucleotide_insertions),
        ("Amino acid insertions", simple.mutations.amino_acid_insertions.clone(), |m| &mut m.amino_acid_insertions),
    ];

    rsx! {
        fieldset {
            class: "x-fieldset",
            legend { "{title}" }
            label {
                class: "x-field x-field-inline",
                input {
                    r#type: "checkbox",
                    checked: is_advanced,
                    onchange: move |e: Event<FormData>| {
                        let checked = e.checked();
                        advanced_mode.set(checked);
                        // switching modes drops the other member's values
                        on_change.call(VariantFilter::default());
                    },
                }
                span { "Advanced query" }
            }
            if is_advanced {
                label {
                    class: "x-field",
                    span { "{config.advanced_query_field}" }
                    input {
                        r#type: "text",
                        value: advanced_query,
                        placeholder: "e.g. nucleotideMutations:C241T & !S:E484K",
                        onchange: move |e: Event<FormData>| {
                            let query = e.value().trim().to_string();
                            on_change.call(VariantFilter::from_parts(Some(query), SimpleVariantQuery::default()));
                        },
                    }
                }
            } else {
                label {
                    class: "x-field",
                    span { "Lineage" }
                    input {
                        r#type: "text",
                        value: simple.lineage.clone().unwrap_or_default(),
                        placeholder: lineage_hint,
                        onchange: {
                            let simple = simple.clone();
                            move |e: Event<FormData>| {
                                let lineage = e.value().trim().to_string();
                                let lineage = (!lineage.is_empty()).then_some(lineage);
                                on_change.call(VariantFilter::from_parts(None, SimpleVariantQuery { lineage, ..simple.clone() }));
                            }
                        },
                    }
                }
                for (name, codes, select) in mutation_inputs {
                    label {
                        class: "x-field",
                        span { "{name}" }
                        input {
                            r#type: "text",
                            value: codes.join(", "),
                            placeholder: "comma separated",
                            onchange: {
                                let simple = simple.clone();
                                move |e: Event<FormData>| {
                                    let mut changed = simple.clone();
                                    *select(&mut changed.mutations) = split_codes(&e.value());
                                    on_change.call(VariantFilter::from_parts(None, changed));
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
