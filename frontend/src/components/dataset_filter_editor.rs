//! Location and date-range inputs shared by every view.

use common::{
    dataset_filter::DatasetFilter,
    date_range::{DateRange, NamedDateRange},
    organism::Organism,
};
use dioxus::prelude::*;

const CUSTOM_RANGE: &str = "custom";

#[component]
pub fn DatasetFilterEditor(organism: Organism, filter: DatasetFilter, on_change: Callback<DatasetFilter>) -> Element {
    let config = organism.config();
    let location = filter.location.clone();

    rsx! {
        fieldset {
            class: "x-fieldset",
            legend { "Dataset" }
            for field in config.location_fields.iter().copied() {
                label {
                    class: "x-field",
                    span { "{field}" }
                    input {
                        r#type: "text",
                        value: location.get(field).unwrap_or_default().to_string(),
                        placeholder: "any",
                        onchange: {
                            let filter = filter.clone();
                            move |e: Event<FormData>| {
                                let location = filter.location.with(field, e.value().trim());
                                on_change.call(DatasetFilter { location, ..filter.clone() });
                            }
                        },
                    }
                }
            }
            DateRangeInput {
                organism,
                date_range: filter.date_range,
                on_change: {
                    let filter = filter.clone();
                    move |date_range: DateRange| {
                        on_change.call(DatasetFilter { date_range, ..filter.clone() });
                    }
                },
            }
        }
    }
}

#[component]
fn DateRangeInput(organism: Organism, date_range: DateRange, on_change: Callback<DateRange>) -> Element {
    let earliest = organism.config().earliest_date;
    let selected = match date_range {
        DateRange::Named(named) => named.token(),
        DateRange::Concrete(_) => CUSTOM_RANGE,
    };

    rsx! {
        label {
            class: "x-field",
            span { "Date range" }
            select {
                value: selected,
                onchange: move |e: Event<FormData>| {
                    let value = e.value();
                    if value == CUSTOM_RANGE {
                        let range = date_range.to_concrete_today(earliest);
                        on_change.call(DateRange::Concrete(range));
                    } else if let Some(named) = NamedDateRange::from_token(&value) {
                        on_change.call(DateRange::Named(named));
                    }
                },
                for named in NamedDateRange::ALL {
                    option { value: named.token(), selected: selected == named.token(), "{named.label()}" }
                }
                option { value: CUSTOM_RANGE, selected: selected == CUSTOM_RANGE, "Custom" }
            }
        }
        if let DateRange::Concrete(range) = date_range {
            label {
                class: "x-field",
                span { "From" }
                input {
                    r#type: "date",
                    value: range.from.to_string(),
                    onchange: move |e: Event<FormData>| {
                        if let Ok(changed) = format!("{}--{}", e.value(), range.to).parse::<DateRange>() {
                            on_change.call(changed);
                        }
                    },
                }
            }
            label {
                class: "x-field",
                span { "To" }
                input {
                    r#type: "date",
                    value: range.to.to_string(),
                    onchange: move |e: Event<FormData>| {
                        if let Ok(changed) = format!("{}--{}", range.from, e.value()).parse::<DateRange>() {
                            on_change.call(changed);
                        }
                    },
                }
            }
        }
    }
}
