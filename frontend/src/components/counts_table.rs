//! Sequence counts for every displayed entry of a page.

use common::{page_state::PageState, views::ComparisonCount};
use dioxus::prelude::*;

use crate::api::dashboard_api::page_counts;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::LoadingIndicator;

fn format_proportion(count: &ComparisonCount) -> String {
    match count.proportion() {
        Some(proportion) => format!("{:.2}%", proportion * 100.0),
        None => "-".to_string(),
    }
}

#[component]
pub fn CountsTable(state: ReadSignal<PageState>) -> Element {
    let mut counts = use_resource(move || {
        let state = state.read().clone();
        page_counts(state)
    });
    use_effect(move || {
        let _ = state.read();
        counts.clear();
        counts.restart();
    });

    let counts = counts.read();
    let counts = match counts.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{e}") } },
        Some(Ok(counts)) => counts.clone(),
        None => return rsx! { LoadingIndicator {} },
    };

    rsx! {
        table {
            class: "x-counts",
            thead {
                tr {
                    th { "Entry" }
                    th { "Sequences" }
                    th { "Of" }
                    th { "Share" }
                }
            }
            tbody {
                for count in counts {
                    tr {
                        key: "{count.id:?}-{count.label}",
                        td { "{count.label}" }
                        td { "{count.count}" }
                        td { "{count.total}" }
                        td { {format_proportion(&count)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn proportions_are_percentages() {
        let count = ComparisonCount { id: Some(1), label: "KP.2*".to_string(), count: 1, total: 8 };
        assert_eq!(format_proportion(&count), "12.50%");
        assert_eq!(format_proportion(&ComparisonCount { total: 0, ..count }), "-");
    }
}
