use common::{
    navigation::Navigation, organism::Organism, page_state::PageState, route_registry::registry, views::View,
};
use dioxus::prelude::*;

use crate::{
    components::{
        copy_link_button::CopyLinkButton, counts_table::CountsTable, state_editor::StateEditor,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::{page_query::PageQuery, router_navigation::RouterNavigation},
    routes::Route,
};

/// Decodes the page state from the query; an unreadable query shows the defaults.
fn decode_state(organism: Organism, view: View, query: &PageQuery) -> (PageState, bool) {
    let pathname = format!("/{}/{}", organism.slug(), view.slug());
    match registry().parse(&pathname, &query.0) {
        Some(state) => (state, false),
        None => (registry().default_state(organism, view), true),
    }
}

#[component]
pub fn DashboardPage(organism: Organism, view: View, query: PageQuery) -> Element {
    let (state, fell_back) = decode_state(organism, view, &query);
    if fell_back {
        dioxus::logger::tracing::info!("Unreadable query for /{}/{}: {}", organism, view, query);
    }
    let current = Route::DashboardPage { organism, view, query: query.clone() };
    let navigate = use_callback(move |next: PageState| {
        let mut navigation = Navigation::new(registry(), RouterNavigation::new(&current));
        navigation.navigate_to(&next);
    });
    let config = organism.config();

    rsx! {
        Title { "{config.label} - {view.label()}" }
        div {
            id: "x-dashboard",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 24px 32px;
                box-sizing: border-box;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
                h1 { style: "margin: 0; flex-grow: 1;", "{config.label}" }
                CopyLinkButton { state: state.clone() }
            }
            ViewTabs { organism, view }
            if fell_back {
                div {
                    class: "x-notice",
                    "This link could not be read. The dashboard shows its default filters."
                }
            }
            StateEditor { state: state.clone(), on_change: navigate }
            SuspendWrapper {
                CountsTable { state: state.clone() }
            }
        }
    }
}

fn tab_class(active: bool) -> String {
    if active { "x-tab x-tab-active".to_string() } else { "x-tab".to_string() }
}

#[component]
fn ViewTabs(organism: Organism, view: View) -> Element {
    rsx! {
        div {
            class: "x-tabs",
            for tab in View::ALL {
                Link {
                    class: tab_class(tab == view),
                    to: Route::landing(organism, tab),
                    "{tab.label()}"
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
    fn unreadable_query_falls_back_to_defaults() {
        let query = PageQuery::from("country=Germany&lineage=B.1");
        let (state, fell_back) = decode_state(Organism::Mpox, View::CompareSideBySide, &query);
        assert!(fell_back);
        assert_eq!(state, registry().default_state(Organism::Mpox, View::CompareSideBySide));
    }

    #[test]
    fn readable_query_is_decoded() {
        let query = PageQuery::from("variantQuery=S%3AF456L");
        let (state, fell_back) = decode_state(Organism::Covid, View::SingleVariant, &query);
        assert!(!fell_back);
        assert_eq!(registry().to_url(&state), "/covid/single-variant?variantQuery=S%3AF456L");
    }
}
