use common::{organism::Organism, page_state::PageState, route_registry::registry, views::View};
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::page_query::PageQuery;
use crate::pages::dashboard_page::DashboardPage;
use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/:organism/:view?:..query")]
    DashboardPage {
        organism: Organism,
        view: View,
        query: PageQuery,
    },

    #[end_layout]

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn dashboard(state: &PageState) -> Self {
        let query = registry()
            .route(state.organism(), state.view())
            .and_then(|route| route.render_query(state))
            .unwrap_or_default();
        Self::DashboardPage {
            organism: state.organism(),
            view: state.view(),
            query: query.into(),
        }
    }

    pub fn landing(organism: Organism, view: View) -> Self {
        Self::DashboardPage {
            organism,
            view,
            query: PageQuery::default(),
        }
    }
}
