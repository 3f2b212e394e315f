//! Server functions for query-API counts and the collection catalog.

use common::{collections::Collection, organism::Organism, page_state::PageState, views::ComparisonCount};
use dioxus::prelude::*;


#[server]
pub async fn page_counts(state: PageState) -> Result<Vec<ComparisonCount>, ServerFnError> {
    let x = backend::api::aggregated_counts::page_state_counts(state).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_collections(organism: Organism) -> Result<Vec<Collection>, ServerFnError> {
    let x = backend::api::list_collections::list_collections(organism).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
