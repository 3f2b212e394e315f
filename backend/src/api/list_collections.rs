use common::{collections::Collection, organism::Organism};
use tracing::info;

use crate::{
    config::collections_url,
    lapis_utils::lapis_client::{HttpRequest, fetch_json_cached},
};

pub fn collections_request(organism: Organism) -> HttpRequest {
    HttpRequest::Get {
        url: format!("{}/collections?organism={}", collections_url(), organism.slug()),
    }
}

/// Organisms without catalog support get an empty list without a request.
pub async fn list_collections(organism: Organism) -> anyhow::Result<Vec<Collection>> {
    if !organism.config().supports_collections {
        return Ok(Vec::new());
    }
    let collections: Vec<Collection> = fetch_json_cached(&collections_request(organism)).await?;
    info!("COLLECTIONS: {} for {}", collections.len(), organism);
    Ok(collections)
}
