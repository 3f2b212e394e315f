use std::sync::LazyLock;

use common::{lapis_filter::LapisFilter, organism::Organism};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::{
    config::lapis_url,
    lapis_utils::response_cache::{request_hash, response_cache},
};

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpRequest {
    Get { url: String },
    PostJson { url: String, body: String },
}

impl HttpRequest {
    /// Stable text form; the cache key is its hash.
    pub fn describe(&self) -> String {
        match self {
            HttpRequest::Get { url } => format!("GET {url}"),
            HttpRequest::PostJson { url, body } => format!("POST {url}\n{body}"),
        }
    }
}

pub fn aggregated_request(organism: Organism, filter: &LapisFilter) -> anyhow::Result<HttpRequest> {
    Ok(HttpRequest::PostJson {
        url: format!("{}/sample/aggregated", lapis_url(organism)),
        body: serde_json::to_string(filter)?,
    })
}

/// Sends `request` unless an identical one was answered before, and returns the raw body.
pub async fn fetch_text_cached(request: &HttpRequest) -> anyhow::Result<String> {
    let description = request.describe();
    let hash = request_hash(&description);
    if let Some(cached) = response_cache().get(&hash, &description).await {
        info!("LAPIS CACHE HIT: {}", hash);
        return Ok(cached);
    }
    info!("LAPIS CACHE MISS: {}", hash);

    let t0 = std::time::Instant::now();
    let response = match request {
        HttpRequest::Get { url } => HTTP_CLIENT.get(url).send().await?,
        HttpRequest::PostJson { url, body } => {
            HTTP_CLIENT
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone())
                .send()
                .await?
        }
    };
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        warn!("LAPIS ERROR: {} for {}", status, description);
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis();
    info!("LAPIS RESPONSE: len = {} ({}ms)", response_txt.len(), dt_ms);

    response_cache().insert(hash, description, response_txt.clone()).await;
    Ok(response_txt)
}

pub async fn fetch_json_cached<T: DeserializeOwned>(request: &HttpRequest) -> anyhow::Result<T> {
    let response_txt = fetch_text_cached(request).await?;
    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aggregated_request_posts_the_flat_filter() {
        let mut filter = LapisFilter::new();
        filter.insert_text("country", "Switzerland");
        filter.insert_list("nucleotideMutations", &["C241T".to_string()]);

        let HttpRequest::PostJson { url, body } = aggregated_request(Organism::Covid, &filter).unwrap() else {
            panic!("aggregated counts are posted");
        };
        assert!(url.ends_with("/sample/aggregated"));
        assert_eq!(body, r#"{"country":"Switzerland","nucleotideMutations":["C241T"]}"#);
    }

    #[test]
    fn descriptions_separate_method_and_body() {
        let get = HttpRequest::Get { url: "http://localhost/collections".to_string() };
        let post = HttpRequest::PostJson { url: "http://localhost/collections".to_string(), body: "{}".to_string() };
        assert_eq!(get.describe(), "GET http://localhost/collections");
        assert_eq!(post.describe(), "POST http://localhost/collections\n{}");
    }
}
