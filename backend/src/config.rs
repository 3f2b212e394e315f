//! Service locations, read from the environment with public defaults.

use std::time::Duration;

use common::organism::Organism;

pub const COLLECTIONS_URL_VAR: &str = "COLLECTIONS_URL";
const DEFAULT_COLLECTIONS_URL: &str = "https://cov-spectrum.org/api/v2";

pub const CACHE_TTL_VAR: &str = "LAPIS_CACHE_TTL_SECONDS";
const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;

pub fn lapis_url_var(organism: Organism) -> &'static str {
    match organism {
        Organism::Covid => "LAPIS_URL_COVID",
        Organism::H5n1 => "LAPIS_URL_H5N1",
        Organism::Mpox => "LAPIS_URL_MPOX",
        Organism::WestNile => "LAPIS_URL_WEST_NILE",
        Organism::RsvA => "LAPIS_URL_RSV_A",
        Organism::RsvB => "LAPIS_URL_RSV_B",
    }
}

fn default_lapis_url(organism: Organism) -> &'static str {
    match organism {
        Organism::Covid => "https://lapis.cov-spectrum.org/open/v2",
        Organism::H5n1 => "https://lapis.pathoplexus.org/h5n1",
        Organism::Mpox => "https://lapis.pathoplexus.org/mpox",
        Organism::WestNile => "https://lapis.pathoplexus.org/west-nile",
        Organism::RsvA => "https://lapis.pathoplexus.org/rsv-a",
        Organism::RsvB => "https://lapis.pathoplexus.org/rsv-b",
    }
}

fn env_or(var: &str, default: &str) -> String {
    let value = std::env::var(var).unwrap_or(default.to_string());
    value.trim_end_matches('/').to_string()
}

/// Base URL of the query API instance serving `organism`, without a trailing slash.
pub fn lapis_url(organism: Organism) -> String {
    env_or(lapis_url_var(organism), default_lapis_url(organism))
}

pub fn collections_url() -> String {
    env_or(COLLECTIONS_URL_VAR, DEFAULT_COLLECTIONS_URL)
}

fn parse_ttl(value: Option<&str>) -> Duration {
    let seconds = value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_CACHE_TTL_SECONDS);
    Duration::from_secs(seconds)
}

/// How long a cached query-API response is served before it is fetched again.
pub fn cache_ttl() -> Duration {
    parse_ttl(std::env::var(CACHE_TTL_VAR).ok().as_deref())
}
