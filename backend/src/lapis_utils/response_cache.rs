//! In-process cache of raw response bodies, keyed by the sha256 of the request.

use std::{
    collections::HashMap,
    sync::LazyLock,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::config::cache_ttl;

const MAX_ENTRIES: usize = 2048;

#[derive(Debug, Clone)]
struct CachedResponse {
    request: String,
    response: String,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedResponse>>,
}

static CACHE: LazyLock<ResponseCache> = LazyLock::new(|| ResponseCache::with_ttl(cache_ttl()));

pub fn response_cache() -> &'static ResponseCache {
    &CACHE
}

pub fn request_hash(request: &str) -> String {
    sha256::digest(request)
}

impl ResponseCache {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The stored request must match too, so a hash collision reads as a miss.
    /// Entries older than the ttl are dropped on read.
    pub async fn get(&self, request_hash: &str, request: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;
        let cached = entries.get(request_hash)?;
        if cached.stored_at.elapsed() >= self.ttl {
            entries.remove(request_hash);
            return None;
        }
        (cached.request == request).then(|| cached.response.clone())
    }

    pub async fn insert(&self, request_hash: String, request: String, response: String) {
        let mut entries = self.entries.lock().await;
        if entries.len() >= MAX_ENTRIES && !entries.contains_key(&request_hash) {
            let ttl = self.ttl;
            entries.retain(|_, cached| cached.stored_at.elapsed() < ttl);
            if entries.len() >= MAX_ENTRIES {
                entries.clear();
            }
        }
        let stored_at = Instant::now();
        entries.insert(request_hash, CachedResponse { request, response, stored_at });
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}
