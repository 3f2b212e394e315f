//! HTTP plumbing shared by the API calls.

pub mod lapis_client;
pub mod response_cache;
