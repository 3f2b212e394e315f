//! Calls exposed to the web application's server functions.

pub mod aggregated_counts;
pub mod list_collections;
