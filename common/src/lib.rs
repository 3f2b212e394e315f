//! Page-state models and the URL codec shared between frontend and backend.

extern crate serde;


pub mod error;
pub mod query_params;
pub mod date_range;
pub mod organism;
pub mod location_filter;
pub mod dataset_filter;
pub mod variant_filter;
pub mod lapis_filter;
pub mod id_map;
pub mod multiplexed;
pub mod views;
pub mod page_state;
pub mod route_registry;
pub mod navigation;
pub mod collections;
