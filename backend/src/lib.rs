//! Server-side calls to the genomic query API and the collection catalog.

pub mod api;
pub mod config;
pub mod lapis_utils;
