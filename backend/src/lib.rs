//! Dataset loading and the HTTP query surface over the filtering engine.

pub mod config;
pub mod dataset_utils;
pub mod api;
pub mod server_extra;
