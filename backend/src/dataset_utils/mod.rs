//! Dataset files: loading, validation and the in-memory store.

pub mod dataset_loader;
pub mod dataset_store;
