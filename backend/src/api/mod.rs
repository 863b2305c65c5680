//! Query functions behind the HTTP routes.

pub mod list_datasets;
pub mod search;
