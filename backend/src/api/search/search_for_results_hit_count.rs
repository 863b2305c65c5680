use common::{predicates::count_matches, search_query::FilterState};
use serde::{Deserialize, Serialize};

use crate::dataset_utils::dataset_store::StoredDataset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchForResultsHitCountResponse {
    pub total_count: u64,
}

pub fn search_for_results_hit_count(stored: &StoredDataset, query: &FilterState) -> u64 {
    count_matches(stored.dataset.records(), query)
}
