use common::search_result::DatasetSummary;

use crate::dataset_utils::dataset_store::DatasetStore;

pub fn list_datasets(store: &DatasetStore) -> Vec<DatasetSummary> {
    store.summaries()
}
