//! Facet value and facet count endpoints.

use common::{
    facet_values::count_facet_values,
    search_query::{Facet, FilterState},
    search_result::{FacetValueSets, SearchResultFacets},
};

use crate::dataset_utils::dataset_store::StoredDataset;

/// All facet values of the dataset, regardless of any selection.
pub fn search_facet_values(stored: &StoredDataset) -> FacetValueSets {
    stored.facet_values.clone()
}

pub fn search_facet_counts(stored: &StoredDataset, query: &FilterState, facet: Facet) -> SearchResultFacets {
    count_facet_values(stored.dataset.records(), &stored.facet_values, query, facet)
}
