//! Derivation of the distinct facet values present in a dataset.

use std::collections::{HashMap, HashSet};

use crate::{
    predicates::build_record_predicate_without,
    question_record::QuestionRecord,
    search_query::{Facet, FilterState},
    search_result::{FacetValueSets, SearchResultFacetItem, SearchResultFacets},
};

/// Distinct values of `facet` across `records`, in first-seen order.
pub fn distinct_facet_values(records: &[QuestionRecord], facet: Facet) -> Vec<String> {
    let mut present_values = HashSet::new();
    let mut values = Vec::new();
    for value in records.iter().flat_map(|record| record.facet_values(facet)) {
        if present_values.insert(value.as_str()) {
            values.push(value.clone());
        }
    }
    values
}

/// Facet values of the whole dataset. Independent of any filter selection.
pub fn derive_facet_values(records: &[QuestionRecord]) -> FacetValueSets {
    FacetValueSets {
        difficulties: distinct_facet_values(records, Facet::Difficulty),
        types: distinct_facet_values(records, Facet::Type),
        domains: distinct_facet_values(records, Facet::Domain),
    }
}

/// Per-value match counts for one facet.
///
/// The facet's own selection is left out of the filter, so every option
/// keeps a meaningful count while the other facets and the search text
/// still apply. Every value in `facet_values` is listed, most matches
/// first, ties in first-seen order.
pub fn count_facet_values(
    records: &[QuestionRecord],
    facet_values: &FacetValueSets,
    query: &FilterState,
    facet: Facet,
) -> SearchResultFacets {
    let predicate = build_record_predicate_without(query, facet);
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in records.iter().filter(|record| predicate.matches(record)) {
        // a malformed record may repeat a value; count the record once
        let mut seen = HashSet::new();
        for value in record.facet_values(facet) {
            if seen.insert(value.as_str()) {
                *counts.entry(value.as_str()).or_default() += 1;
            }
        }
    }

    let selection = query.selection(facet);
    let mut items = facet_values
        .values(facet)
        .iter()
        .map(|value| SearchResultFacetItem {
            value: value.clone(),
            count: counts.get(value.as_str()).copied().unwrap_or(0),
            selected: selection.contains(value),
        })
        .collect::<Vec<_>>();
    items.sort_by_key(|item| u64::MAX - item.count);

    SearchResultFacets {
        query: query.clone(),
        facet,
        facet_values: items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_counts_ignore_own_selection_but_apply_others() {
        let records = vec![
            QuestionRecord::new(1_u64, "Soil erosion causes", "Easy", vec!["A", "B"], "Water"),
            QuestionRecord::new(2_u64, "Water pollution", "Hard", "A", vec!["Water", "Air"]),
            QuestionRecord::new(3_u64, "Ozone", "Easy", vec!["C"], "Air"),
        ];
        let facets = derive_facet_values(&records);
        let mut query = FilterState::default();
        query.toggle(Facet::Type, "B");
        query.toggle(Facet::Domain, "Air");

        let types = count_facet_values(&records, &facets, &query, Facet::Type);
        let pairs: Vec<(&str, u64, bool)> = types
            .facet_values
            .iter()
            .map(|item| (item.value.as_str(), item.count, item.selected))
            .collect();
        assert_eq!(pairs, vec![("A", 1, false), ("C", 1, false), ("B", 0, true)]);

        let difficulties = count_facet_values(&records, &facets, &query, Facet::Difficulty);
        assert!(difficulties.facet_values.iter().all(|item| item.count == 0));
        assert_eq!(difficulties.facet_values.len(), 2);
    }

    #[test]
    fn empty_dataset_has_no_values() {
        assert_eq!(derive_facet_values(&[]), FacetValueSets::default());
    }

    #[test]
    fn flattens_multi_valued_fields_in_first_seen_order() {
        let records = vec![
            QuestionRecord::new(1_u64, "Soil erosion causes", "Easy", vec!["A", "B"], "Water"),
            QuestionRecord::new(2_u64, "Water pollution", "Hard", "A", vec!["Water", "Air"]),
            QuestionRecord::new(3_u64, "Ozone", "Easy", vec!["C"], "Air"),
        ];
        let facets = derive_facet_values(&records);
        assert_eq!(facets.difficulties, ["Easy", "Hard"]);
        assert_eq!(facets.types, ["A", "B", "C"]);
        assert_eq!(facets.domains, ["Water", "Air"]);
    }

    #[test]
    fn scalar_and_single_element_list_contribute_equally() {
        let scalar = vec![QuestionRecord::new(1_u64, "q", "Easy", "A", "Water")];
        let list = vec![QuestionRecord::new(1_u64, "q", "Easy", vec!["A"], vec!["Water"])];
        assert_eq!(derive_facet_values(&scalar), derive_facet_values(&list));
    }
}
