//! Record predicates built from a filter state.

use crate::{
    question_record::QuestionRecord,
    search_query::{Facet, FacetSelection, FilterState},
};

/// All four filter predicates of a [`FilterState`], prepared for repeated use.
///
/// Search matching is a case-insensitive substring test against the
/// question text. Facet selections combine with OR inside a facet and AND
/// across facets; an empty selection accepts every record.
#[derive(Debug, Clone)]
pub struct RecordPredicate<'q> {
    needle: Option<String>,
    facet_filters: Vec<(Facet, &'q FacetSelection)>,
}

pub fn build_record_predicate(query: &FilterState) -> RecordPredicate<'_> {
    let needle = query.effective_search().map(|s| s.to_lowercase());
    let facet_filters = Facet::ALL
        .into_iter()
        .map(|facet| (facet, query.selection(facet)))
        .filter(|(_, selection)| !selection.is_empty())
        .collect();
    RecordPredicate { needle, facet_filters }
}

/// Like [`build_record_predicate`], but ignoring the selection of `skip`.
pub fn build_record_predicate_without(query: &FilterState, skip: Facet) -> RecordPredicate<'_> {
    let mut predicate = build_record_predicate(query);
    predicate.facet_filters.retain(|(facet, _)| *facet != skip);
    predicate
}

impl RecordPredicate<'_> {
    pub fn matches_search(&self, record: &QuestionRecord) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => record.question.to_lowercase().contains(needle.as_str()),
        }
    }

    pub fn matches_facets(&self, record: &QuestionRecord) -> bool {
        self.facet_filters
            .iter()
            .all(|(facet, selection)| selection.intersects(record.facet_values(*facet)))
    }

    pub fn matches(&self, record: &QuestionRecord) -> bool {
        // facet checks are cheaper than lowercasing the question text
        self.matches_facets(record) && self.matches_search(record)
    }

    pub fn is_neutral(&self) -> bool {
        self.needle.is_none() && self.facet_filters.is_empty()
    }
}

/// Positions of the records passing `query`, in dataset order.
pub fn filter_indices(records: &[QuestionRecord], query: &FilterState) -> Vec<usize> {
    let predicate = build_record_predicate(query);
    if predicate.is_neutral() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate.matches(record))
        .map(|(i, _)| i)
        .collect()
}

/// The records passing `query`, in dataset order.
pub fn filter_records<'a>(records: &'a [QuestionRecord], query: &FilterState) -> Vec<&'a QuestionRecord> {
    let predicate = build_record_predicate(query);
    records.iter().filter(|record| predicate.matches(record)).collect()
}

pub fn count_matches(records: &[QuestionRecord], query: &FilterState) -> u64 {
    let predicate = build_record_predicate(query);
    records.iter().filter(|record| predicate.matches(record)).count() as u64
}
