//! Search endpoint for paged result lists.

use common::{
    predicates::filter_records,
    search_const::PAGE_SIZE,
    search_query::FilterState,
    search_result::{SearchResultQuestionItem, SearchResultQuestions},
    text_highlight::highlight_query_matches,
};

use crate::dataset_utils::dataset_store::StoredDataset;

/// One page of matching questions, in dataset order, with search matches highlighted.
pub fn search_for_results(stored: &StoredDataset, query: FilterState, current_search_result_page: u64) -> SearchResultQuestions {
    let matches = filter_records(stored.dataset.records(), &query);
    let page_size = PAGE_SIZE as usize;
    let offset = usize::try_from(current_search_result_page)
        .unwrap_or(usize::MAX)
        .saturating_mul(page_size)
        .min(matches.len());
    let end = offset.saturating_add(page_size).min(matches.len());

    let mut prev_number = None;
    if current_search_result_page > 0 && offset > 0 {
        prev_number = Some(matches[offset - 1].number.clone());
    }
    let next_number = matches.get(end).map(|record| record.number.clone());

    let highlight_query = query.effective_search().unwrap_or("");
    let results = matches[offset..end]
        .iter()
        .enumerate()
        .map(|(i, record)| SearchResultQuestionItem {
            record: (*record).clone(),
            highlight_text_spans: highlight_query_matches(&record.question, highlight_query),
            result_index_in_page: i as u64,
        })
        .collect::<Vec<_>>();

    SearchResultQuestions {
        total_count: matches.len() as u64,
        query,
        results,
        prev_number,
        next_number,
        page_number: current_search_result_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{
        dataset::{Dataset, Language},
        question_record::{QuestionRecord, RecordNumber},
    };

    fn stored(count: u64) -> StoredDataset {
        let records = (0..count)
            .map(|i| {
                let difficulty = if i % 2 == 0 { "Easy" } else { "Hard" };
                QuestionRecord::new(i, format!("Question about water {i}"), difficulty, "A", "Water")
            })
            .collect();
        StoredDataset::new(Dataset::new(Language::En, records))
    }

    #[test]
    fn first_page_has_next_but_no_prev() {
        let result = search_for_results(&stored(45), FilterState::default(), 0);
        assert_eq!(result.total_count, 45);
        assert_eq!(result.results.len(), PAGE_SIZE as usize);
        assert_eq!(result.prev_number, None);
        assert_eq!(result.next_number, Some(RecordNumber::Int(PAGE_SIZE)));
        assert_eq!(result.results[3].result_index_in_page, 3);
    }

    #[test]
    fn last_page_is_partial() {
        let result = search_for_results(&stored(45), FilterState::default(), 2);
        assert_eq!(result.results.len(), 5);
        assert_eq!(result.prev_number, Some(RecordNumber::Int(39)));
        assert_eq!(result.next_number, None);
        assert_eq!(result.results[0].record.number, RecordNumber::Int(40));
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let result = search_for_results(&stored(5), FilterState::default(), 7);
        assert!(result.results.is_empty());
        assert_eq!(result.total_count, 5);
        assert_eq!(result.next_number, None);
    }

    #[test]
    fn filters_and_highlights() {
        let mut query = FilterState::default();
        query.set_search_query("WATER");
        query.toggle(common::search_query::Facet::Difficulty, "Hard");
        let result = search_for_results(&stored(4), query, 0);
        let numbers: Vec<RecordNumber> = result.results.iter().map(|item| item.record.number.clone()).collect();
        assert_eq!(numbers, vec![RecordNumber::Int(1), RecordNumber::Int(3)]);
        let highlighted: Vec<&str> = result.results[0]
            .highlight_text_spans
            .iter()
            .filter(|span| span.is_highlighted)
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(highlighted, vec!["water"]);
    }
}
