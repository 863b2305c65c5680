use serde::{Deserialize, Serialize};

use crate::{
    dataset::Language,
    question_record::{QuestionRecord, RecordNumber},
    search_query::{Facet, FilterState},
    text_highlight::HighlightTextSpan,
};

/// Distinct values of every facet in a dataset, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FacetValueSets {
    pub difficulties: Vec<String>,
    pub types: Vec<String>,
    pub domains: Vec<String>,
}

impl FacetValueSets {
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Difficulty => &self.difficulties,
            Facet::Type => &self.types,
            Facet::Domain => &self.domains,
        }
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).iter().any(|v| v == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultQuestions {
    pub query: FilterState,
    pub results: Vec<SearchResultQuestionItem>,
    pub prev_number: Option<RecordNumber>,
    pub next_number: Option<RecordNumber>,
    pub page_number: u64,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultQuestionItem {
    pub record: QuestionRecord,
    pub highlight_text_spans: Vec<HighlightTextSpan>,
    pub result_index_in_page: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultFacets {
    pub query: FilterState,
    pub facet: Facet,
    pub facet_values: Vec<SearchResultFacetItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultFacetItem {
    pub value: String,
    pub count: u64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub language: Language,
    pub question_count: u64,
}
