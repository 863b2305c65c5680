//! Benchmark question records and the normalization of multi-valued fields.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::search_query::Facet;

/// Stable identifier of a question, as stored in the dataset (`Number`).
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialOrd, Ord, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordNumber {
    Int(u64),
    String(String),
}

impl Display for RecordNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for RecordNumber {
    fn from(value: u64) -> Self {
        RecordNumber::Int(value)
    }
}

impl From<&str> for RecordNumber {
    fn from(value: &str) -> Self {
        RecordNumber::String(value.to_string())
    }
}

/// A categorical field stored either as a bare string or as a list of strings.
///
/// Both shapes are read through [`FacetField::values`], which is the only
/// place the distinction exists. A `Many` with no entries is a malformed
/// record: it contributes no facet values and fails every non-empty
/// selection of its facet, while a neutral selection still lets it through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FacetField {
    One(String),
    Many(Vec<String>),
}

impl FacetField {
    /// The field's values as a uniform one-or-more sequence.
    pub fn values(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values.as_slice(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values().iter().any(|v| v == value)
    }
}

impl From<&str> for FacetField {
    fn from(value: &str) -> Self {
        FacetField::One(value.to_string())
    }
}

impl From<Vec<&str>> for FacetField {
    fn from(values: Vec<&str>) -> Self {
        FacetField::Many(values.into_iter().map(|v| v.to_string()).collect())
    }
}

/// One benchmark item. Field names on disk follow the published datasets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionRecord {
    #[serde(rename = "Number")]
    pub number: RecordNumber,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
    #[serde(rename = "Type")]
    pub question_type: FacetField,
    #[serde(rename = "Domain")]
    pub domain: FacetField,
}

impl QuestionRecord {
    pub fn new(
        number: impl Into<RecordNumber>,
        question: impl Into<String>,
        difficulty: impl Into<String>,
        question_type: impl Into<FacetField>,
        domain: impl Into<FacetField>,
    ) -> Self {
        Self {
            number: number.into(),
            question: question.into(),
            difficulty: difficulty.into(),
            question_type: question_type.into(),
            domain: domain.into(),
        }
    }

    /// Normalized values of one facet. Difficulty is always a single value.
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Difficulty => std::slice::from_ref(&self.difficulty),
            Facet::Type => self.question_type.values(),
            Facet::Domain => self.domain.values(),
        }
    }
}
