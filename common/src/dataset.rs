//! Per-language question collections.

use std::{fmt::Display, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::question_record::QuestionRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialOrd, Ord, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// File holding this language's questions inside a dataset directory.
    pub fn dataset_file_name(&self) -> String {
        format!("questions-{}.json", self.code())
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl Display for UnknownLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown language code: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// An immutable, ordered question collection for one language.
///
/// Cloning shares the records; two clones are the same dataset for
/// [`Dataset::same_source`].
#[derive(Debug, Clone)]
pub struct Dataset {
    language: Language,
    records: Arc<[QuestionRecord]>,
}

impl Dataset {
    pub fn new(language: Language, records: Vec<QuestionRecord>) -> Self {
        Self { language, records: records.into() }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identity comparison: true only for clones of the same loaded dataset.
    pub fn same_source(&self, other: &Dataset) -> bool {
        self.language == other.language && Arc::ptr_eq(&self.records, &other.records)
    }
}
