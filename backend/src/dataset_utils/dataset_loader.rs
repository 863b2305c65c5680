//! Reads and validates per-language question files.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context;
use common::{
    dataset::{Dataset, Language},
    question_record::QuestionRecord,
    search_query::Facet,
};

pub fn dataset_path(dataset_dir: &Path, language: Language) -> PathBuf {
    dataset_dir.join(language.dataset_file_name())
}

pub fn load_dataset(dataset_dir: &Path, language: Language) -> anyhow::Result<Dataset> {
    let path = dataset_path(dataset_dir, language);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
    parse_dataset(language, &text).with_context(|| format!("Invalid dataset file {}", path.display()))
}

pub fn parse_dataset(language: Language, text: &str) -> anyhow::Result<Dataset> {
    let records: Vec<QuestionRecord> = serde_json::from_str(text)?;
    validate_records(&records)?;
    Ok(Dataset::new(language, records))
}

/// Rejects records the filtering engine cannot handle faithfully:
/// duplicate numbers, blank facet values and empty `Type`/`Domain` lists.
pub fn validate_records(records: &[QuestionRecord]) -> anyhow::Result<()> {
    let mut present_numbers = HashSet::new();
    for (position, record) in records.iter().enumerate() {
        if !present_numbers.insert(&record.number) {
            anyhow::bail!("Duplicate question number {} at position {}", record.number, position);
        }
        for facet in Facet::ALL {
            let values = record.facet_values(facet);
            if values.is_empty() {
                anyhow::bail!("Question {} has no {} value", record.number, facet);
            }
            if values.iter().any(|value| value.trim().is_empty()) {
                anyhow::bail!("Question {} has a blank {} value", record.number, facet);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::question_record::RecordNumber;

    const SAMPLE: &str = r#"[
        {"Number": 1, "Question": "Soil erosion causes", "Difficulty": "Easy", "Type": ["A", "B"], "Domain": "Water"},
        {"Number": 2, "Question": "Water pollution", "Difficulty": "Hard", "Type": "A", "Domain": ["Water", "Air"]}
    ]"#;

    #[test]
    fn loads_dataset_from_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("questions-en.json"), SAMPLE).expect("write dataset");
        let dataset = load_dataset(dir.path(), Language::En).expect("load");
        assert_eq!(dataset.language(), Language::En);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].number, RecordNumber::Int(2));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_dataset(dir.path(), Language::Zh).unwrap_err();
        assert!(format!("{err:#}").contains("questions-zh.json"));
    }

    #[test]
    fn rejects_duplicate_numbers() {
        let text = r#"[
            {"Number": 1, "Question": "a", "Difficulty": "Easy", "Type": "A", "Domain": "Water"},
            {"Number": 1, "Question": "b", "Difficulty": "Easy", "Type": "A", "Domain": "Water"}
        ]"#;
        let err = parse_dataset(Language::En, text).unwrap_err();
        assert!(err.to_string().contains("Duplicate question number 1"));
    }

    #[test]
    fn rejects_empty_type_list() {
        let text = r#"[{"Number": 1, "Question": "a", "Difficulty": "Easy", "Type": [], "Domain": "Water"}]"#;
        let err = parse_dataset(Language::En, text).unwrap_err();
        assert!(err.to_string().contains("has no type value"));
    }

    #[test]
    fn rejects_blank_difficulty() {
        let text = r#"[{"Number": 1, "Question": "a", "Difficulty": " ", "Type": "A", "Domain": "Water"}]"#;
        let err = parse_dataset(Language::En, text).unwrap_err();
        assert!(err.to_string().contains("blank difficulty value"));
    }

    #[test]
    fn rejects_malformed_field_shape() {
        let text = r#"[{"Number": 1, "Question": "a", "Difficulty": "Easy", "Type": {"x": 1}, "Domain": "Water"}]"#;
        assert!(parse_dataset(Language::En, text).is_err());
    }

    #[test]
    fn empty_dataset_is_valid() {
        let dataset = parse_dataset(Language::En, "[]").expect("parse");
        assert!(dataset.is_empty());
    }
}
