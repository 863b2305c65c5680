//! Loaded datasets with their facet values, keyed by language.

use std::{collections::BTreeMap, path::Path};

use common::{
    dataset::{Dataset, Language},
    facet_values::derive_facet_values,
    search_result::{DatasetSummary, FacetValueSets},
};
use tracing::{info, warn};

use crate::dataset_utils::dataset_loader::{dataset_path, load_dataset};

#[derive(Debug, Clone)]
pub struct StoredDataset {
    pub dataset: Dataset,
    /// Derived once, when the dataset is stored.
    pub facet_values: FacetValueSets,
}

impl StoredDataset {
    pub fn new(dataset: Dataset) -> Self {
        let facet_values = derive_facet_values(dataset.records());
        Self { dataset, facet_values }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    datasets: BTreeMap<Language, StoredDataset>,
}

impl DatasetStore {
    /// Loads every language whose dataset file exists in `dataset_dir`.
    pub fn load(dataset_dir: &Path) -> anyhow::Result<Self> {
        let mut store = DatasetStore::default();
        for language in Language::ALL {
            let path = dataset_path(dataset_dir, language);
            if !path.exists() {
                warn!("No dataset for language {}: {} not found", language, path.display());
                continue;
            }
            let dataset = load_dataset(dataset_dir, language)?;
            info!("Loaded {} questions for language {}", dataset.len(), language);
            store.insert(dataset);
        }
        if store.datasets.is_empty() {
            anyhow::bail!("No dataset files found in {}", dataset_dir.display());
        }
        Ok(store)
    }

    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        let mut store = DatasetStore::default();
        for dataset in datasets {
            store.insert(dataset);
        }
        store
    }

    /// Stores `dataset`, replacing any dataset of the same language.
    pub fn insert(&mut self, dataset: Dataset) {
        self.datasets.insert(dataset.language(), StoredDataset::new(dataset));
    }

    pub fn get(&self, language: Language) -> Option<&StoredDataset> {
        self.datasets.get(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.datasets.keys().copied()
    }

    pub fn summaries(&self) -> Vec<DatasetSummary> {
        self.datasets
            .values()
            .map(|stored| DatasetSummary {
                language: stored.dataset.language(),
                question_count: stored.dataset.len() as u64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_available_languages_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("questions-zh.json"),
            r#"[{"Number": 1, "Question": "水污染", "Difficulty": "困难", "Type": "A", "Domain": ["水", "大气"]}]"#,
        )
        .expect("write dataset");
        let store = DatasetStore::load(dir.path()).expect("load");
        assert_eq!(store.languages().collect::<Vec<_>>(), vec![Language::Zh]);
        assert!(store.get(Language::En).is_none());
        let stored = store.get(Language::Zh).expect("zh dataset");
        assert_eq!(stored.facet_values.domains, ["水", "大气"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(DatasetStore::load(dir.path()).is_err());
    }

    #[test]
    fn invalid_file_fails_the_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("questions-en.json"), "{not json").expect("write dataset");
        assert!(DatasetStore::load(dir.path()).is_err());
    }

    #[test]
    fn summaries_follow_language_order() {
        let store = DatasetStore::from_datasets([
            Dataset::new(Language::En, vec![]),
            Dataset::new(Language::Zh, vec![]),
        ]);
        let summaries = store.summaries();
        assert_eq!(summaries[0].language, Language::Zh);
        assert_eq!(summaries[1].language, Language::En);
        assert!(summaries.iter().all(|s| s.question_count == 0));
    }
}
