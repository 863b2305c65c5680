//! Stateful filtering over the active dataset.

use tracing::debug;

use crate::{
    dataset::Dataset,
    facet_values::{count_facet_values, derive_facet_values},
    predicates::filter_indices,
    question_record::QuestionRecord,
    search_query::{Facet, FacetSelection, FilterState},
    search_result::{FacetValueSets, SearchResultFacets},
};

/// What happens to the filter state when the active dataset is replaced.
///
/// Facet values of one language are not guaranteed to exist in the other,
/// so a kept selection can exclude every record of the new dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPolicy {
    /// Leave search text and selections untouched.
    Keep,
    /// Return to the neutral state.
    Reset,
    /// Keep the search text and drop selected values the new dataset lacks.
    #[default]
    Revalidate,
}

/// Owns the active dataset, its facet values, and the current filter state.
///
/// Facet values are derived only when the dataset changes. The visible
/// records are recomputed after every state change.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    dataset: Dataset,
    facet_values: FacetValueSets,
    state: FilterState,
    visible: Vec<usize>,
}

impl FilterEngine {
    pub fn new(dataset: Dataset) -> Self {
        let facet_values = derive_facet_values(dataset.records());
        let visible = (0..dataset.len()).collect();
        Self { dataset, facet_values, state: FilterState::default(), visible }
    }

    /// Starts from an existing state, e.g. one restored by the caller.
    pub fn with_state(dataset: Dataset, state: FilterState) -> Self {
        let mut engine = Self::new(dataset);
        engine.state = state;
        engine.refresh();
        engine
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn facet_values(&self) -> &FacetValueSets {
        &self.facet_values
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn selected(&self, facet: Facet) -> &FacetSelection {
        self.state.selection(facet)
    }

    /// Visible records in dataset order.
    pub fn filtered(&self) -> Vec<&QuestionRecord> {
        let records = self.dataset.records();
        self.visible.iter().map(|i| &records[*i]).collect()
    }

    pub fn match_count(&self) -> u64 {
        self.visible.len() as u64
    }

    pub fn facet_counts(&self, facet: Facet) -> SearchResultFacets {
        count_facet_values(self.dataset.records(), &self.facet_values, &self.state, facet)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.set_search_query(query);
        self.refresh();
    }

    pub fn toggle(&mut self, facet: Facet, value: &str) {
        self.state.toggle(facet, value);
        self.refresh();
    }

    pub fn toggle_difficulty(&mut self, value: &str) {
        self.toggle(Facet::Difficulty, value);
    }

    pub fn toggle_type(&mut self, value: &str) {
        self.toggle(Facet::Type, value);
    }

    pub fn toggle_domain(&mut self, value: &str) {
        self.toggle(Facet::Domain, value);
    }

    pub fn clear_facet(&mut self, facet: Facet) {
        self.state.selection_mut(facet).clear();
        self.refresh();
    }

    /// Clears the search text and every selection.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.refresh();
    }

    /// Makes `dataset` the active one, applying `policy` to the filter state.
    pub fn switch_dataset(&mut self, dataset: Dataset, policy: SwitchPolicy) {
        if !self.dataset.same_source(&dataset) {
            debug!(
                "Switching dataset {} -> {} ({} questions)",
                self.dataset.language(),
                dataset.language(),
                dataset.len()
            );
            self.facet_values = derive_facet_values(dataset.records());
            self.dataset = dataset;
        }
        match policy {
            SwitchPolicy::Keep => {}
            SwitchPolicy::Reset => self.state = FilterState::default(),
            SwitchPolicy::Revalidate => self.revalidate_selections(),
        }
        self.refresh();
    }

    fn revalidate_selections(&mut self) {
        for facet in Facet::ALL {
            let facet_values = &self.facet_values;
            let selection = self.state.selection_mut(facet);
            let before = selection.len();
            selection.retain(|value| facet_values.contains(facet, value));
            if selection.len() != before {
                debug!("Dropped {} {} selection(s) missing from the new dataset", before - selection.len(), facet);
            }
        }
    }

    fn refresh(&mut self) {
        self.visible = filter_indices(self.dataset.records(), &self.state);
    }
}
