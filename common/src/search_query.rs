//! Shared filter state models and helpers.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// A categorical dimension records can be filtered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialOrd, Ord, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Difficulty,
    Type,
    Domain,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Difficulty, Facet::Type, Facet::Domain];

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Difficulty => "difficulty",
            Self::Type => "type",
            Self::Domain => "domain",
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFacet(pub String);

impl Display for UnknownFacet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown facet: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFacet {}

impl FromStr for Facet {
    type Err = UnknownFacet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.field_name() == s)
            .ok_or_else(|| UnknownFacet(s.to_string()))
    }
}

/// Selected values of one facet, kept in the order they were selected.
///
/// An empty selection places no constraint on its facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FacetSelection(Vec<String>);

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `value` if selected, appends it otherwise.
    pub fn toggle(&mut self, value: &str) {
        if self.contains(value) {
            self.0.retain(|v| v != value);
        } else {
            self.0.push(value.to_string());
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// True when any of `values` is selected.
    pub fn intersects(&self, values: &[String]) -> bool {
        values.iter().any(|v| self.contains(v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Keeps only the values accepted by `keep`, preserving selection order.
    pub fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.0.retain(keep);
    }
}

impl<S: Into<String>> FromIterator<S> for FacetSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = FacetSelection::new();
        for value in iter {
            let value = value.into();
            if !selection.contains(&value) {
                selection.0.push(value);
            }
        }
        selection
    }
}

/// Search text plus the selected values of every facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub search_query: String,
    pub selected_difficulties: FacetSelection,
    pub selected_types: FacetSelection,
    pub selected_domains: FacetSelection,
}

impl FilterState {
    pub fn selection(&self, facet: Facet) -> &FacetSelection {
        match facet {
            Facet::Difficulty => &self.selected_difficulties,
            Facet::Type => &self.selected_types,
            Facet::Domain => &self.selected_domains,
        }
    }

    pub fn selection_mut(&mut self, facet: Facet) -> &mut FacetSelection {
        match facet {
            Facet::Difficulty => &mut self.selected_difficulties,
            Facet::Type => &mut self.selected_types,
            Facet::Domain => &mut self.selected_domains,
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle(&mut self, facet: Facet, value: &str) {
        self.selection_mut(facet).toggle(value);
    }

    /// The search text as typed, or `None` when it is blank and search places
    /// no constraint. Matching uses the untrimmed text.
    pub fn effective_search(&self) -> Option<&str> {
        let trimmed = self.search_query.trim();
        if trimmed.is_empty() { None } else { Some(self.search_query.as_str()) }
    }

    /// True when no part of the state constrains the result.
    pub fn is_neutral(&self) -> bool {
        self.effective_search().is_none() && Facet::ALL.iter().all(|facet| self.selection(*facet).is_empty())
    }

    /// A copy of this state with one facet's selection cleared.
    pub fn without_facet(&self, facet: Facet) -> FilterState {
        let mut state = self.clone();
        state.selection_mut(facet).clear();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_appends_then_removes() {
        let mut selection = FacetSelection::new();
        selection.toggle("Easy");
        selection.toggle("Hard");
        assert_eq!(selection.iter().collect::<Vec<_>>(), ["Easy", "Hard"]);
        selection.toggle("Easy");
        assert_eq!(selection.iter().collect::<Vec<_>>(), ["Hard"]);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut state = FilterState::default();
        state.toggle(Facet::Type, "A");
        let before = state.clone();
        state.toggle(Facet::Type, "B");
        state.toggle(Facet::Type, "B");
        assert_eq!(state, before);
    }

    #[test]
    fn whitespace_search_is_neutral() {
        let mut state = FilterState::default();
        state.set_search_query("   \t");
        assert_eq!(state.effective_search(), None);
        assert!(state.is_neutral());
        state.set_search_query(" flood");
        assert_eq!(state.effective_search(), Some(" flood"));
        assert!(!state.is_neutral());
    }

    #[test]
    fn deserializes_partial_state() {
        let state: FilterState = serde_json::from_str(r#"{"selected_types": ["B"]}"#).unwrap();
        assert_eq!(state.search_query, "");
        assert!(state.selection(Facet::Type).contains("B"));
        assert!(state.selection(Facet::Domain).is_empty());
    }

    #[test]
    fn facet_names_round_trip() {
        for facet in Facet::ALL {
            assert_eq!(facet.field_name().parse::<Facet>(), Ok(facet));
        }
        assert!("answer".parse::<Facet>().is_err());
    }

    #[test]
    fn collecting_drops_duplicates() {
        let selection: FacetSelection = ["Air", "Water", "Air"].into_iter().collect();
        assert_eq!(selection.len(), 2);
    }
}
