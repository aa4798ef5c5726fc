//! Owns the facet state and the filtered view of the records.

use common::facet::{Facet, FacetState};

use crate::error::EngineResult;
use crate::filter::predicates::{FilterableRecord, active_predicates, matches_all};


/// What the presentation layer should show for the current result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    /// No facet is active; every record is listed.
    NoFiltersApplied(usize),
    NoResults,
    Matches(usize),
}

/// Holds the canonical [`FacetState`] and recomputes the filtered records
/// synchronously on every mutation, so the state and the result can never
/// be observed out of step.
#[derive(Debug, Clone)]
pub struct FacetFilterController<R> {
    records: Vec<R>,
    records_version: u64,
    state: FacetState,
    // indices into `records`, ascending
    filtered: Vec<usize>,
}

impl<R: FilterableRecord> FacetFilterController<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self::with_state(records, FacetState::default())
    }

    pub fn with_state(records: Vec<R>, state: FacetState) -> Self {
        let mut controller = Self { records, records_version: 0, state, filtered: Vec::new() };
        controller.recompute();
        controller
    }

    /// Sets a facet by its persisted name. Unknown names are an error.
    pub fn set_facet(&mut self, name: &str, value: impl Into<String>) -> EngineResult<()> {
        let facet: Facet = name.parse()?;
        self.set(facet, value);
        Ok(())
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        self.state.set(facet, value);
        self.recompute();
    }

    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.records_version += 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        let predicates = active_predicates(&self.state);
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_all(&predicates, *record))
            .map(|(index, _)| index)
            .collect();
        tracing::debug!(
            active_facets = predicates.len(),
            matches = self.filtered.len(),
            total = self.records.len(),
            records_version = self.records_version,
            "recomputed filtered records"
        );
    }

    pub fn state(&self) -> &FacetState {
        &self.state
    }

    pub fn records_version(&self) -> u64 {
        self.records_version
    }

    /// Records matching every active facet, in input order.
    pub fn filtered_records(&self) -> Vec<&R> {
        self.filtered.iter().map(|&index| &self.records[index]).collect()
    }

    /// First `n` entries of [`Self::filtered_records`].
    pub fn preview(&self, n: usize) -> Vec<&R> {
        self.filtered.iter().take(n).map(|&index| &self.records[index]).collect()
    }

    pub fn match_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn status(&self) -> ResultStatus {
        if active_predicates(&self.state).is_empty() {
            ResultStatus::NoFiltersApplied(self.filtered.len())
        } else if self.filtered.is_empty() {
            ResultStatus::NoResults
        } else {
            ResultStatus::Matches(self.filtered.len())
        }
    }
}
