//! Single-value chooser with in-place text search and keyboard highlight.

use common::select_option::{OptionCatalog, SelectOption};

use crate::selector::option_source::{
    DelegatedSearch, LocalCatalog, OptionSource, Resolution, SearchFn, SearchFuture,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchRequestId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightDirection {
    Up,
    Down,
}

/// A delegated search that has been issued but not yet applied.
///
/// The caller drives it on whatever executor it owns and hands the
/// completion back through [`SearchableSelector::complete_search`].
pub struct PendingSearch {
    request: SearchRequestId,
    query: String,
    future: SearchFuture,
}

impl PendingSearch {
    pub fn request(&self) -> SearchRequestId {
        self.request
    }

    pub async fn resolve(self) -> SearchCompletion {
        let result = self.future.await;
        SearchCompletion { request: self.request, result }
    }
}

impl std::fmt::Debug for PendingSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSearch")
            .field("request", &self.request)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct SearchCompletion {
    pub request: SearchRequestId,
    pub result: anyhow::Result<Vec<SelectOption>>,
}

/// How a completed delegated search was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchApplied {
    Applied,
    /// The search failed; options were cleared.
    Failed,
    /// A newer request was issued after this one; the result was dropped.
    Stale,
}


pub struct SearchableSelector {
    source: Box<dyn OptionSource>,
    is_open: bool,
    query_text: String,
    highlighted: Option<usize>,
    resolved_options: Vec<SelectOption>,
    next_request: u64,
    in_flight: Option<SearchRequestId>,
}

impl SearchableSelector {
    pub fn new(source: impl OptionSource + 'static) -> Self {
        let resolved_options = source.reset_options().unwrap_or_default();
        Self {
            source: Box::new(source),
            is_open: false,
            query_text: String::new(),
            highlighted: None,
            resolved_options,
            next_request: 0,
            in_flight: None,
        }
    }

    pub fn local(catalog: OptionCatalog) -> Self {
        Self::new(LocalCatalog::new(catalog))
    }

    pub fn delegated(search: SearchFn) -> Self {
        Self::new(DelegatedSearch::new(search))
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn resolved_options(&self) -> &[SelectOption] {
        &self.resolved_options
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Label to show on the closed control for the current facet value.
    pub fn selected_label(&self, value: &str) -> Option<&str> {
        self.source.catalog()?.find(value).map(|option| option.label.as_str())
    }

    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.query_text.clear();
        self.highlighted = None;
        // delegated sources keep their last result until the next query
        if let Some(options) = self.source.reset_options() {
            self.resolved_options = options;
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Escape key or equivalent.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Pointer or focus moved outside the control.
    pub fn focus_lost(&mut self) {
        self.close();
    }

    /// Stores the query and recomputes the options. Delegated selectors
    /// return the search to drive; its result only lands if no newer query
    /// was set in the meantime.
    pub fn set_query_text(&mut self, text: impl Into<String>) -> Option<PendingSearch> {
        self.query_text = text.into();
        self.highlighted = None;
        match self.source.resolve(&self.query_text) {
            Resolution::Ready(options) => {
                self.resolved_options = options;
                None
            }
            Resolution::Pending(future) => {
                let request = SearchRequestId(self.next_request);
                self.next_request += 1;
                self.in_flight = Some(request);
                tracing::debug!(request = request.0, query = %self.query_text, "issued delegated search");
                Some(PendingSearch { request, query: self.query_text.clone(), future })
            }
        }
    }

    pub fn complete_search(&mut self, completion: SearchCompletion) -> SearchApplied {
        if self.in_flight != Some(completion.request) {
            tracing::debug!(request = completion.request.0, "discarded stale search result");
            return SearchApplied::Stale;
        }
        self.in_flight = None;
        self.highlighted = None;
        match completion.result {
            Ok(options) => {
                self.resolved_options = options;
                SearchApplied::Applied
            }
            Err(err) => {
                tracing::warn!(request = completion.request.0, "delegated search failed: {err:#}");
                self.resolved_options.clear();
                SearchApplied::Failed
            }
        }
    }

    /// Emits the value at `index` and closes. Out of range does nothing.
    pub fn select_by_index(&mut self, index: usize) -> Option<String> {
        let value = self.resolved_options.get(index)?.value.clone();
        self.close();
        Some(value)
    }

    pub fn select_current_highlight(&mut self) -> Option<String> {
        let index = self.highlighted?;
        self.select_by_index(index)
    }

    pub fn move_highlight(&mut self, direction: HighlightDirection) {
        let Some(last) = self.resolved_options.len().checked_sub(1) else {
            self.highlighted = None;
            return;
        };
        self.highlighted = match (direction, self.highlighted) {
            (HighlightDirection::Down, None) => Some(0),
            (HighlightDirection::Down, Some(i)) => Some((i + 1).min(last)),
            (HighlightDirection::Up, None) => None,
            (HighlightDirection::Up, Some(i)) => Some(i.saturating_sub(1).min(last)),
        };
    }
}

impl std::fmt::Debug for SearchableSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchableSelector")
            .field("is_open", &self.is_open)
            .field("query_text", &self.query_text)
            .field("highlighted", &self.highlighted)
            .field("resolved_options", &self.resolved_options.len())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}
