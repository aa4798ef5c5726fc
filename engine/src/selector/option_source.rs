//! Strategies a selector uses to turn its query text into options.

use std::rc::Rc;

use common::select_option::{OptionCatalog, SelectOption};
use futures::future::LocalBoxFuture;


/// Future produced by a delegated search.
pub type SearchFuture = LocalBoxFuture<'static, anyhow::Result<Vec<SelectOption>>>;

/// Caller supplied asynchronous search.
pub type SearchFn = Rc<dyn Fn(String) -> SearchFuture>;

pub enum Resolution {
    Ready(Vec<SelectOption>),
    Pending(SearchFuture),
}

pub trait OptionSource {
    /// Options for `query`, either immediately or as a future.
    fn resolve(&self, query: &str) -> Resolution;

    /// Options shown when the query is reset, on creation and on open.
    /// `None` keeps whatever is currently shown; it must not start a search.
    fn reset_options(&self) -> Option<Vec<SelectOption>>;

    /// Catalog backing this source, if it has one.
    fn catalog(&self) -> Option<&OptionCatalog> {
        None
    }
}


/// Case-insensitive label containment over a fixed catalog.
#[derive(Debug, Clone, Default)]
pub struct LocalCatalog {
    catalog: OptionCatalog,
}

impl LocalCatalog {
    pub fn new(catalog: OptionCatalog) -> Self {
        Self { catalog }
    }

    pub fn filter(&self, query: &str) -> Vec<SelectOption> {
        let query = query.to_lowercase();
        self.catalog
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

impl OptionSource for LocalCatalog {
    fn resolve(&self, query: &str) -> Resolution {
        Resolution::Ready(self.filter(query))
    }

    fn reset_options(&self) -> Option<Vec<SelectOption>> {
        Some(self.catalog.options().to_vec())
    }

    fn catalog(&self) -> Option<&OptionCatalog> {
        Some(&self.catalog)
    }
}


/// Forwards every query to an injected search function.
#[derive(Clone)]
pub struct DelegatedSearch {
    search: SearchFn,
}

impl DelegatedSearch {
    pub fn new(search: SearchFn) -> Self {
        Self { search }
    }

    pub fn from_fn<F>(search: F) -> Self
    where
        F: Fn(String) -> SearchFuture + 'static,
    {
        Self { search: Rc::new(search) }
    }
}

impl std::fmt::Debug for DelegatedSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatedSearch").finish_non_exhaustive()
    }
}

impl OptionSource for DelegatedSearch {
    fn resolve(&self, query: &str) -> Resolution {
        Resolution::Pending((self.search)(query.to_string()))
    }

    fn reset_options(&self) -> Option<Vec<SelectOption>> {
        None
    }
}


#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    fn cities() -> OptionCatalog {
        OptionCatalog::distinct("Toutes les villes", ["Paris", "Lyon", "Marseille"])
    }

    #[test]
    fn local_filter_is_case_insensitive_and_ordered() {
        let source = LocalCatalog::new(cities());
        let labels: Vec<String> = source.filter("L").into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Toutes les villes", "Lyon", "Marseille"]);
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let source = LocalCatalog::new(cities());
        assert_eq!(source.filter("").len(), 4);
        assert_eq!(source.reset_options().map(|o| o.len()), Some(4));
    }

    #[test]
    fn empty_catalog_never_resolves_options() {
        let source = LocalCatalog::default();
        match source.resolve("anything") {
            Resolution::Ready(options) => assert!(options.is_empty()),
            Resolution::Pending(_) => panic!("local source must resolve synchronously"),
        }
    }

    #[test]
    fn delegated_reset_does_not_search() {
        let calls = Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        let source = DelegatedSearch::from_fn(move |_query| {
            counter.set(counter.get() + 1);
            async { Ok::<_, anyhow::Error>(Vec::new()) }.boxed_local()
        });
        assert!(source.reset_options().is_none());
        assert_eq!(calls.get(), 0);
    }
}
