//! Searchable selection control, independent of any UI toolkit.

pub mod option_source;
mod searchable_selector;

pub use option_source::{DelegatedSearch, LocalCatalog, OptionSource, Resolution, SearchFn, SearchFuture};
pub use searchable_selector::{
    HighlightDirection, PendingSearch, SearchApplied, SearchCompletion, SearchRequestId, SearchableSelector,
};
