//! Faceted job search engine: searchable selectors, the facet filter
//! controller and the persisted query synchronization.

pub mod config;
pub mod error;
pub mod filter;
pub mod query_sync;
pub mod selector;
pub mod session;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use filter::controller::{FacetFilterController, ResultStatus};
pub use filter::predicates::FilterableRecord;
pub use query_sync::{MemoryQuerySink, QuerySink, QuerySync};
pub use selector::{HighlightDirection, SearchableSelector};
pub use session::{FacetCatalogs, JobSearchSession};
