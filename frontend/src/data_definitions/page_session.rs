//! Search session shared by the pages.

use std::rc::Rc;

use common::{job_posting::JobPosting, persisted_query::PersistedQuery};
use dioxus::logger::tracing;
use engine::{EngineConfig, FacetCatalogs, JobSearchSession};

use crate::api::job_api::{load_job_postings, title_suggestions};
use crate::data_definitions::browser_query::PageQuerySink;

pub type PageSession = JobSearchSession<JobPosting, PageQuerySink>;

pub fn new_page_session(sink: PageQuerySink, initial: &PersistedQuery) -> PageSession {
    let postings = load_job_postings();
    let catalogs = FacetCatalogs::from_postings(&postings);
    let keyword_search = title_suggestions(Rc::new(postings.clone()));
    let config = EngineConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("Falling back to default search config: {e}");
        EngineConfig::default()
    });
    JobSearchSession::new(postings, catalogs, Some(keyword_search), sink, initial, config)
}
