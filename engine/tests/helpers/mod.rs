//! Shared fixtures for the session integration tests.

#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use common::{job_posting::JobPosting, persisted_query::PersistedQuery, select_option::SelectOption};
use engine::{
    EngineConfig, FacetCatalogs, JobSearchSession, MemoryQuerySink,
    selector::SearchFn,
};
use futures::{FutureExt, channel::oneshot};

pub type TestSession = JobSearchSession<JobPosting, MemoryQuerySink>;
pub type SearchReply = oneshot::Sender<anyhow::Result<Vec<SelectOption>>>;

pub fn postings() -> Vec<JobPosting> {
    let raw = include_str!("../fixtures/jobs.json");
    serde_json::from_str(raw).expect("fixture postings parse")
}

pub fn ids(records: &[&JobPosting]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

pub fn session_from(initial: &PersistedQuery, keyword_search: Option<SearchFn>) -> TestSession {
    let records = postings();
    let catalogs = FacetCatalogs::from_postings(&records);
    JobSearchSession::new(records, catalogs, keyword_search, MemoryQuerySink::new(), initial, EngineConfig::default())
}

pub fn session() -> TestSession {
    session_from(&PersistedQuery::new(), None)
}

/// Keyword search whose requests resolve, in issue order, when the
/// returned senders fire. The queries received are recorded.
pub fn scripted_search(count: usize) -> (SearchFn, Vec<SearchReply>, Rc<RefCell<Vec<String>>>) {
    let mut senders = Vec::new();
    let mut receivers = VecDeque::new();
    for _ in 0..count {
        let (tx, rx) = oneshot::channel();
        senders.push(tx);
        receivers.push_back(rx);
    }
    let receivers = Rc::new(RefCell::new(receivers));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_by_search = Rc::clone(&seen);
    let search: SearchFn = Rc::new(move |query: String| {
        seen_by_search.borrow_mut().push(query);
        let rx = receivers.borrow_mut().pop_front().expect("unexpected search request");
        async move { rx.await.unwrap_or_else(|_| Err(anyhow::anyhow!("search dropped"))) }.boxed_local()
    });
    (search, senders, seen)
}
