//! End-to-end behaviour of a search session: hydration, selector driven
//! facet changes, keyword search and persisted query writes.

mod helpers;

use common::{facet::Facet, persisted_query::PersistedQuery, select_option::SelectOption};
use engine::{
    EngineConfig, EngineError, FacetCatalogs, HighlightDirection, JobSearchSession, MemoryQuerySink, ResultStatus,
    query_sync::parse_query_string,
    selector::SearchApplied,
};
use helpers::{ids, postings, scripted_search, session, session_from};

// ---------------------------------------------------------------------------
// Hydration
// ---------------------------------------------------------------------------

#[test]
fn initial_query_hydrates_without_writing_back() {
    let initial = parse_query_string("?location=Paris&jobType=FULL_TIME&page=2");
    let session = session_from(&initial, None);

    assert_eq!(session.facet_state().location, "Paris");
    assert_eq!(session.facet_state().job_type, "FULL_TIME");
    assert_eq!(ids(&session.filtered_records()), vec!["1", "5"]);
    assert_eq!(session.sink().replacements(), 0);
}

#[test]
fn fresh_session_lists_everything() {
    let session = session();
    assert_eq!(session.status(), ResultStatus::NoFiltersApplied(8));
    assert!(session.persisted_query().is_empty());
}

// ---------------------------------------------------------------------------
// Selector driven facets
// ---------------------------------------------------------------------------

#[test]
fn keyboard_selection_sets_facet_and_replaces_query() {
    let mut session = session();
    session.open(Facet::Location);
    assert!(session.set_query_text(Facet::Location, "lyo").is_none());
    let labels: Vec<&str> = session
        .selector(Facet::Location)
        .resolved_options()
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Lyon"]);
    // typing in a catalog facet does not filter yet
    assert_eq!(session.match_count(), 8);

    session.move_highlight(Facet::Location, HighlightDirection::Down);
    assert!(session.select_highlighted(Facet::Location));

    assert!(!session.selector(Facet::Location).is_open());
    assert_eq!(ids(&session.filtered_records()), vec!["2", "6"]);
    assert_eq!(session.sink().current().get("location"), Some("Lyon"));
    assert_eq!(session.sink().replacements(), 1);
}

#[test]
fn choosing_the_sentinel_clears_the_facet() {
    let mut session = session();
    session.open(Facet::Industry);
    session.set_query_text(Facet::Industry, "sant");
    assert!(session.select(Facet::Industry, 0));
    assert_eq!(ids(&session.filtered_records()), vec!["4", "8"]);

    session.open(Facet::Industry);
    assert!(session.select(Facet::Industry, 0));
    assert_eq!(session.facet_state().industry, "");
    assert_eq!(session.match_count(), 8);
    assert!(session.sink().current().is_empty());
}

#[test]
fn out_of_range_selection_changes_nothing() {
    let mut session = session();
    session.open(Facet::JobType);
    assert!(!session.select(Facet::JobType, 99));
    assert!(!session.select_highlighted(Facet::JobType));
    assert!(session.selector(Facet::JobType).is_open());
    assert_eq!(session.sink().replacements(), 0);
}

#[test]
fn cancel_and_focus_loss_close_the_selector() {
    let mut session = session();
    session.toggle(Facet::JobType);
    assert!(session.selector(Facet::JobType).is_open());
    session.cancel(Facet::JobType);
    assert!(!session.selector(Facet::JobType).is_open());

    session.open(Facet::Location);
    session.focus_lost(Facet::Location);
    assert!(!session.selector(Facet::Location).is_open());
}

#[test]
fn combined_facets_are_conjunctive() {
    let mut session = session();
    session.set_facet("industry", "technologie").unwrap();
    let industry_only = ids(&session.filtered_records());
    session.set_facet("jobType", "FULL_TIME").unwrap();
    let both = ids(&session.filtered_records());

    assert_eq!(both, vec!["1", "7"]);
    assert!(both.iter().all(|id| industry_only.contains(id)));
    assert_eq!(session.status(), ResultStatus::Matches(2));
}

#[test]
fn invalid_facet_name_is_surfaced_and_nothing_is_written() {
    let mut session = session();
    let err = session.set_facet("salary", "50000").unwrap_err();
    assert_eq!(err, EngineError::InvalidFacetName("salary".to_string()));
    assert_eq!(session.sink().replacements(), 0);
}

// ---------------------------------------------------------------------------
// Keyword facet
// ---------------------------------------------------------------------------

#[test]
fn keyword_follows_typing_without_search_function() {
    let mut session = session();
    session.open(Facet::Keyword);
    for (i, text) in ["d", "da", "dat", "data"].into_iter().enumerate() {
        assert!(session.set_query_text(Facet::Keyword, text).is_none());
        assert_eq!(session.sink().replacements(), i + 1);
    }
    assert_eq!(ids(&session.filtered_records()), vec!["2", "5"]);
    assert_eq!(session.sink().current().get("keyword"), Some("data"));
    assert!(session.selector(Facet::Keyword).resolved_options().is_empty());
}

#[test]
fn whitespace_keyword_does_not_filter() {
    let mut session = session();
    session.set_query_text(Facet::Keyword, "   ");
    assert_eq!(session.match_count(), 8);
    assert_eq!(session.status(), ResultStatus::NoFiltersApplied(8));
}

#[tokio::test(flavor = "current_thread")]
async fn keyword_suggestions_apply_only_the_latest_request() {
    let (search, mut replies, seen) = scripted_search(2);
    let mut session = session_from(&PersistedQuery::new(), Some(search));
    let reply_b = replies.pop().unwrap();
    let reply_a = replies.pop().unwrap();

    session.open(Facet::Keyword);
    let a = session.set_query_text(Facet::Keyword, "dev").expect("delegated");
    let b = session.set_query_text(Facet::Keyword, "rust").expect("delegated");
    assert!(session.selector(Facet::Keyword).is_searching());
    assert_eq!(*seen.borrow(), vec!["dev".to_string(), "rust".to_string()]);
    // the filter follows the text immediately, suggestions come later
    assert_eq!(ids(&session.filtered_records()), vec!["7"]);

    reply_b.send(Ok(vec![SelectOption::plain("Développeur Rust")])).unwrap();
    assert_eq!(session.complete_search(Facet::Keyword, b.resolve().await), SearchApplied::Applied);
    reply_a.send(Ok(vec![SelectOption::plain("Frontend Developer")])).unwrap();
    assert_eq!(session.complete_search(Facet::Keyword, a.resolve().await), SearchApplied::Stale);

    let selector = session.selector(Facet::Keyword);
    assert_eq!(selector.resolved_options(), &[SelectOption::plain("Développeur Rust")]);
    assert!(!selector.is_searching());

    assert!(session.select(Facet::Keyword, 0));
    assert_eq!(session.facet_state().keyword, "Développeur Rust");
    assert_eq!(ids(&session.filtered_records()), vec!["7"]);
}

#[tokio::test(flavor = "current_thread")]
async fn failed_keyword_search_keeps_the_filter() {
    let (search, mut replies, _seen) = scripted_search(1);
    let mut session = session_from(&PersistedQuery::new(), Some(search));

    let pending = session.set_query_text(Facet::Keyword, "data").expect("delegated");
    replies.remove(0).send(Err(anyhow::anyhow!("suggestion service down"))).unwrap();
    assert_eq!(session.complete_search(Facet::Keyword, pending.resolve().await), SearchApplied::Failed);

    assert!(session.selector(Facet::Keyword).resolved_options().is_empty());
    assert_eq!(ids(&session.filtered_records()), vec!["2", "5"]);
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[test]
fn preview_uses_configured_size() {
    let records = postings();
    let catalogs = FacetCatalogs::from_postings(&records);
    let config = EngineConfig { preview_size: 3 };
    let mut session = JobSearchSession::new(
        records,
        catalogs,
        None,
        MemoryQuerySink::new(),
        &PersistedQuery::new(),
        config,
    );
    assert_eq!(ids(&session.preview()), vec!["1", "2", "3"]);

    session.set_facet("location", "France").unwrap();
    let full = ids(&session.filtered_records());
    assert_eq!(ids(&session.preview()), full[..3].to_vec());

    session.set_facet("keyword", "rust").unwrap();
    assert_eq!(ids(&session.preview()), vec!["7"]);
}

#[test]
fn default_preview_is_six_postings() {
    let session = session();
    assert_eq!(session.preview().len(), 6);
    assert_eq!(session.filtered_records().len(), 8);
}
