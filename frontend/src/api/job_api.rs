//! Job postings and keyword suggestions.

use std::rc::Rc;

use common::{job_posting::JobPosting, select_option::SelectOption};
use dioxus::logger::tracing;
use engine::selector::SearchFn;
use futures_util::FutureExt;

const JOB_POSTINGS_JSON: &str = include_str!("../../assets/jobs.json");

/// Most suggestions returned for one keyword.
const MAX_SUGGESTIONS: usize = 8;

pub fn load_job_postings() -> Vec<JobPosting> {
    match serde_json::from_str(JOB_POSTINGS_JSON) {
        Ok(postings) => postings,
        Err(e) => {
            tracing::error!("Failed to parse bundled job postings: {e}");
            Vec::new()
        }
    }
}

/// Distinct posting titles containing `keyword`, in posting order.
pub async fn suggest_titles(postings: Rc<Vec<JobPosting>>, keyword: String) -> anyhow::Result<Vec<SelectOption>> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Ok(Vec::new());
    }
    let mut suggestions: Vec<SelectOption> = Vec::new();
    for posting in postings.iter() {
        if !posting.title.to_lowercase().contains(&keyword) {
            continue;
        }
        if suggestions.iter().any(|s| s.value == posting.title) {
            continue;
        }
        suggestions.push(SelectOption::plain(posting.title.clone()));
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    Ok(suggestions)
}

/// Keyword search function handed to the engine.
pub fn title_suggestions(postings: Rc<Vec<JobPosting>>) -> SearchFn {
    Rc::new(move |keyword: String| suggest_titles(postings.clone(), keyword).boxed_local())
}
