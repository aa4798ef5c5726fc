//! Browser location adapter for the persisted job query.

use common::persisted_query::PersistedQuery;
use dioxus::logger::tracing;
use engine::{MemoryQuerySink, QuerySink, query_sync::to_query_string};


/// Query string of the current page, parsed. Empty outside the browser.
pub fn read_location_query() -> PersistedQuery {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()
            .map(|window| window.location())
            .and_then(|location| location.search().ok())
            .unwrap_or_default();
        engine::query_sync::parse_query_string(&search)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        PersistedQuery::new()
    }
}

/// `path?query`, or just `path` when the query is empty.
pub fn href_with_query(path: &str, query: &PersistedQuery) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", to_query_string(query))
    }
}

/// Where a page session writes its query.
#[derive(Debug, Clone)]
pub enum PageQuerySink {
    /// Rewrites the address bar in place with `history.replaceState`.
    BrowserLocation { path: String },
    /// Keeps the query in memory, for pages that only turn it into a link.
    Detached(MemoryQuerySink),
}

impl PageQuerySink {
    pub fn browser(path: impl Into<String>) -> Self {
        Self::BrowserLocation { path: path.into() }
    }

    pub fn detached() -> Self {
        Self::Detached(MemoryQuerySink::new())
    }
}

impl QuerySink for PageQuerySink {
    fn replace(&mut self, query: &PersistedQuery) {
        match self {
            Self::BrowserLocation { path } => replace_browser_url(&href_with_query(path, query)),
            Self::Detached(sink) => sink.replace(query),
        }
    }
}

fn replace_browser_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window available to replace the URL with {url}");
            return;
        };
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)));
        if let Err(e) = replaced {
            tracing::error!("Failed to replace URL with {url}: {:#?}", e);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Not in a browser, URL stays unchanged: {url}");
}
