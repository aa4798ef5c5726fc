//! Conversion between the facet state and its persisted form, plus the
//! replace-only write policy toward the outside world.

use common::{
    facet::{Facet, FacetState},
    persisted_query::PersistedQuery,
};


/// Destination of persisted queries. Implementations overwrite the current
/// representation in place; they never append a history entry.
pub trait QuerySink {
    fn replace(&mut self, query: &PersistedQuery);
}

/// Keeps the last written query; used by tests and by views that only need
/// the representation to build a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryQuerySink {
    current: PersistedQuery,
    replacements: usize,
}

impl MemoryQuerySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &PersistedQuery {
        &self.current
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl QuerySink for MemoryQuerySink {
    fn replace(&mut self, query: &PersistedQuery) {
        self.current = query.clone();
        self.replacements += 1;
    }
}


#[derive(Debug)]
pub struct QuerySync<S> {
    sink: S,
    last_written: Option<PersistedQuery>,
}

impl<S: QuerySink> QuerySync<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, last_written: None }
    }

    /// Like [`Self::new`], for a sink that already shows `initial`; a later
    /// sync producing the same query is not written again.
    pub fn with_initial(sink: S, initial: PersistedQuery) -> Self {
        Self { sink, last_written: Some(initial) }
    }

    /// Every known facet read from `query`; anything else is ignored.
    pub fn hydrate(query: &PersistedQuery) -> FacetState {
        let mut state = FacetState::default();
        for facet in Facet::ALL {
            if let Some(value) = query.get(facet.as_str()) {
                if !value.is_empty() {
                    state.set(facet, value);
                }
            }
        }
        state
    }

    /// Same as [`Self::hydrate`] for a JSON object; non-string values are skipped.
    pub fn hydrate_json(value: &serde_json::Value) -> FacetState {
        let Some(object) = value.as_object() else {
            return FacetState::default();
        };
        let query: PersistedQuery = object
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.as_str(), s)))
            .collect();
        Self::hydrate(&query)
    }

    /// Non-empty facets only.
    pub fn serialize(state: &FacetState) -> PersistedQuery {
        state
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(facet, value)| (facet.as_str(), value))
            .collect()
    }

    /// Writes `state` to the sink unless the same query was the last one
    /// written. Returns whether the sink was touched.
    pub fn sync(&mut self, state: &FacetState) -> bool {
        let query = Self::serialize(state);
        if self.last_written.as_ref() == Some(&query) {
            return false;
        }
        tracing::debug!(query = %to_query_string(&query), "replacing persisted query");
        self.sink.replace(&query);
        self.last_written = Some(query);
        true
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}


/// URL query-string encoding, without the leading `?`.
pub fn to_query_string(query: &PersistedQuery) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses `a=1&b=2` (optionally prefixed by `?`). Pairs that fail to decode
/// are skipped, `+` reads as a space and a repeated key keeps its last value.
pub fn parse_query_string(raw: &str) -> PersistedQuery {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut query = PersistedQuery::new();
    for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) else {
            tracing::debug!(pair, "skipping undecodable query pair");
            continue;
        };
        query.insert(key, value);
    }
    query
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " ")).ok().map(|s| s.into_owned())
}
