//! One search view: four facet selectors feeding a filter controller whose
//! state is mirrored into a persisted query.

use common::{
    facet::{Facet, FacetState},
    job_posting::JobPosting,
    persisted_query::PersistedQuery,
    select_option::OptionCatalog,
};

use crate::{
    config::EngineConfig,
    error::EngineResult,
    filter::{
        controller::{FacetFilterController, ResultStatus},
        predicates::FilterableRecord,
    },
    query_sync::{QuerySink, QuerySync},
    selector::{HighlightDirection, PendingSearch, SearchApplied, SearchCompletion, SearchFn, SearchableSelector},
};


/// Option catalogs for the locally resolved facets. The keyword facet has
/// no catalog; it is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCatalogs {
    pub location: OptionCatalog,
    pub job_type: OptionCatalog,
    pub industry: OptionCatalog,
}

impl FacetCatalogs {
    /// Catalogs derived from the postings themselves: cities, contract
    /// types and organization industries.
    pub fn from_postings<'a>(postings: impl IntoIterator<Item = &'a JobPosting> + Clone) -> Self {
        Self {
            location: OptionCatalog::distinct("Toutes les villes", postings.clone().into_iter().map(|p| p.city())),
            job_type: OptionCatalog::job_types("Tous les types de contrat"),
            industry: OptionCatalog::distinct(
                "Tous les secteurs",
                postings.into_iter().map(|p| p.company.industry.as_str()),
            ),
        }
    }
}


pub struct JobSearchSession<R, S> {
    config: EngineConfig,
    controller: FacetFilterController<R>,
    query_sync: QuerySync<S>,
    // indexed by `Facet::index`
    selectors: [SearchableSelector; 4],
}

impl<R: FilterableRecord, S: QuerySink> JobSearchSession<R, S> {
    /// Hydrates the facet state from `initial`. Nothing is written to the
    /// sink until the first change.
    pub fn new(
        records: Vec<R>,
        catalogs: FacetCatalogs,
        keyword_search: Option<SearchFn>,
        sink: S,
        initial: &PersistedQuery,
        config: EngineConfig,
    ) -> Self {
        let state = QuerySync::<S>::hydrate(initial);
        let canonical = QuerySync::<S>::serialize(&state);
        let keyword = match keyword_search {
            Some(search) => SearchableSelector::delegated(search),
            None => SearchableSelector::local(OptionCatalog::empty()),
        };
        tracing::debug!(?state, records = records.len(), "starting search session");
        Self {
            config,
            controller: FacetFilterController::with_state(records, state),
            query_sync: QuerySync::with_initial(sink, canonical),
            selectors: [
                keyword,
                SearchableSelector::local(catalogs.location),
                SearchableSelector::local(catalogs.job_type),
                SearchableSelector::local(catalogs.industry),
            ],
        }
    }

    pub fn selector(&self, facet: Facet) -> &SearchableSelector {
        &self.selectors[facet.index()]
    }

    fn selector_mut(&mut self, facet: Facet) -> &mut SearchableSelector {
        &mut self.selectors[facet.index()]
    }

    fn commit(&mut self, facet: Facet, value: String) {
        self.controller.set(facet, value);
        self.query_sync.sync(self.controller.state());
    }

    /// Programmatic facet change by persisted name.
    pub fn set_facet(&mut self, name: &str, value: impl Into<String>) -> EngineResult<()> {
        self.controller.set_facet(name, value)?;
        self.query_sync.sync(self.controller.state());
        Ok(())
    }

    pub fn open(&mut self, facet: Facet) {
        self.selector_mut(facet).open();
    }

    pub fn close(&mut self, facet: Facet) {
        self.selector_mut(facet).close();
    }

    pub fn toggle(&mut self, facet: Facet) {
        self.selector_mut(facet).toggle();
    }

    pub fn cancel(&mut self, facet: Facet) {
        self.selector_mut(facet).cancel();
    }

    pub fn focus_lost(&mut self, facet: Facet) {
        self.selector_mut(facet).focus_lost();
    }

    pub fn move_highlight(&mut self, facet: Facet, direction: HighlightDirection) {
        self.selector_mut(facet).move_highlight(direction);
    }

    /// The keyword facet follows its query text on every keystroke; the
    /// other facets only change when an option is selected.
    pub fn set_query_text(&mut self, facet: Facet, text: impl Into<String>) -> Option<PendingSearch> {
        let text = text.into();
        let pending = self.selector_mut(facet).set_query_text(text.clone());
        if facet == Facet::Keyword {
            self.commit(facet, text);
        }
        pending
    }

    pub fn complete_search(&mut self, facet: Facet, completion: SearchCompletion) -> SearchApplied {
        self.selector_mut(facet).complete_search(completion)
    }

    /// Applies the option at `index` of the facet's selector. Returns
    /// whether a value was emitted.
    pub fn select(&mut self, facet: Facet, index: usize) -> bool {
        match self.selector_mut(facet).select_by_index(index) {
            Some(value) => {
                self.commit(facet, value);
                true
            }
            None => false,
        }
    }

    pub fn select_highlighted(&mut self, facet: Facet) -> bool {
        match self.selector_mut(facet).select_current_highlight() {
            Some(value) => {
                self.commit(facet, value);
                true
            }
            None => false,
        }
    }

    pub fn facet_state(&self) -> &FacetState {
        self.controller.state()
    }

    pub fn filtered_records(&self) -> Vec<&R> {
        self.controller.filtered_records()
    }

    /// Preview of the configured size.
    pub fn preview(&self) -> Vec<&R> {
        self.controller.preview(self.config.preview_size)
    }

    pub fn match_count(&self) -> usize {
        self.controller.match_count()
    }

    pub fn status(&self) -> ResultStatus {
        self.controller.status()
    }

    pub fn persisted_query(&self) -> PersistedQuery {
        QuerySync::<S>::serialize(self.controller.state())
    }

    pub fn sink(&self) -> &S {
        self.query_sync.sink()
    }
}
