//! Search page: agency list, submission and result state.

use djbr_api::models::{Agency, SearchResponse};
use djbr_api::{RemunerationApi, Result};
use djbr_search::{InitialSearch, Pagination, ResultRow, SearchFilters, SearchResults};
use log::{info, warn};

use crate::generation::{Generation, RequestGenerations};

/// Agencies the pickers offer; empty when the listing fails.
pub async fn load_search_agencies<A: RemunerationApi>(api: &A) -> Vec<Agency> {
    match api.agencies().await {
        Ok(agencies) => agencies,
        Err(e) => {
            warn!("Failed to load agencies: {}", e);
            Vec::new()
        }
    }
}

/// A submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub generation: Generation,
}

/// Results of the latest submission and the table page shown.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    results: Option<SearchResults>,
    loading: bool,
    pagination: Pagination,
    generations: RequestGenerations,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Start a search for `filters`, superseding any in flight.
    pub fn submit(&mut self, filters: &SearchFilters) -> SearchRequest {
        self.submit_query(&filters.to_query())
    }

    pub fn submit_query(&mut self, query: &str) -> SearchRequest {
        self.loading = true;
        SearchRequest {
            query: query.to_string(),
            generation: self.generations.begin(),
        }
    }

    /// Store a finished search. Failures show as an empty result with the
    /// download disabled.
    pub fn apply(&mut self, request: &SearchRequest, result: Result<SearchResponse>) -> bool {
        if !self.generations.is_current(request.generation) {
            info!("Discarding stale search {}", request.query);
            return false;
        }
        let results = match result {
            Ok(response) => SearchResults::from_response(&request.query, response),
            Err(e) => {
                warn!("Search {} failed: {}", request.query, e);
                SearchResults::empty(&request.query)
            }
        };
        info!("Search {} returned {} rows", request.query, results.rows.len());
        self.results = Some(results);
        self.pagination = Pagination::default();
        self.loading = false;
        true
    }

    /// Hide results and drop any search still in flight.
    pub fn clear(&mut self) {
        self.generations.begin();
        self.results = None;
        self.loading = false;
        self.pagination = Pagination::default();
    }

    pub fn page_rows(&self) -> &[ResultRow] {
        match &self.results {
            Some(results) => self.pagination.slice(&results.rows),
            None => &[],
        }
    }

    fn row_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.rows.len())
    }

    pub fn next_page(&mut self) {
        self.pagination = self.pagination.next(self.row_count());
    }

    pub fn previous_page(&mut self) {
        self.pagination = self.pagination.previous();
    }

    /// Submit and wait for `filters` in one step.
    pub async fn run<A: RemunerationApi>(&mut self, api: &A, filters: &SearchFilters) {
        let request = self.submit(filters);
        let result = fetch_search(api, &request).await;
        self.apply(&request, result);
    }

    /// The search a page runs on load, if its URL asked for one.
    pub async fn run_initial<A: RemunerationApi>(&mut self, api: &A, initial: &InitialSearch) {
        if !initial.auto_search {
            return;
        }
        let request = self.submit_query(&initial.query);
        let result = fetch_search(api, &request).await;
        self.apply(&request, result);
    }
}

pub async fn fetch_search<A: RemunerationApi>(api: &A, request: &SearchRequest) -> Result<SearchResponse> {
    api.search(&request.query).await
}
