//! Address-bar access behind a trait, and the filter/URL synchronization built on it.
//!
//! Pages never touch `window.location` directly: the browser implementation
//! lives in the UI crate and is injected, and [`MemoryLocation`] stands in for
//! it in tests and in the CLI.

use std::cell::RefCell;
use std::rc::Rc;

use djbr_api::models::Agency;
use log::{info, warn};

use crate::codec::{has_search_params, requested_agencies};
use crate::filters::SearchFilters;

pub trait Location {
    /// Current query string including the leading `?`, or empty.
    fn query(&self) -> String;
    fn path(&self) -> String;
    /// Swap the query string without reloading or adding a history entry.
    fn replace_query(&self, query: &str);
    /// Navigate away to another site path.
    fn redirect(&self, path: &str);
}

#[derive(Debug, Default)]
struct MemoryState {
    path: String,
    query: String,
    replaced: Vec<String>,
    redirects: Vec<String>,
}

/// In-memory location that records every replacement and redirect.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryLocation {
    pub fn new(path: &str, query: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                path: path.to_string(),
                query: query.to_string(),
                ..MemoryState::default()
            })),
        }
    }

    /// Every query written through `replace_query`, oldest first.
    pub fn replaced(&self) -> Vec<String> {
        self.state.borrow().replaced.clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.state.borrow().redirects.clone()
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    fn path(&self) -> String {
        self.state.borrow().path.clone()
    }

    fn replace_query(&self, query: &str) {
        let mut state = self.state.borrow_mut();
        state.query = query.to_string();
        state.replaced.push(query.to_string());
    }

    fn redirect(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        state.path = path.to_string();
        state.redirects.push(path.to_string());
    }
}

/// Filters read from the address bar on load.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialSearch {
    pub filters: SearchFilters,
    /// A search runs on load only when the URL carried parameters.
    pub auto_search: bool,
    /// Query the first search sends. Normally `filters.to_query()`; the
    /// address bar query as written when some of its agencies could not be
    /// resolved, so a shared link never widens to every agency.
    pub query: String,
}

/// Keeps the address bar equal to the filter state.
///
/// Nothing is written until [`QuerySync::load`] has run; after that every
/// [`QuerySync::publish`] of a state that differs from the last one written
/// (or loaded) replaces the query string. Publishing the loaded state again
/// is a no-op, so the first render never rewrites a shared link.
pub struct QuerySync<L: Location> {
    location: L,
    published: Option<SearchFilters>,
}

impl<L: Location> QuerySync<L> {
    pub fn new(location: L) -> Self {
        Self {
            location,
            published: None,
        }
    }

    /// Parse the current URL against the known agencies.
    pub fn load(&mut self, known: &[Agency], current_year: i32) -> InitialSearch {
        let query = self.location.query();
        let filters = SearchFilters::from_query(&query, known, current_year);
        let auto_search = has_search_params(&query);
        info!("Loaded search filters from URL (auto search: {})", auto_search);
        let unresolved: Vec<String> = requested_agencies(&query)
            .into_iter()
            .filter(|id| !filters.is_agency_selected(id))
            .collect();
        let query = if unresolved.is_empty() {
            filters.to_query()
        } else {
            warn!("Agencies {:?} not in the agency list, searching the URL as given", unresolved);
            query
        };
        self.published = Some(filters.clone());
        InitialSearch {
            filters,
            auto_search,
            query,
        }
    }

    /// Mirror `filters` into the URL. Returns whether the URL was replaced.
    pub fn publish(&mut self, filters: &SearchFilters) -> bool {
        match &self.published {
            None => false,
            Some(last) if last == filters => false,
            Some(_) => {
                self.location.replace_query(&filters.to_location_query());
                self.published = Some(filters.clone());
                true
            }
        }
    }
}
