//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the signals every page needs into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Page-specific data lives in the pages.

use djbr_api::models::Agency;
use djbr_api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Base URLs baked in at build time
    pub config: Signal<ApiConfig>,
    /// Whether the page is still loading its first data
    pub loading: Signal<bool>,
    /// Inline error message, if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Agencies known to the platform (search page pickers)
    pub agencies: Signal<Vec<Agency>>,
    /// Latest year with collected data
    pub current_year: Signal<i32>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Signal::new(ApiConfig::from_build_env()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            agencies: Signal::new(Vec::new()),
            current_year: Signal::new(djbr_utils::dates::current_year()),
        }
    }

    /// HTTP client for the configured endpoints.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.read().clone())
    }
}
