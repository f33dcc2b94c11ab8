//! Address bar of the running browser tab.

use djbr_search::Location;
use log::{info, warn};
use wasm_bindgen::JsValue;

/// [`Location`] backed by `window.location` and `window.history`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserLocation;

fn window_location() -> Option<web_sys::Location> {
    web_sys::window().map(|w| w.location())
}

impl Location for BrowserLocation {
    fn query(&self) -> String {
        window_location()
            .and_then(|l| l.search().ok())
            .unwrap_or_default()
    }

    fn path(&self) -> String {
        window_location()
            .and_then(|l| l.pathname().ok())
            .unwrap_or_default()
    }

    fn replace_query(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let url = format!("{}{}", self.path(), query);
        let result = window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            warn!("history.replaceState failed: {:?}", e);
        }
    }

    fn redirect(&self, path: &str) {
        info!("Redirecting to {}", path);
        if let Some(location) = window_location() {
            if let Err(e) = location.set_href(path) {
                warn!("Redirect to {} failed: {:?}", path, e);
            }
        }
    }
}
