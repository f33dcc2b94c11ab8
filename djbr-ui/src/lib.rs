//! Shared Dioxus components and D3.js bridge for the remuneration pages.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions via `js_sys::eval()`
//! - `location`: the browser implementation of `djbr_search::Location`
//! - `state`: AppState with Dioxus Signals shared by every page
//! - `components`: reusable RSX components (selectors, legends, modal, table, ...)

pub mod components;
pub mod js_bridge;
pub mod location;
pub mod state;
