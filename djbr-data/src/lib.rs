//! Chart adapters and page loaders for the remuneration pages.
//!
//! This crate provides:
//! - `remuneration`: monthly and annual bar-chart series with gap filling
//! - `index`: transparency-index plot points
//! - `summary`: home page headline figures
//! - `generation`: request generations used to drop stale responses
//! - `loaders`: what each page fetches and how failures degrade

pub mod generation;
pub mod index;
pub mod loaders;
pub mod remuneration;
pub mod summary;

pub use generation::{Generation, RequestGenerations};
