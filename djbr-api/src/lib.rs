//! Core records and HTTP client for the remuneration API.
//!
//! This crate provides:
//! - `config`: base URLs injected at build time or from the CLI
//! - `models`: checked domain records (agencies, summaries, search rows, index scores)
//! - `client`: the `RemunerationApi` trait and its reqwest implementation
//! - `links`: download, package and share URLs built client-side

pub mod client;
pub mod config;
pub mod error;
pub mod links;
pub mod models;
mod wire;

pub use client::{ApiClient, RemunerationApi};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
