//! Page loaders, generic over [`RemunerationApi`](djbr_api::RemunerationApi).
//!
//! Each loader issues the calls a page makes on mount or on a parameter
//! change, and folds failures into the degraded state the page shows.

pub mod agency;
pub mod home;
pub mod search;

#[cfg(test)]
pub(crate) mod fake;
