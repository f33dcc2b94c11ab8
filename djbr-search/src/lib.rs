//! Search page state: typed filters, their query-string codec, URL
//! synchronization through an injected location, and result handling.

pub mod codec;
pub mod filters;
pub mod location;
pub mod outcome;
pub mod pagination;

pub use filters::{Category, MonthSet, SearchFilters, MAX_SELECTED_AGENCIES};
pub use location::{InitialSearch, Location, MemoryLocation, QuerySync};
pub use outcome::{ResultRow, SearchOutcome, SearchResults, RESULT_COLUMNS};
pub use pagination::Pagination;
