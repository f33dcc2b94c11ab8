//! Request generations.
//!
//! Every fetch a page starts takes a [`Generation`] from its
//! [`RequestGenerations`]. Starting a newer fetch makes every older token
//! stale, and a response is only applied while its token is still current,
//! so a slow response for an abandoned year never overwrites a newer one.

use std::cell::Cell;
use std::rc::Rc;

/// Token identifying one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Shared counter; clones observe the same sequence.
#[derive(Debug, Clone, Default)]
pub struct RequestGenerations {
    latest: Rc<Cell<u64>>,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding all earlier ones.
    pub fn begin(&self) -> Generation {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Generation(next)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.get() == generation.0
    }
}
