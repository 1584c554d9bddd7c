//! Append-only position history.
//!
//! The controller appends every position the engine returns and hands the
//! whole sequence back to the engine for repetition and draw detection.
//! History only grows within an episode; a fresh history replaces it at reset.
//!
//! Backed by `im::Vector` so a step can extend a cheap clone and commit it
//! only once every engine call succeeded.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordered sequence of past positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<P: Clone> {
    entries: Vector<P>,
}

impl<P: Clone> Default for History<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> History<P> {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vector::new(),
        }
    }

    /// Append a position.
    pub fn push(&mut self, position: P) {
        self.entries.push_back(position);
    }

    /// Number of recorded positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent position.
    #[must_use]
    pub fn last(&self) -> Option<&P> {
        self.entries.back()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.entries.iter()
    }

    /// Count how often a position occurs.
    #[must_use]
    pub fn occurrences(&self, position: &P) -> usize
    where
        P: PartialEq,
    {
        self.entries.iter().filter(|p| *p == position).count()
    }
}
