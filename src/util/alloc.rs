//! Helper types for testing allocation and drop behaviour.

use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized item type, for verifying that storage never allocates for ZSTs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSized;

/// An item that counts how many times it has been dropped, shared through an [`Rc`] so tests can
/// observe the tally after the container is gone.
#[derive(Debug, Clone)]
pub struct DropTally(Rc<Cell<usize>>);

impl DropTally {
    pub fn new() -> DropTally {
        DropTally(Rc::new(Cell::new(0)))
    }

    /// The number of drops recorded so far, across all clones of this tally.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Default for DropTally {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
