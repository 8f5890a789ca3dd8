//! Capability traits for sequence types.
//!
//! Rather than one deep tower of interfaces, each trait here names a single ability a sequence
//! may have. Concrete types implement the ones they support directly, and generic code asks for
//! exactly the abilities it needs:
//!
//! ```
//! # use linear_sequence::sequence::{AppendSequence, LinearSequence, Sequence};
//! fn drain_into<T, S: AppendSequence<T>>(target: &mut S, items: impl Iterator<Item = T>) {
//!     for item in items {
//!         target.append(item).expect("sequence growth");
//!     }
//! }
//!
//! let mut seq = LinearSequence::new();
//! drain_into(&mut seq, 0..3);
//! assert_eq!(seq.len(), 3);
//! ```

use crate::storage::error::{CapacityOverflow, IndexOutOfBounds, LinearStorageError};

/// Read access to an indexed sequence of items.
pub trait Sequence<T> {
    /// The number of items in the sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the item at the given index.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, len)`.
    fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;
}

/// In-place overwriting of existing items.
pub trait ReplaceSequence<T>: Sequence<T> {
    /// Overwrites the item at the given index, returning the previous item.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, len)`.
    fn replace(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds>;
}

/// Growth at either end of the sequence.
pub trait AppendSequence<T>: Sequence<T> {
    /// Adds an item after the last item.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the sequence cannot grow any further.
    fn append(&mut self, item: T) -> Result<(), CapacityOverflow>;

    /// Adds an item before the first item.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the sequence cannot grow any further.
    fn prepend(&mut self, item: T) -> Result<(), CapacityOverflow>;
}

/// Insertion at an arbitrary position.
pub trait InsertSequence<T>: Sequence<T> {
    /// Inserts an item at the given index, moving the items at and after it up by one.
    /// `index == len` appends.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index > len`, or with
    /// [`CapacityOverflow`](crate::storage::CapacityOverflow) if the sequence cannot grow any
    /// further.
    fn insert(&mut self, index: usize, item: T) -> Result<(), LinearStorageError>;
}

/// Removal of items by position.
pub trait RemoveSequence<T>: Sequence<T> {
    /// Removes and returns the item at the given index, moving later items down by one.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, len)`.
    fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Removes and returns the first item, if any.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the last item, if any.
    fn remove_last(&mut self) -> Option<T>;
}
