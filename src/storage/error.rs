//! Error types shared by the storage core and the sequence layer.
//!
//! Every error here represents a caller contract violation. None of them are recovered from
//! internally: they are returned at the point of detection, before any state has been touched, so
//! a failed operation never leaves a partial mutation behind.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A logical index (a read, a write or a split point) fell outside the occupied window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending logical index.
    pub index: usize,
    /// The number of occupied slots at the time of the access.
    pub size: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for storage with {} items!", self.index, self.size)
    }
}

impl Error for IndexOutOfBounds {}

/// A requested capacity cannot be represented or allocated.
///
/// Capacities are computed with checked arithmetic and validated against the maximum allocation
/// size ([`isize::MAX`] bytes) before anything is moved or allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Requested capacity overflows the maximum allocation size!")
    }
}

impl Error for CapacityOverflow {}

/// The combined failure modes of a storage operation which validates both an index and a
/// capacity, such as split growth.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum LinearStorageError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
