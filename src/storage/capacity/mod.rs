//! The capacity strategies: policies that open free room in a [`LinearStorage`] for a requested
//! operation, preserving the relative order and logical indices of untouched items.
//!
//! # Method
//! Each strategy validates its request and computes the required capacity with checked
//! arithmetic *before* touching anything, so a failed `ensure_capacity` is always a clean no-op.
//! When the existing slack covers a request the strategies do nothing; otherwise they either
//! shift items within the buffer ([`SplitCapacityStrategy`]) or relocate the occupied window
//! into a fresh allocation via [`relocate`].
//!
//! The strategies are stateless unit types. Consumers construct (or simply name) the instance
//! they want and pass the storage in - there is no global dispatcher to configure.

mod head;
mod initial;
mod split;
mod tail;

pub use head::*;
pub use initial::*;
pub use split::*;
pub use tail::*;

mod tests;

use super::buffer::Buffer;
use super::error::CapacityOverflow;
use super::linear::LinearStorage;
use super::range::RangeMove;

/// Moves the occupied window into a fresh allocation of `new_capacity` slots, starting at
/// physical index `new_first`. Shared by the strategies whose growth has to reposition the
/// window.
///
/// The caller guarantees `new_first + size <= new_capacity`.
pub(crate) fn relocate<T>(
    storage: &mut LinearStorage<T>,
    new_capacity: usize,
    new_first: usize,
) -> Result<(), CapacityOverflow> {
    let mut buf = Buffer::with_capacity(new_capacity)?;
    let size = storage.bounds.size();

    if size > 0 {
        let first = storage.bounds.first_index();

        // SAFETY: The source range is exactly the occupied window, and the caller guarantees the
        // target range fits in the new allocation. Ownership of the items moves to the new
        // buffer; the old one only deallocates.
        unsafe {
            buf.transfer(&storage.buf, RangeMove::new(first, first + size - 1, new_first));
        }
    }

    storage.buf = buf;
    storage.bounds.set(new_first, size);
    Ok(())
}
