use super::relocate;
use crate::storage::error::CapacityOverflow;
use crate::storage::linear::LinearStorage;

/// Ensures free slots before the occupied window.
///
/// When the head slack already covers the request this is a no-op. Otherwise the window is
/// relocated into a fresh allocation sized `size + extra + tail_slack`, with the window placed
/// so that exactly `extra` slots sit before it. Keeping the existing tail slack in the new
/// allocation means a head-heavy growth pattern doesn't throw away room the tail had already
/// earned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeadCapacityStrategy;

impl HeadCapacityStrategy {
    /// Ensures at least `extra` free slots before the occupied window. Existing items keep
    /// their logical indices and relative order.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the resulting capacity cannot be represented, in which
    /// case nothing is changed.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// # use linear_sequence::storage::capacity::HeadCapacityStrategy;
    /// let mut storage = LinearStorage::new();
    /// storage.push_tail(1).unwrap();
    /// HeadCapacityStrategy.ensure_capacity(&mut storage, 4).unwrap();
    /// assert!(storage.head_slack() >= 4);
    /// assert_eq!(storage.get(0), Ok(&1));
    /// ```
    pub fn ensure_capacity<T>(
        &self,
        storage: &mut LinearStorage<T>,
        extra: usize,
    ) -> Result<(), CapacityOverflow> {
        if extra <= storage.head_slack() {
            return Ok(());
        }

        let new_capacity = storage
            .size()
            .checked_add(extra)
            .and_then(|capacity| capacity.checked_add(storage.tail_slack()))
            .ok_or(CapacityOverflow)?;

        relocate(storage, new_capacity, extra)
    }
}
