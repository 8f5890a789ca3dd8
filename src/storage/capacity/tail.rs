use crate::storage::error::CapacityOverflow;
use crate::storage::linear::LinearStorage;

/// Ensures free slots after the occupied window.
///
/// The mirror image of [`HeadCapacityStrategy`](super::HeadCapacityStrategy), with one
/// difference in mechanism: because the window keeps its physical position, the allocation can
/// be extended in place rather than relocated, so existing items are never copied when the
/// allocator can grow the block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TailCapacityStrategy;

impl TailCapacityStrategy {
    /// Ensures at least `extra` free slots after the occupied window. Existing items keep their
    /// logical indices, relative order and physical positions.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the resulting capacity cannot be represented, in which
    /// case nothing is changed.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// # use linear_sequence::storage::capacity::TailCapacityStrategy;
    /// let mut storage = LinearStorage::new();
    /// storage.push_tail(1).unwrap();
    /// TailCapacityStrategy.ensure_capacity(&mut storage, 4).unwrap();
    /// assert!(storage.tail_slack() >= 4);
    /// assert_eq!(storage.get(0), Ok(&1));
    /// ```
    pub fn ensure_capacity<T>(
        &self,
        storage: &mut LinearStorage<T>,
        extra: usize,
    ) -> Result<(), CapacityOverflow> {
        if extra <= storage.tail_slack() {
            return Ok(());
        }

        let new_capacity = storage
            .head_slack()
            .checked_add(storage.size())
            .and_then(|capacity| capacity.checked_add(extra))
            .ok_or(CapacityOverflow)?;

        storage.buf.grow(new_capacity)
    }
}
