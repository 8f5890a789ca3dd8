use crate::storage::error::CapacityOverflow;
use crate::storage::linear::LinearStorage;

/// Establishes a minimum capacity before first use.
///
/// Only unallocated storage is affected: if the physical capacity is still 0 and a positive
/// minimum is requested, exactly that minimum is allocated. Storage that has already been sized,
/// by this strategy or by any growth, is left alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InitialCapacityStrategy;

impl InitialCapacityStrategy {
    /// Ensures the storage starts life with at least `min_capacity` slots.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if `min_capacity` exceeds the maximum allocation size, in
    /// which case nothing is changed.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// # use linear_sequence::storage::capacity::InitialCapacityStrategy;
    /// let mut storage: LinearStorage<u8> = LinearStorage::new();
    /// InitialCapacityStrategy.ensure_capacity(&mut storage, 8).unwrap();
    /// assert_eq!(storage.capacity(), 8);
    ///
    /// // Already-sized storage is left alone.
    /// InitialCapacityStrategy.ensure_capacity(&mut storage, 100).unwrap();
    /// assert_eq!(storage.capacity(), 8);
    /// ```
    pub fn ensure_capacity<T>(
        &self,
        storage: &mut LinearStorage<T>,
        min_capacity: usize,
    ) -> Result<(), CapacityOverflow> {
        if storage.capacity() != 0 || min_capacity == 0 {
            return Ok(());
        }

        storage.buf.grow(min_capacity)
    }
}
