use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::slice;

use crate::storage::bounds::ContentBounds;
use crate::storage::buffer::Buffer;
use crate::storage::capacity::{
    HeadCapacityStrategy, InitialCapacityStrategy, SplitCapacityStrategy, TailCapacityStrategy,
};
use crate::storage::error::{CapacityOverflow, IndexOutOfBounds, LinearStorageError};
use crate::storage::range::RangeMove;

/// A growable, index-addressable backing store for items.
///
/// The occupied items form a contiguous window of `size` slots starting at a first physical
/// index somewhere inside the allocation, so a logical index `i` always lives in physical slot
/// `first + i`. Free slots before the window (head slack) and after it (tail slack) absorb growth
/// at either end without moving existing items.
///
/// Reads and writes take logical indices and fail with [`IndexOutOfBounds`] outside `[0, size)`.
/// Capacity is only ever extended - explicitly via the `ensure_*` operations or implicitly by
/// `push_*` - and never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the storage.
/// - `i`: The logical index in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `push_head` | `O(1)`*, `O(n)` |
/// | `push_tail` | `O(1)`*, `O(n)` |
/// | `pop_head` | `O(1)` |
/// | `pop_tail` | `O(1)` |
/// | `remove` | `O(min(i, n-i))` |
/// | `ensure_head_capacity` | `O(n)`**, `O(1)` |
/// | `ensure_tail_capacity` | `O(n)`**, `O(1)` |
/// | `ensure_split_capacity` | `O(min(i, n-i))`**, `O(n)` |
///
/// \* If the relevant end has no slack left, a push reallocates and takes `O(n)`.
///
/// \** If the requested room is already covered by slack, these are `O(1)` no-ops.
pub struct LinearStorage<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) bounds: ContentBounds,
}

impl<T> LinearStorage<T> {
    /// Creates storage with capacity 0. Memory is allocated once capacity is requested.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// let storage: LinearStorage<u8> = LinearStorage::new();
    /// assert_eq!(storage.capacity(), 0);
    /// assert_eq!(storage.size(), 0);
    /// ```
    pub const fn new() -> LinearStorage<T> {
        LinearStorage {
            buf: Buffer::new(),
            bounds: ContentBounds::new(),
        }
    }

    /// Creates storage pre-allocated with the given capacity hint.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the hint exceeds the maximum allocation size.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// let storage: LinearStorage<u8> = LinearStorage::with_capacity(8).unwrap();
    /// assert_eq!(storage.capacity(), 8);
    /// assert!(storage.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<LinearStorage<T>, CapacityOverflow> {
        let mut storage = Self::new();
        storage.initialize(capacity)?;
        Ok(storage)
    }

    /// The number of physical slots, occupied or not.
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The number of occupied slots.
    pub const fn size(&self) -> usize {
        self.bounds.size()
    }

    /// Returns true if no slot is occupied.
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// The window bounds: the physical position and extent of the occupied slots.
    pub const fn bounds(&self) -> &ContentBounds {
        &self.bounds
    }

    /// The number of free slots before the occupied window.
    pub const fn head_slack(&self) -> usize {
        self.bounds.first_index()
    }

    /// The number of free slots after the occupied window.
    pub const fn tail_slack(&self) -> usize {
        self.capacity() - self.bounds.first_index() - self.size()
    }

    /// Borrows the item at the given logical index.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, size)`.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// let mut storage = LinearStorage::new();
    /// storage.push_tail('a').unwrap();
    /// assert_eq!(storage.get(0), Ok(&'a'));
    /// assert!(storage.get(1).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index is within the occupied window, whose slots are always initialized.
        Ok(unsafe { self.buf.get_ref(self.bounds.first_index() + index) })
    }

    /// Mutably borrows the item at the given logical index.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, size)`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index is within the occupied window, whose slots are always initialized.
        Ok(unsafe { self.buf.get_mut(self.bounds.first_index() + index) })
    }

    /// Overwrites the item at the given logical index in place, returning the previous item.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, size)`.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// let mut storage = LinearStorage::new();
    /// storage.push_tail(1).unwrap();
    /// assert_eq!(storage.set(0, 2), Ok(1));
    /// assert_eq!(storage.get(0), Ok(&2));
    /// ```
    pub fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.get_mut(index)?, item))
    }

    /// Establishes a minimum capacity before first use. A no-op unless the current capacity is 0
    /// and `min_capacity` is positive.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if `min_capacity` exceeds the maximum allocation size.
    pub fn initialize(&mut self, min_capacity: usize) -> Result<(), CapacityOverflow> {
        InitialCapacityStrategy.ensure_capacity(self, min_capacity)
    }

    /// Guarantees at least `extra` free slots before the occupied window, reallocating if the
    /// head slack doesn't already cover them. Existing items keep their logical indices.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the resulting capacity cannot be represented, in which
    /// case nothing is changed.
    pub fn ensure_head_capacity(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        HeadCapacityStrategy.ensure_capacity(self, extra)
    }

    /// Guarantees at least `extra` free slots after the occupied window, reallocating if the
    /// tail slack doesn't already cover them. Existing items keep their logical indices.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the resulting capacity cannot be represented, in which
    /// case nothing is changed.
    pub fn ensure_tail_capacity(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        TailCapacityStrategy.ensure_capacity(self, extra)
    }

    /// Opens a gap of `extra` slots at the given logical index, widening the occupied window
    /// over it. Items before the split keep their logical indices; items at and after it move up
    /// by `extra`.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `split_index > size`, or with [`CapacityOverflow`] if
    /// the resulting capacity cannot be represented. Either way nothing is changed.
    ///
    /// # Safety
    /// On success the gap slots `[split_index, split_index + extra)` are uninitialized while
    /// lying inside the occupied window - the invariant every safe read relies on is suspended.
    /// The caller must fill the gap with [`write_gap`](LinearStorage::write_gap) (or discard it
    /// with [`close_gap`](LinearStorage::close_gap)) before calling anything else on this
    /// storage.
    pub unsafe fn ensure_split_capacity(
        &mut self,
        split_index: usize,
        extra: usize,
    ) -> Result<(), LinearStorageError> {
        // SAFETY: The gap obligation is forwarded to the caller.
        unsafe { SplitCapacityStrategy.ensure_capacity(self, split_index, extra) }
    }

    /// Fills one slot of a gap opened by
    /// [`ensure_split_capacity`](LinearStorage::ensure_split_capacity). The previous slot
    /// contents are not read or dropped.
    ///
    /// # Safety
    /// `index` must lie within the current occupied window and refer to a gap slot that has not
    /// been written since the gap was opened.
    pub const unsafe fn write_gap(&mut self, index: usize, item: T) {
        debug_assert!(index < self.bounds.size());

        // SAFETY: The caller guarantees index is inside the window, which is inside the capacity.
        unsafe { self.buf.write(self.bounds.first_index() + index, item) }
    }

    /// Closes `count` unfilled slots of a gap opened by
    /// [`ensure_split_capacity`](LinearStorage::ensure_split_capacity), starting at logical
    /// index `gap_begin`, by shifting the items after them back down.
    ///
    /// # Safety
    /// The slots `[gap_begin, gap_begin + count)` must be unwritten gap slots and every other
    /// slot in the window must hold a live item.
    pub const unsafe fn close_gap(&mut self, gap_begin: usize, count: usize) {
        let first = self.bounds.first_index();
        let size = self.bounds.size();
        let post_begin = gap_begin + count;

        if post_begin < size {
            // SAFETY: Both ranges are within the window; overlap is handled by the move itself.
            unsafe {
                self.buf.copy_within(RangeMove::new(
                    first + post_begin,
                    first + size - 1,
                    first + gap_begin,
                ));
            }
        }

        self.bounds.shrink_tail(count);
    }

    /// Adds an item before the current first item, growing the head if no slack is left.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the resulting capacity cannot be represented.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// let mut storage = LinearStorage::new();
    /// storage.push_tail(2).unwrap();
    /// storage.push_head(1).unwrap();
    /// assert_eq!(storage.as_slice(), &[1, 2]);
    /// ```
    pub fn push_head(&mut self, item: T) -> Result<(), CapacityOverflow> {
        self.ensure_head_capacity(1)?;

        // SAFETY: There is at least one free slot before the window, and slots outside the
        // window are always free to overwrite.
        unsafe { self.buf.write(self.bounds.first_index() - 1, item) }
        self.bounds.extend_head(1);
        Ok(())
    }

    /// Adds an item after the current last item, growing the tail if no slack is left.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the resulting capacity cannot be represented.
    pub fn push_tail(&mut self, item: T) -> Result<(), CapacityOverflow> {
        self.ensure_tail_capacity(1)?;

        // SAFETY: There is at least one free slot after the window, and slots outside the
        // window are always free to overwrite.
        unsafe { self.buf.write(self.bounds.first_index() + self.bounds.size(), item) }
        self.bounds.extend_tail(1);
        Ok(())
    }

    /// Removes and returns the first item, leaving its slot as head slack.
    pub fn pop_head(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: The window is non-empty, so its first slot holds a live item. The window is
        // narrowed immediately, so the moved-out slot is never read again.
        let item = unsafe { self.buf.read(self.bounds.first_index()) };
        self.bounds.shrink_head(1);
        Some(item)
    }

    /// Removes and returns the last item, leaving its slot as tail slack.
    pub fn pop_tail(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: The window is non-empty, so its last slot holds a live item. The window is
        // narrowed immediately, so the moved-out slot is never read again.
        let item = unsafe { self.buf.read(self.bounds.first_index() + self.bounds.size() - 1) };
        self.bounds.shrink_tail(1);
        Some(item)
    }

    /// Removes and returns the item at the given logical index, closing the hole by shifting
    /// whichever neighbouring segment is shorter. Removing near the head therefore reclaims the
    /// slot as head slack, and near the tail as tail slack.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, size)`.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::storage::LinearStorage;
    /// let mut storage = LinearStorage::new();
    /// for i in 0..5 {
    ///     storage.push_tail(i).unwrap();
    /// }
    /// assert_eq!(storage.remove(1), Ok(1));
    /// assert_eq!(storage.as_slice(), &[0, 2, 3, 4]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let first = self.bounds.first_index();
        let size = self.bounds.size();

        // SAFETY: index is within the window, so the slot holds a live item. The hole it leaves
        // is repaired below before the window is re-exposed.
        let item = unsafe { self.buf.read(first + index) };

        let pre_len = index;
        let post_len = size - index - 1;

        if pre_len <= post_len {
            if pre_len > 0 {
                // SAFETY: The pre-segment and its one-slot-right target are within the window.
                unsafe {
                    self.buf.copy_within(RangeMove::new(first, first + index - 1, first + 1));
                }
            }
            self.bounds.set(first + 1, size - 1);
        } else {
            if post_len > 0 {
                // SAFETY: The post-segment and its one-slot-left target are within the window.
                unsafe {
                    self.buf
                        .copy_within(RangeMove::new(first + index + 1, first + size - 1, first + index));
                }
            }
            self.bounds.set(first, size - 1);
        }

        Ok(item)
    }

    /// Views the occupied window as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: The window is contiguous, initialized and within the allocation, and the
        // borrow checker prevents mutation for the lifetime of the view.
        unsafe {
            slice::from_raw_parts(self.buf.item_ptr(self.bounds.first_index()), self.bounds.size())
        }
    }

    /// Views the occupied window as a mutable slice.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The window is contiguous, initialized and within the allocation, and the
        // mutable borrow of self is exclusive for the lifetime of the view.
        unsafe {
            slice::from_raw_parts_mut(self.buf.item_ptr(self.bounds.first_index()), self.bounds.size())
        }
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.bounds.size() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                size: self.bounds.size(),
            })
        }
    }
}

impl<T> Default for LinearStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinearStorage<T> {
    fn drop(&mut self) {
        if !self.is_empty() {
            // SAFETY: The occupied window always holds live items; the buffer itself only
            // releases the allocation afterwards and never touches them again.
            unsafe {
                self.buf.drop_range(self.bounds.first_index(), self.bounds.size());
            }
        }
    }
}

// SAFETY: LinearStorage owns its allocation through a unique pointer, so it is safe to send
// whenever its items are.
unsafe impl<T: Send> Send for LinearStorage<T> {}
// SAFETY: The safe API obeys the borrow checker and performs no interior mutability, so shared
// references are safe to share whenever the items are.
unsafe impl<T: Sync> Sync for LinearStorage<T> {}

impl<T: Clone> Clone for LinearStorage<T> {
    fn clone(&self) -> Self {
        let mut buf = match Buffer::with_capacity(self.capacity()) {
            Ok(buf) => buf,
            // The capacity was already validated when the original allocation was made.
            Err(overflow) => unreachable!("{overflow}"),
        };

        for (offset, item) in self.as_slice().iter().enumerate() {
            // SAFETY: The clone's buffer has the same capacity, so the original's window
            // positions are all in bounds, and fresh slots hold nothing to leak.
            unsafe {
                buf.write(self.bounds.first_index() + offset, item.clone());
            }
        }

        LinearStorage {
            buf,
            bounds: self.bounds,
        }
    }
}

impl<T: PartialEq> PartialEq for LinearStorage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for LinearStorage<T> {}

impl<T: Debug> Debug for LinearStorage<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearStorage")
            .field("contents", &self.as_slice())
            .field("first", &self.bounds.first_index())
            .field("size", &self.size())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Debug> Display for LinearStorage<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
