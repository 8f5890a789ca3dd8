use crate::storage::buffer::Buffer;
use crate::storage::error::{CapacityOverflow, IndexOutOfBounds, LinearStorageError};
use crate::storage::linear::LinearStorage;
use crate::storage::range::RangeMove;

/// Ensures free slots at an arbitrary point inside the occupied window, for insertion in the
/// middle.
///
/// The items around the split point form a pre-segment and a post-segment. When the combined
/// head and tail slack covers the request, the gap is opened in place by shifting as little as
/// possible: the shorter segment when either side alone has room, the only side that has room,
/// or both segments when only the combination suffices. When the slack is insufficient, the
/// window is relocated into a fresh allocation with the gap already in place, preserving the
/// existing head and tail slack around it.
///
/// A split at logical index 0 degenerates to head growth and a split at `size` to tail growth;
/// both are delegated to the corresponding strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitCapacityStrategy;

impl SplitCapacityStrategy {
    /// Opens a gap of `extra` slots at `split_index`, widening the occupied window over it.
    /// Items before the split keep their logical indices; items at and after it move up by
    /// `extra`. A request for 0 extra slots is a no-op beyond the range check.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `split_index > size`, or with [`CapacityOverflow`] if
    /// the resulting capacity cannot be represented. Either way nothing is changed.
    ///
    /// # Safety
    /// On success the gap slots `[split_index, split_index + extra)` lie inside the occupied
    /// window but are uninitialized. The caller must fill them (or close the gap) before the
    /// storage is used in any other way. See
    /// [`LinearStorage::ensure_split_capacity`] for the caller-facing contract.
    pub unsafe fn ensure_capacity<T>(
        &self,
        storage: &mut LinearStorage<T>,
        split_index: usize,
        extra: usize,
    ) -> Result<(), LinearStorageError> {
        let size = storage.size();

        if split_index > size {
            return Err(IndexOutOfBounds {
                index: split_index,
                size,
            }
            .into());
        }

        if extra == 0 {
            return Ok(());
        }

        // The degenerate splits reduce to growth at one end; the gap obligation is the same.
        if split_index == 0 {
            storage.ensure_head_capacity(extra)?;
            storage.bounds.extend_head(extra);
            return Ok(());
        }
        if split_index == size {
            storage.ensure_tail_capacity(extra)?;
            storage.bounds.extend_tail(extra);
            return Ok(());
        }

        let head = storage.head_slack();
        let tail = storage.tail_slack();
        let first = storage.bounds.first_index();

        // How far the pre-segment moves down and the post-segment moves up. The two always sum
        // to the gap width.
        let (pre_shift, post_shift) = if head >= extra && tail >= extra {
            // Both sides have room: shift the shorter segment, breaking ties towards the end
            // with more slack.
            let pre_len = split_index;
            let post_len = size - split_index;

            if pre_len < post_len || (pre_len == post_len && head > tail) {
                (extra, 0)
            } else {
                (0, extra)
            }
        } else if tail >= extra {
            (0, extra)
        } else if head >= extra {
            (extra, 0)
        } else if head + tail >= extra {
            (head, extra - head)
        } else {
            return self.reallocate(storage, split_index, extra).map_err(Into::into);
        };

        if pre_shift > 0 {
            // SAFETY: The pre-segment is within the window and its target consumes head slack
            // that was just verified to exist; overlap is handled by the move itself.
            unsafe {
                storage.buf.copy_within(RangeMove::new(
                    first,
                    first + split_index - 1,
                    first - pre_shift,
                ));
            }
        }
        if post_shift > 0 {
            // SAFETY: The post-segment is within the window and its target consumes tail slack
            // that was just verified to exist; overlap is handled by the move itself.
            unsafe {
                storage.buf.copy_within(RangeMove::new(
                    first + split_index,
                    first + size - 1,
                    first + split_index + post_shift,
                ));
            }
        }

        storage.bounds.set(first - pre_shift, size + extra);
        Ok(())
    }

    /// The insufficient-slack path: copy both segments into a fresh allocation with the gap
    /// between them, preserving the existing head and tail slack at the ends.
    fn reallocate<T>(
        &self,
        storage: &mut LinearStorage<T>,
        split_index: usize,
        extra: usize,
    ) -> Result<(), CapacityOverflow> {
        let size = storage.size();
        let head = storage.head_slack();
        let tail = storage.tail_slack();
        let first = storage.bounds.first_index();

        let new_capacity = head
            .checked_add(size)
            .and_then(|capacity| capacity.checked_add(extra))
            .and_then(|capacity| capacity.checked_add(tail))
            .ok_or(CapacityOverflow)?;

        let mut buf = Buffer::with_capacity(new_capacity)?;

        // Both segments are non-empty here; the degenerate splits were delegated above.
        // SAFETY: Both source ranges are within the old occupied window and both targets fit in
        // the new allocation by construction of new_capacity. Ownership of the items moves to
        // the new buffer; the old one only deallocates.
        unsafe {
            buf.transfer(
                &storage.buf,
                RangeMove::new(first, first + split_index - 1, head),
            );
            buf.transfer(
                &storage.buf,
                RangeMove::new(first + split_index, first + size - 1, head + split_index + extra),
            );
        }

        storage.buf = buf;
        storage.bounds.set(head, size + extra);
        Ok(())
    }
}
