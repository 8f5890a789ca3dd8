//! The raw allocation backing a [`LinearStorage`](super::LinearStorage).

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};

use super::error::CapacityOverflow;
use super::range::RangeMove;

/// A fixed-capacity allocation of possibly uninitialized slots.
///
/// A Buffer knows nothing about which of its slots hold live items - that is what
/// [`ContentBounds`](super::ContentBounds) is for - so every slot access is unsafe and gated on
/// the caller's knowledge of the occupied window. Dropping a Buffer releases the allocation but
/// never drops items; the owning storage drops its occupied window first.
pub(crate) struct Buffer<T> {
    ptr: NonNull<MaybeUninit<T>>,
    capacity: usize,
    _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with capacity 0 and no allocation.
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            capacity: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a Buffer with exactly `capacity` uninitialized slots.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Buffer<T>, CapacityOverflow> {
        let layout = Self::make_layout(capacity)?;

        Ok(Buffer {
            ptr: Self::make_ptr(layout),
            capacity,
            _phantom: PhantomData,
        })
    }

    /// The number of slots in the allocation.
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    /// A helper to build the [`Layout`] for `capacity` slots, rejecting capacities whose layout
    /// would exceed [`isize::MAX`] bytes.
    fn make_layout(capacity: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(capacity).map_err(|_| CapacityOverflow)
    }

    /// A helper to allocate `layout`, returning a dangling pointer for a zero-sized layout.
    ///
    /// # Panics
    /// In the event of an allocation failure this calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid allocating while reporting.
    fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            NonNull::new(unsafe { alloc::alloc(layout).cast() })
                .unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// Grows the allocation to `new_capacity` slots, keeping existing slot contents at their
    /// physical positions. New slots are uninitialized.
    ///
    /// Used when the occupied window doesn't need to move; growth that repositions the window
    /// goes through a fresh Buffer and [`Buffer::transfer`] instead.
    pub(crate) fn grow(&mut self, new_capacity: usize) -> Result<(), CapacityOverflow> {
        let new_layout = Self::make_layout(new_capacity)?;

        let new_ptr = if size_of::<T>() == 0 || new_capacity == self.capacity {
            // Zero-sized types are never allocated; only the slot count changes.
            self.ptr
        } else if self.capacity == 0 {
            Self::make_ptr(new_layout)
        } else {
            // The old layout was validated when the current allocation was made.
            let old_layout = match Self::make_layout(self.capacity) {
                Ok(layout) => layout,
                Err(overflow) => return Err(overflow),
            };

            // SAFETY: ptr was allocated in the global allocator with old_layout. The new size is
            // non-zero and has been validated against isize::MAX by make_layout.
            let raw_ptr: *mut MaybeUninit<T> = unsafe {
                alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
            };

            NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
        };

        self.ptr = new_ptr;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Writes `value` into the slot at `index` without reading or dropping previous contents.
    ///
    /// # Safety
    /// `index` must be less than the capacity. If the slot held a live item, that item is leaked.
    pub(crate) const unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees index is within the allocated capacity.
        unsafe { self.ptr.add(index).write(MaybeUninit::new(value)) }
    }

    /// Moves the item out of the slot at `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// `index` must be less than the capacity and the slot must hold a live item. The caller must
    /// not read the slot again before rewriting it.
    pub(crate) const unsafe fn read(&self, index: usize) -> T {
        // SAFETY: The caller guarantees index is in bounds and the slot is initialized. The heap
        // copy is bitwise-duplicated and the duplicate forgotten, which is as close as we can get
        // to moving a value off the heap.
        unsafe { self.ptr.add(index).read().assume_init() }
    }

    /// Borrows the item in the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than the capacity and the slot must hold a live item.
    pub(crate) const unsafe fn get_ref(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees index is in bounds and the slot is initialized.
        unsafe { self.ptr.add(index).as_ref().assume_init_ref() }
    }

    /// Mutably borrows the item in the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than the capacity and the slot must hold a live item.
    pub(crate) const unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees index is in bounds and the slot is initialized.
        unsafe { self.ptr.add(index).as_mut().assume_init_mut() }
    }

    /// Executes a block move within this Buffer.
    ///
    /// The source and target ranges may overlap: [`ptr::copy`] has memmove semantics, so the copy
    /// direction for an overlap is resolved by the primitive rather than by hand.
    ///
    /// # Safety
    /// The source range and the target range must both lie within the capacity. Slots in the
    /// source range that the move uncovers are left as logically-moved-out duplicates; the caller
    /// must treat them as uninitialized.
    pub(crate) const unsafe fn copy_within(&mut self, mv: RangeMove) {
        // SAFETY: The caller guarantees both ranges are within the allocation, and ptr::copy
        // handles overlapping ranges.
        unsafe {
            ptr::copy(
                self.ptr.add(mv.source_begin()).as_ptr(),
                self.ptr.add(mv.target()).as_ptr(),
                mv.len(),
            );
        }
    }

    /// Executes a block move from `source` into this Buffer, reading the slots described by the
    /// move's source range and writing them starting at its target index.
    ///
    /// # Safety
    /// The source range must lie within `source`'s capacity and hold live items; the target range
    /// must lie within this Buffer's capacity. Ownership of the moved items transfers to this
    /// Buffer; the caller must treat the source slots as uninitialized afterwards.
    pub(crate) const unsafe fn transfer(&mut self, source: &Buffer<T>, mv: RangeMove) {
        // SAFETY: The two Buffers are distinct allocations (self is mutably borrowed, source
        // shared), so the ranges cannot overlap. The caller guarantees both are in bounds.
        unsafe {
            ptr::copy_nonoverlapping(
                source.ptr.add(mv.source_begin()).as_ptr(),
                self.ptr.add(mv.target()).as_ptr(),
                mv.len(),
            );
        }
    }

    /// Drops `count` live items in place, starting at the slot at `begin`.
    ///
    /// # Safety
    /// The range must lie within the capacity and every slot in it must hold a live item.
    pub(crate) unsafe fn drop_range(&mut self, begin: usize, count: usize) {
        // SAFETY: The caller guarantees the range is in bounds and initialized, so the cast to
        // *mut T yields a valid slice of live items.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.add(begin).as_ptr().cast::<T>(),
                count,
            ));
        }
    }

    /// A raw pointer to the slot at `index`, reinterpreted as an item pointer for slice views.
    ///
    /// # Safety
    /// `index` must be at most the capacity (one-past-the-end is allowed for empty views).
    pub(crate) const unsafe fn item_ptr(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees the offset stays within (or one past) the allocation.
        unsafe { self.ptr.add(index).as_ptr().cast() }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // The layout was validated at allocation time, so this only fails for a Buffer that was
        // never allocated - which has nothing to deallocate either way.
        if let Ok(layout) = Self::make_layout(self.capacity)
            && layout.size() != 0
        {
            // SAFETY: ptr was allocated in the global allocator with this exact layout, and
            // zero-sized layouts (never allocated) are guarded against.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
