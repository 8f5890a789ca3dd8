//! A module containing [`ContentBounds`], the occupied-window tracker.

/// Tracks which part of a physical buffer is occupied.
///
/// The occupied slots always form a contiguous window starting at physical index `first` and
/// spanning `size` slots. Everything before the window is head slack, everything after it is tail
/// slack. An empty window is represented by `size == 0` (the classic
/// `last_index < first_index` encoding doesn't work with unsigned indices, so the last index is
/// derived and absent when empty).
///
/// `ContentBounds` performs no validation of its own: keeping `first + size` within the physical
/// capacity is the responsibility of the capacity strategies and storage operations that mutate
/// it, which is why all mutation is crate-internal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    first: usize,
    size: usize,
}

impl ContentBounds {
    /// Creates bounds describing an empty window at the start of a buffer.
    pub const fn new() -> ContentBounds {
        ContentBounds { first: 0, size: 0 }
    }

    /// The physical index of the first occupied slot. Meaningless when the window is empty.
    pub const fn first_index(&self) -> usize {
        self.first
    }

    /// The physical index of the last occupied slot, or [`None`] when the window is empty.
    pub const fn last_index(&self) -> Option<usize> {
        if self.size == 0 {
            None
        } else {
            Some(self.first + self.size - 1)
        }
    }

    /// The number of occupied slots.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if no slot is occupied.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Replaces the window outright.
    pub(crate) const fn set(&mut self, first: usize, size: usize) {
        self.first = first;
        self.size = size;
    }

    /// Widens the window by `count` slots at the head.
    pub(crate) const fn extend_head(&mut self, count: usize) {
        self.first -= count;
        self.size += count;
    }

    /// Widens the window by `count` slots at the tail.
    pub(crate) const fn extend_tail(&mut self, count: usize) {
        self.size += count;
    }

    /// Narrows the window by `count` slots at the head, turning them into head slack.
    pub(crate) const fn shrink_head(&mut self, count: usize) {
        self.first += count;
        self.size -= count;
    }

    /// Narrows the window by `count` slots at the tail, turning them into tail slack.
    pub(crate) const fn shrink_tail(&mut self, count: usize) {
        self.size -= count;
    }
}
