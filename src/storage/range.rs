//! A module containing [`RangeMove`], the plan for a contiguous block move.

/// A description of a contiguous block move: copy the slots in
/// `[source_begin, source_end]` (inclusive) so that they start at `target`.
///
/// A `RangeMove` is a plain value triple. It carries no behaviour of its own; it exists so that
/// the capacity strategies can describe the moves they intend to perform and hand them to the
/// storage in one piece, rather than passing three loose indices around.
///
/// Overlapping source and target ranges are explicitly allowed - resolving the copy direction for
/// an overlap is the job of the code executing the move, not of the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMove {
    source_begin: usize,
    source_end: usize,
    target: usize,
}

impl RangeMove {
    /// Creates a plan to move `[source_begin, source_end]` to start at `target`.
    ///
    /// # Panics
    /// Panics if `source_begin > source_end`. An empty move has no valid representation; callers
    /// skip the move instead of constructing one.
    pub const fn new(source_begin: usize, source_end: usize, target: usize) -> RangeMove {
        assert!(source_begin <= source_end, "range move with inverted source range");

        RangeMove {
            source_begin,
            source_end,
            target,
        }
    }

    /// The first slot of the source range.
    pub const fn source_begin(&self) -> usize {
        self.source_begin
    }

    /// The last slot of the source range (inclusive).
    pub const fn source_end(&self) -> usize {
        self.source_end
    }

    /// The slot the moved block starts at afterwards.
    pub const fn target(&self) -> usize {
        self.target
    }

    /// The number of slots moved. Always at least 1.
    pub const fn len(&self) -> usize {
        self.source_end - self.source_begin + 1
    }
}
