//! The low-level storage core: a linear buffer, the occupied-window tracker, the block-move
//! descriptor and the capacity strategies that open free room on demand.
//!
//! # Method
//! All growth decisions live in [`capacity`]; [`LinearStorage`] owns the allocation and the
//! window, and exposes the primitive moves the strategies are built from. The types most callers
//! want are re-exported here.

pub mod bounds;
pub mod capacity;
pub mod error;
pub mod linear;
pub mod range;

pub(crate) mod buffer;

#[doc(inline)]
pub use bounds::ContentBounds;
#[doc(inline)]
pub use error::{CapacityOverflow, IndexOutOfBounds, LinearStorageError};
#[doc(inline)]
pub use linear::LinearStorage;
#[doc(inline)]
pub use range::RangeMove;
