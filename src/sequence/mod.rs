//! The safe, consumer-facing sequence layer built on top of [`storage`](crate::storage).
//!
//! [`LinearSequence`] upholds the storage invariants (every occupied slot initialized, bounds
//! inside the capacity) so its whole API is safe, and the [capability traits](traits) describe
//! the individual abilities - reading, replacing, appending, inserting, removing - that generic
//! consumers can require one by one.

pub mod linear;
pub mod traits;

#[doc(inline)]
pub use linear::LinearSequence;
#[doc(inline)]
pub use traits::{AppendSequence, InsertSequence, RemoveSequence, ReplaceSequence, Sequence};
