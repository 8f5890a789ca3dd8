//! A module containing [`LinearSequence`] and associated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a
//! LinearSequence. [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`] are used for borrowed iteration.
//!
//! [`LinearSequence`] is also re-exported under the parent module.

mod iter;
mod sequence;

pub use iter::*;
pub use sequence::*;
