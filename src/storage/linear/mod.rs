//! A module containing [`LinearStorage`].
//!
//! [`LinearStorage`] is also re-exported under the parent module.

mod storage;

pub use storage::*;
