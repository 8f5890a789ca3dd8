//! An indexed-sequence storage library.
//!
//! # Purpose
//! This crate implements a growable, index-addressable backing store for sequence types. The
//! occupied items live in a contiguous window somewhere inside a (possibly larger) physical
//! allocation, which leaves free slots - "slack" - at either end. Keeping slack around means that
//! items can be added at the head or the tail without touching the rest of the collection, and
//! that an insertion in the middle only ever has to move the shorter of the two surrounding
//! segments.
//!
//! # Layout
//! The crate is split into two layers:
//! - [`storage`] contains the low-level machinery: [`LinearStorage`](storage::LinearStorage)
//!   itself, the [`ContentBounds`](storage::ContentBounds) window tracker, the
//!   [`RangeMove`](storage::RangeMove) block-move descriptor and the
//!   [capacity strategies](storage::capacity) which decide when and how to reallocate or shift.
//! - [`sequence`] contains the safe consumer-facing layer:
//!   [`LinearSequence`](sequence::LinearSequence) and a small set of capability traits.
//!
//! # Error Handling
//! All contract violations (out-of-window indices, capacity computations that would exceed the
//! maximum allocation size) are surfaced as strongly typed [`Result`]s at the point of detection.
//! Nothing in this crate retries or recovers internally, and a failed operation never leaves a
//! partial mutation behind. The error types are plain structs implementing
//! [`Error`](std::error::Error), unified into an enum for static dispatch.
//!
//! # Dependencies
//! This crate builds its containers from raw allocations rather than on top of [`Vec`], so the
//! only runtime dependency is a derive macro crate that removes some very repetitive error
//! plumbing.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod sequence;
pub mod storage;

#[cfg(test)]
pub(crate) mod util;
