//! Stlish - fixed-length arrays with pointer-style cursors
//!
//! # Overview
//!
//! Stlish brings the begin/end cursor model to an inline, fixed-length array
//! without giving up safe Rust at the call site:
//!
//! - [`FixedArray<T, N>`]: exactly `N` elements, no heap, stable storage.
//! - [`Position`]: a one-pointer cursor, mutable or read-only.
//! - [`Reverse`]: walks any cursor backwards.
//! - [`Span`]: a `[first, last)` range that is also a Rust iterator, and the
//!   input to every function in [`algo`].
//!
//! # Quick Start
//!
//! ```
//! use stlish::prelude::*;
//!
//! let mut a = fixed_array![3, 1, 4, 1, 5];
//!
//! // Sort descending by sorting the reversed view ascending.
//! algo::sort(a.rspan_mut());
//! assert_eq!(a, [5, 4, 3, 1, 1]);
//!
//! // Cursors do arithmetic like pointers.
//! let third = a.begin() + 2;
//! assert_eq!(third - a.begin(), 2);
//! assert_eq!(algo::find(a.span(), &3), Some(third));
//!
//! // Checked access reports the failing operation.
//! assert!(a.at(5).is_err());
//! ```
//!
//! # Crate layout
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `stlish-cursor` | cursor traits, [`Position`], [`Reverse`], [`Span`], [`algo`], [`tag`] |
//! | `stlish-array` | [`FixedArray`], [`OutOfRange`], comparisons and [`swap`] |
//!
//! Both are `no_std`; the default `std` feature only forwards to them.

#![cfg_attr(not(feature = "std"), no_std)]

pub use stlish_array::{Error, FixedArray, OutOfRange, fixed_array, swap};
pub use stlish_cursor::{
    Const, Cursor, CursorMut, Mut, Mutability, Position, Reverse, Span, algo, make_reverse, tag,
};

/// Everything needed for day-to-day use.
pub mod prelude {
    pub use crate::{Cursor, CursorMut, FixedArray, Position, Reverse, Span, algo, fixed_array};
}
