//! Pointer-style cursors over contiguous storage.
//!
//! This crate is the iterator core behind `stlish-array`, usable on its own over
//! any block of elements:
//!
//! - [`Position`]: one pointer wide, contiguous and random access, in a const and
//!   a mutable flavor (mutable converts to const, never back).
//! - [`Reverse`]: wraps any [`Cursor`] and walks it backwards, dereferencing the
//!   element *before* the wrapped position.
//! - [`Span`]: a `[first, last)` pair that is also a Rust iterator.
//! - [`algo`]: find, count, fold, compare, copy, fill, swap, reverse and sort
//!   over spans, with memory fast paths for contiguous cursors.
//! - [`tag`]: traversal-strength tags and their demotion under reversal.
//!
//! # Example
//!
//! ```
//! use stlish_cursor::{Position, Reverse, Span, algo};
//!
//! let mut values = [5, 3, 8, 1];
//! // SAFETY: the span covers exactly `values`, which is only accessed through
//! // it until `sort` returns.
//! let span = unsafe {
//!     let first = Position::from_mut_ptr(values.as_mut_ptr());
//!     Span::new(Reverse::new(first + 4), Reverse::new(first))
//! };
//! algo::sort(span);
//! assert_eq!(values, [8, 5, 3, 1]);
//! ```
//!
//! # Gotchas
//!
//! - Cursors never check bounds. Moving one anywhere is fine; dereferencing it
//!   outside its sequence is undefined behavior, which is why [`Cursor::get`]
//!   is `unsafe`. Checked access belongs to containers.
//! - Distances and ordering are only meaningful between cursors into the same
//!   sequence.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub mod algo;
mod cursor;
mod position;
mod reverse;
mod span;
pub mod tag;

pub use cursor::{Cursor, CursorMut};
pub use position::{Const, Mut, Mutability, Position};
pub use reverse::{Reverse, make_reverse};
pub use span::Span;

static_assertions::assert_eq_size!(Position<'static, u64>, usize);
static_assertions::assert_eq_size!(Position<'static, (), Mut>, usize);
static_assertions::assert_eq_size!(Reverse<Position<'static, u64>>, usize);
static_assertions::assert_eq_size!(Reverse<Reverse<Position<'static, u8, Mut>>>, usize);
