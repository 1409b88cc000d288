//! A fixed-length, inline array with pointer-style cursors.
//!
//! [`FixedArray<T, N>`] holds exactly `N` elements with no heap allocation. On
//! top of the usual slice-style access it hands out cursors from
//! [`stlish_cursor`]: [`begin`](FixedArray::begin) / [`end`](FixedArray::end)
//! positions, their [`Reverse`] counterparts, and [`Span`]s that feed the
//! [`algo`] functions or any iterator chain.
//!
//! ```
//! use stlish_array::{FixedArray, algo};
//!
//! let mut a = FixedArray::new([5, 3, 8, 1]);
//! algo::sort(a.rspan_mut());
//! assert_eq!(a, [8, 5, 3, 1]);
//!
//! assert_eq!(algo::accumulate(a.span(), 0i32, |sum, v| sum + v), 17);
//! assert_eq!(a.at(9).map_err(|e| e.index), Err(9));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod array;
mod cmp;
mod error;
mod macros;

pub use array::FixedArray;
pub use cmp::swap;
pub use error::{Error, OutOfRange};

pub use stlish_cursor::{Const, Cursor, CursorMut, Mut, Position, Reverse, Span, algo, tag};
