//! Half-open cursor ranges as Rust iterators.
//!
//! A [`Span`] is the pair `[first, last)`. Creating one is the single point where
//! a caller vouches for a range; afterwards iterating it, and handing it to the
//! [`algo`](crate::algo) functions, is safe. Containers hand out spans over their
//! own storage, so ordinary iterator adapters work on top of the cursor core:
//!
//! ```
//! use stlish_cursor::{Position, Reverse, Span};
//!
//! let values = [1, 2, 3, 4];
//! // SAFETY: both ends lie within `values`, which outlives the span.
//! let first = unsafe { Position::from_ptr(values.as_ptr()) };
//! let span = unsafe { Span::new(Reverse::new(first + 4), Reverse::new(first)) };
//!
//! assert_eq!(span.copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
//! ```

use core::iter::FusedIterator;

use crate::cursor::Cursor;

/// The range `[first, last)` of a cursor type.
#[derive(Debug)]
pub struct Span<I> {
    first: I,
    last: I,
}

impl<I: Cursor> Span<I> {
    /// Creates a span.
    ///
    /// # Safety
    ///
    /// `last` must be reachable from `first` by advancing, and every element in
    /// between must stay live for as long as the references the cursors yield.
    /// For cursors yielding `&mut`, nothing else may access those elements
    /// during that time.
    #[inline]
    pub unsafe fn new(first: I, last: I) -> Self {
        debug_assert!(first <= last, "span ends are out of order");
        Span { first, last }
    }

    /// The remaining `(first, last)` pair.
    #[inline]
    pub fn bounds(&self) -> (I, I) {
        (self.first, self.last)
    }

    #[inline]
    pub fn into_bounds(self) -> (I, I) {
        (self.first, self.last)
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.last.distance(&self.first).max(0) as usize
    }
}

impl<I: Cursor> Iterator for Span<I> {
    type Item = I::Ref;

    #[inline]
    fn next(&mut self) -> Option<I::Ref> {
        if self.first == self.last {
            return None;
        }
        // SAFETY: `first` is inside the range vouched for in `Span::new`, and
        // each element is yielded at most once.
        let item = unsafe { self.first.get() };
        self.first.advance(1);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Ref> {
        if n >= self.remaining() {
            self.first = self.last;
            return None;
        }
        self.first.advance(n as isize);
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining()
    }
}

impl<I: Cursor> DoubleEndedIterator for Span<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Ref> {
        if self.first == self.last {
            return None;
        }
        self.last.retreat(1);
        // SAFETY: as in `next`, from the other end.
        Some(unsafe { self.last.get() })
    }
}

impl<I: Cursor> ExactSizeIterator for Span<I> {}

impl<I: Cursor> FusedIterator for Span<I> {}
