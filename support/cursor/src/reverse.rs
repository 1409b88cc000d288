//! Reverse cursor adapter.
//!
//! `Reverse(it)` dereferences to the element *before* `it`:
//!
//! ```text
//! *Reverse::new(it) == *(it - 1)
//! ```
//!
//! so wrapping `end` yields the last element first, and wrapping `begin` marks
//! the end of the reversed range without ever forming a position before the
//! first element. Advancing the adapter retreats the wrapped cursor, distances
//! and ordering are mirrored, and a contiguous cursor is demoted to plain
//! random access (see [`tag`](crate::tag)).
//!
//! `Reverse` works over anything implementing [`Cursor`], including another
//! `Reverse`:
//!
//! ```
//! use stlish_cursor::{Cursor, Position, Reverse};
//!
//! let values = [1, 2, 3];
//! // SAFETY: all positions below stay within `values`.
//! let first = unsafe { Position::from_ptr(values.as_ptr()) };
//! let last = first + 3;
//!
//! let rbegin = Reverse::new(last);
//! assert_eq!(unsafe { *rbegin.get() }, 3);
//!
//! let twice = Reverse::new(Reverse::new(first));
//! assert_eq!(unsafe { *twice.get() }, 1);
//! ```

use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::cursor::{Cursor, CursorMut};
use crate::position::{Const, Mut, Position};
use crate::tag::Demoted;

/// A cursor walking its wrapped cursor's sequence backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<I> {
    current: I,
}

/// Wraps `base` in a [`Reverse`].
#[inline]
pub const fn make_reverse<I>(base: I) -> Reverse<I> {
    Reverse::new(base)
}

impl<I> Reverse<I> {
    /// Wraps `base`; the result dereferences to the element before `base`.
    #[inline]
    pub const fn new(base: I) -> Self {
        Reverse { current: base }
    }

    /// The wrapped cursor, unchanged (not shifted back by one).
    #[inline]
    pub fn base(&self) -> I
    where
        I: Copy,
    {
        self.current
    }

    /// Converts the wrapped cursor, e.g. from a mutable to a const position.
    #[inline]
    pub fn cast<U: From<I>>(self) -> Reverse<U> {
        Reverse::new(U::from(self.current))
    }
}

impl<'a, T: 'a> Reverse<Position<'a, T, Mut>> {
    /// The same reverse position with shared access only.
    #[inline]
    pub const fn as_const(self) -> Reverse<Position<'a, T, Const>> {
        Reverse::new(self.current.as_const())
    }
}

impl<'a, T: 'a> From<Reverse<Position<'a, T, Mut>>> for Reverse<Position<'a, T, Const>> {
    fn from(rev: Reverse<Position<'a, T, Mut>>) -> Self {
        rev.as_const()
    }
}

impl<I: Cursor> Cursor for Reverse<I> {
    type Value = I::Value;
    type Ref = I::Ref;
    type Tag = Demoted<I::Tag>;

    #[inline]
    fn advance(&mut self, n: isize) {
        self.current.retreat(n);
    }

    #[inline]
    fn retreat(&mut self, n: isize) {
        self.current.advance(n);
    }

    #[inline]
    fn distance(&self, origin: &Self) -> isize {
        // Operands swap: `self` is ahead of `origin` in reverse order exactly
        // when its base is behind.
        origin.current.distance(&self.current)
    }

    #[inline]
    unsafe fn get(&self) -> Self::Ref {
        let mut prev = self.current;
        prev.retreat(1);
        // SAFETY: the caller guarantees the element before `current` is live.
        unsafe { prev.get() }
    }

    #[inline]
    fn as_ptr(&self) -> *const I::Value {
        self.current.offset(-1).as_ptr()
    }
}

impl<I: CursorMut> CursorMut for Reverse<I> {
    #[inline]
    fn as_mut_ptr(&self) -> *mut I::Value {
        self.current.offset(-1).as_mut_ptr()
    }
}

// --- Comparison: mirrored relative to the wrapped cursors ---

impl<I, U> PartialEq<Reverse<U>> for Reverse<I>
where
    I: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Reverse<U>) -> bool {
        self.current == other.current
    }
}

impl<I: Eq> Eq for Reverse<I> {}

impl<I, U> PartialOrd<Reverse<U>> for Reverse<I>
where
    I: PartialEq<U>,
    U: PartialOrd<I>,
{
    #[inline]
    fn partial_cmp(&self, other: &Reverse<U>) -> Option<Ordering> {
        other.current.partial_cmp(&self.current)
    }
}

impl<I: Ord> Ord for Reverse<I> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.current.cmp(&self.current)
    }
}

// --- Arithmetic: directions flipped ---

impl<I: Cursor> AddAssign<isize> for Reverse<I> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<I: Cursor> SubAssign<isize> for Reverse<I> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.retreat(n);
    }
}

impl<I: Cursor> Add<isize> for Reverse<I> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<I: Cursor> Add<Reverse<I>> for isize {
    type Output = Reverse<I>;

    #[inline]
    fn add(self, rev: Reverse<I>) -> Reverse<I> {
        rev.offset(self)
    }
}

impl<I: Cursor> Sub<isize> for Reverse<I> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self.retreat(n);
        self
    }
}

impl<I: Cursor> Sub for Reverse<I> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}
