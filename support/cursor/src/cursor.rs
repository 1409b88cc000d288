//! The cursor capability.
//!
//! A cursor is a `Copy` value naming one slot of a sequence, or the slot one past
//! its end. Everything else in this crate is written against [`Cursor`] rather
//! than a concrete type: [`Reverse`](crate::Reverse) wraps any cursor,
//! [`Span`](crate::Span) turns a pair of cursors into a Rust iterator, and the
//! [`algo`](crate::algo) functions consume spans.

use crate::tag::{Category, Traversal};

/// Pointer-like traversal over a sequence.
///
/// Moving a cursor never checks bounds. Dereferencing is `unsafe` for the same
/// reason dereferencing a raw pointer is: a cursor may legally sit one past the
/// end, and it does not know where the end is.
///
/// Ordering and [`distance`](Cursor::distance) are only meaningful between
/// cursors derived from the same sequence.
pub trait Cursor: Copy + Ord {
    /// Element type walked over.
    type Value;

    /// What [`get`](Cursor::get) yields: `&Value` or `&mut Value`.
    type Ref;

    /// Traversal-strength tag; see [`tag`](crate::tag).
    type Tag: Traversal;

    const CATEGORY: Category = <Self::Tag as Traversal>::CATEGORY;

    /// Moves `n` elements forward (backward if `n` is negative).
    fn advance(&mut self, n: isize);

    /// Moves `n` elements backward (forward if `n` is negative).
    fn retreat(&mut self, n: isize);

    /// Signed number of forward steps from `origin` to `self`.
    fn distance(&self, origin: &Self) -> isize;

    /// Dereferences the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must name a live element of its sequence (not one past the
    /// end). If `Ref` is an exclusive reference, no other reference to the same
    /// element may be alive while the result is.
    unsafe fn get(&self) -> Self::Ref;

    /// Address of the element [`get`](Cursor::get) would yield.
    ///
    /// Computing the address is always safe; reading through it carries the same
    /// contract as `get`. For zero-sized elements this is a dangling, aligned
    /// pointer.
    fn as_ptr(&self) -> *const Self::Value;

    /// Pre-increment.
    #[inline]
    fn inc(&mut self) -> &mut Self {
        self.advance(1);
        self
    }

    /// Pre-decrement.
    #[inline]
    fn dec(&mut self) -> &mut Self {
        self.retreat(1);
        self
    }

    /// Post-increment: advances and returns the old position.
    #[inline]
    fn post_inc(&mut self) -> Self {
        let old = *self;
        self.advance(1);
        old
    }

    /// Post-decrement: retreats and returns the old position.
    #[inline]
    fn post_dec(&mut self) -> Self {
        let old = *self;
        self.retreat(1);
        old
    }

    /// A copy moved `n` elements forward.
    #[inline]
    #[must_use]
    fn offset(mut self, n: isize) -> Self {
        self.advance(n);
        self
    }

    /// Subscript: `self.offset(n).get()`.
    ///
    /// # Safety
    ///
    /// Same as [`get`](Cursor::get), for the cursor `n` elements away.
    #[inline]
    unsafe fn at(&self, n: isize) -> Self::Ref {
        // SAFETY: forwarded to the caller.
        unsafe { self.offset(n).get() }
    }
}

/// A cursor that hands out exclusive access.
pub trait CursorMut: Cursor {
    /// Mutable counterpart of [`Cursor::as_ptr`].
    fn as_mut_ptr(&self) -> *mut Self::Value;
}
