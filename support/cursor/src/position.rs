//! Positions: contiguous cursors backed by a single pointer.
//!
//! A [`Position`] is exactly one pointer wide. It has pointer semantics: jumping
//! around never checks bounds and never fails, and dereferencing is `unsafe`.
//! Containers hand positions out tied to a borrow of their storage, so a
//! position cannot outlive the elements it walks over.
//!
//! The const and mutable flavors are one type with a [`Mutability`] marker. A
//! mutable position converts into a const one, never the other way round:
//!
//! ```compile_fail
//! use stlish_cursor::{Const, Mut, Position};
//!
//! let values = [1, 2, 3];
//! let pos: Position<'_, i32, Const> = unsafe { Position::from_ptr(values.as_ptr()) };
//! let _: Position<'_, i32, Mut> = pos.into();
//! ```
//!
//! Zero-sized elements are handled the way slice iterators handle them: the
//! pointer is used as a counter, so `end - begin` is still the element count.

use core::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    mem,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr::NonNull,
};

use crate::cursor::{Cursor, CursorMut};
use crate::tag::Contiguous;

mod private {
    pub trait Sealed {}
}

/// Access granted by a [`Position`]: shared ([`Const`]) or exclusive ([`Mut`]).
///
/// This is a sealed trait - it cannot be implemented outside this crate.
pub trait Mutability: private::Sealed + 'static {
    /// What dereferencing yields.
    type Ref<'a, T: 'a>;

    #[doc(hidden)]
    unsafe fn make_ref<'a, T: 'a>(ptr: *mut T) -> Self::Ref<'a, T>;
}

/// Shared access: positions dereference to `&T`.
pub enum Const {}

/// Exclusive access: positions dereference to `&mut T`.
pub enum Mut {}

impl private::Sealed for Const {}
impl private::Sealed for Mut {}

impl Mutability for Const {
    type Ref<'a, T: 'a> = &'a T;

    unsafe fn make_ref<'a, T: 'a>(ptr: *mut T) -> &'a T {
        // SAFETY: forwarded to the caller.
        unsafe { &*ptr }
    }
}

impl Mutability for Mut {
    type Ref<'a, T: 'a> = &'a mut T;

    unsafe fn make_ref<'a, T: 'a>(ptr: *mut T) -> &'a mut T {
        // SAFETY: forwarded to the caller.
        unsafe { &mut *ptr }
    }
}

/// A contiguous, random-access cursor.
///
/// See [module docs](self) for the contract.
pub struct Position<'a, T: 'a, M: Mutability = Const> {
    ptr: *mut T,
    phantom: PhantomData<M::Ref<'a, T>>,
}

/// Bytes between consecutive positions; ZSTs count one "byte" per element.
const fn stride<T>() -> isize {
    match mem::size_of::<T>() {
        0 => 1,
        size => size as isize,
    }
}

const fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}

impl<'a, T: 'a> Position<'a, T, Const> {
    /// Wraps a pointer into shared storage.
    ///
    /// # Safety
    ///
    /// `ptr` must point into, or one past the end of, a block of `T`s that stays
    /// alive and is not mutated for `'a`.
    #[inline]
    pub const unsafe fn from_ptr(ptr: *const T) -> Self {
        Position {
            ptr: ptr.cast_mut(),
            phantom: PhantomData,
        }
    }
}

impl<'a, T: 'a> Position<'a, T, Mut> {
    /// Wraps a pointer into exclusively borrowed storage.
    ///
    /// # Safety
    ///
    /// `ptr` must point into, or one past the end of, a block of `T`s that stays
    /// alive for `'a` and is accessed only through positions derived from this
    /// one while `'a` lasts.
    #[inline]
    pub const unsafe fn from_mut_ptr(ptr: *mut T) -> Self {
        Position {
            ptr,
            phantom: PhantomData,
        }
    }
}

impl<'a, T: 'a, M: Mutability> Position<'a, T, M> {
    /// The same position with shared access only.
    #[inline]
    pub const fn as_const(self) -> Position<'a, T, Const> {
        Position {
            ptr: self.ptr,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    fn element_ptr(&self) -> *mut T {
        if is_zst::<T>() {
            NonNull::dangling().as_ptr()
        } else {
            self.ptr
        }
    }

    #[inline(always)]
    fn step(&mut self, n: isize) {
        self.ptr = if is_zst::<T>() {
            self.ptr.cast::<u8>().wrapping_offset(n).cast()
        } else {
            self.ptr.wrapping_offset(n)
        };
    }
}

impl<'a, T: 'a, M: Mutability> Cursor for Position<'a, T, M> {
    type Value = T;
    type Ref = M::Ref<'a, T>;
    type Tag = Contiguous;

    #[inline]
    fn advance(&mut self, n: isize) {
        self.step(n);
    }

    #[inline]
    fn retreat(&mut self, n: isize) {
        self.step(n.wrapping_neg());
    }

    #[inline]
    fn distance(&self, origin: &Self) -> isize {
        let bytes = self.ptr.addr().wrapping_sub(origin.ptr.addr()) as isize;
        bytes / stride::<T>()
    }

    #[inline]
    unsafe fn get(&self) -> Self::Ref {
        // SAFETY: the caller guarantees the slot is live; the flavor's borrow
        // rules come from the constructor contract.
        unsafe { M::make_ref(self.element_ptr()) }
    }

    #[inline]
    fn as_ptr(&self) -> *const T {
        self.element_ptr()
    }
}

impl<'a, T: 'a> CursorMut for Position<'a, T, Mut> {
    #[inline]
    fn as_mut_ptr(&self) -> *mut T {
        self.element_ptr()
    }
}

impl<'a, T: 'a> From<Position<'a, T, Mut>> for Position<'a, T, Const> {
    fn from(pos: Position<'a, T, Mut>) -> Self {
        pos.as_const()
    }
}

// --- Manual Clone/Copy/Debug to avoid T: Clone/Copy/Debug bounds ---

impl<'a, T: 'a, M: Mutability> Clone for Position<'a, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a, M: Mutability> Copy for Position<'a, T, M> {}

impl<'a, T: 'a, M: Mutability> fmt::Debug for Position<'a, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.ptr).finish()
    }
}

// --- Comparison (across flavors) ---

impl<'a, 'b, T, M1, M2> PartialEq<Position<'b, T, M2>> for Position<'a, T, M1>
where
    T: 'a + 'b,
    M1: Mutability,
    M2: Mutability,
{
    #[inline]
    fn eq(&self, other: &Position<'b, T, M2>) -> bool {
        self.ptr.addr() == other.ptr.addr()
    }
}

impl<'a, T: 'a, M: Mutability> Eq for Position<'a, T, M> {}

impl<'a, 'b, T, M1, M2> PartialOrd<Position<'b, T, M2>> for Position<'a, T, M1>
where
    T: 'a + 'b,
    M1: Mutability,
    M2: Mutability,
{
    #[inline]
    fn partial_cmp(&self, other: &Position<'b, T, M2>) -> Option<Ordering> {
        Some(self.ptr.addr().cmp(&other.ptr.addr()))
    }
}

impl<'a, T: 'a, M: Mutability> Ord for Position<'a, T, M> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.addr().cmp(&other.ptr.addr())
    }
}

// --- Arithmetic ---

impl<'a, T: 'a, M: Mutability> AddAssign<isize> for Position<'a, T, M> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<'a, T: 'a, M: Mutability> SubAssign<isize> for Position<'a, T, M> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.retreat(n);
    }
}

impl<'a, T: 'a, M: Mutability> Add<isize> for Position<'a, T, M> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<'a, T: 'a, M: Mutability> Add<Position<'a, T, M>> for isize {
    type Output = Position<'a, T, M>;

    #[inline]
    fn add(self, pos: Position<'a, T, M>) -> Position<'a, T, M> {
        pos.offset(self)
    }
}

impl<'a, T: 'a, M: Mutability> Sub<isize> for Position<'a, T, M> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self.retreat(n);
        self
    }
}

impl<'a, T: 'a, M: Mutability> Sub for Position<'a, T, M> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}

// Same thread-safety as the reference the position stands for.
unsafe impl<'a, T: 'a, M: Mutability> Send for Position<'a, T, M> where M::Ref<'a, T>: Send {}
unsafe impl<'a, T: 'a, M: Mutability> Sync for Position<'a, T, M> where M::Ref<'a, T>: Sync {}
