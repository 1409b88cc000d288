//! The fixed-length container.

use core::{
    array, fmt,
    ops::{Index, IndexMut},
    slice,
};

use stlish_cursor::{Mut, Position, Reverse, Span, algo};

use crate::error::{Error, OutOfRange};

/// Exactly `N` elements of `T`, stored inline.
///
/// `FixedArray` is a value type: it never allocates, never resizes, and its
/// storage address is stable for its whole lifetime, so cursors obtained from
/// it stay valid until it is dropped. Elements are dropped in index order.
///
/// Element access comes in three strengths:
///
/// | Accessor | Out of range |
/// |----------|--------------|
/// | [`at`](Self::at) / [`at_mut`](Self::at_mut) | returns [`OutOfRange`] |
/// | `array[i]` | panics |
/// | [`get_unchecked`](Self::get_unchecked) | undefined behavior |
///
/// [`first`](Self::first) and [`last`](Self::last) are rejected at compile time
/// when `N == 0`:
///
/// ```compile_fail
/// use stlish_array::FixedArray;
///
/// let empty: FixedArray<i32, 0> = FixedArray::new([]);
/// let _ = empty.first();
/// ```
///
/// ```compile_fail
/// use stlish_array::FixedArray;
///
/// let mut empty: FixedArray<i32, 0> = FixedArray::new([]);
/// let _ = empty.last_mut();
/// ```
///
/// Cursor distances are `isize`, so taking cursors over more than
/// `isize::MAX` elements (only possible with zero-sized `T`) is rejected at
/// compile time too:
///
/// ```compile_fail
/// use stlish_array::FixedArray;
///
/// let huge = FixedArray::new([(); usize::MAX]);
/// let _ = huge.end();
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct FixedArray<T, const N: usize> {
    items: [T; N],
}

static_assertions::assert_eq_size!(FixedArray<u8, 7>, [u8; 7]);
static_assertions::assert_eq_size!(FixedArray<u64, 0>, ());

// --- Construction ---

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of elements, as an associated constant.
    pub const LEN: usize = N;

    const SIGNED_LEN: isize = {
        assert!(N <= isize::MAX as usize, "FixedArray cursors require N <= isize::MAX");
        N as isize
    };

    /// Takes ownership of a full element list.
    #[inline]
    pub const fn new(items: [T; N]) -> Self {
        FixedArray { items }
    }

    /// Builds each element from its index, front to back.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        FixedArray {
            items: array::from_fn(f),
        }
    }

    /// Builds an array from a partial element list; slots past the end of the
    /// list hold `T::default()`.
    ///
    /// Fails with [`Error::TooManyElements`] if `items` yields more than `N`
    /// elements.
    ///
    /// ```
    /// use stlish_array::FixedArray;
    ///
    /// let a = FixedArray::<i32, 5>::from_prefix([1, 2]).unwrap();
    /// assert_eq!(a, [1, 2, 0, 0, 0]);
    /// ```
    pub fn from_prefix(items: impl IntoIterator<Item = T>) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut items = items.into_iter();
        let array = Self::from_fn(|_| items.next().unwrap_or_default());
        if items.next().is_some() {
            return Err(Error::TooManyElements { capacity: N });
        }
        Ok(array)
    }

    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.items
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

// --- Capacity ---

impl<T, const N: usize> FixedArray<T, N> {
    /// Always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `N`: a fixed array can never hold more or fewer elements.
    #[inline]
    pub const fn max_len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

// --- Element access ---

impl<T, const N: usize> FixedArray<T, N> {
    /// Checked access.
    ///
    /// ```
    /// use stlish_array::FixedArray;
    ///
    /// let a = FixedArray::new([1, 2, 3]);
    /// assert_eq!(a.at(1), Ok(&2));
    ///
    /// let err = a.at(5).unwrap_err();
    /// assert_eq!(err.to_string(), "FixedArray::at: index 5 is out of range for length 3");
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.items
            .get(index)
            .ok_or_else(|| Self::out_of_range("FixedArray::at", index))
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.items
            .get_mut(index)
            .ok_or_else(|| Self::out_of_range("FixedArray::at_mut", index))
    }

    #[cold]
    fn out_of_range(operation: &'static str, index: usize) -> OutOfRange {
        tracing::trace!(operation, index, len = N, "checked access out of range");
        OutOfRange {
            operation,
            index,
            len: N,
        }
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "FixedArray::get_unchecked: index {index} >= {N}");
        // SAFETY: forwarded to the caller.
        unsafe { self.items.get_unchecked(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "FixedArray::get_unchecked_mut: index {index} >= {N}");
        // SAFETY: forwarded to the caller.
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// The first element. Does not compile for `N == 0`.
    #[inline]
    pub const fn first(&self) -> &T {
        const { assert!(N > 0, "FixedArray::first requires N > 0") };
        &self.items[0]
    }

    /// The first element, mutably. Does not compile for `N == 0`.
    #[inline]
    pub const fn first_mut(&mut self) -> &mut T {
        const { assert!(N > 0, "FixedArray::first_mut requires N > 0") };
        &mut self.items[0]
    }

    /// The last element. Does not compile for `N == 0`.
    #[inline]
    pub const fn last(&self) -> &T {
        const { assert!(N > 0, "FixedArray::last requires N > 0") };
        &self.items[N - 1]
    }

    /// The last element, mutably. Does not compile for `N == 0`.
    #[inline]
    pub const fn last_mut(&mut self) -> &mut T {
        const { assert!(N > 0, "FixedArray::last_mut requires N > 0") };
        &mut self.items[N - 1]
    }

    /// Pointer to the first slot. Never null, even when `N == 0`.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Mutable pointer to the first slot. Never null, even when `N == 0`.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

// --- Cursors ---

impl<T, const N: usize> FixedArray<T, N> {
    /// Position of the first element.
    #[inline]
    pub fn begin(&self) -> Position<'_, T> {
        // SAFETY: points at the start of `self.items`, borrowed for the
        // position's lifetime.
        unsafe { Position::from_ptr(self.items.as_ptr()) }
    }

    /// Position one past the last element.
    #[inline]
    pub fn end(&self) -> Position<'_, T> {
        self.begin() + Self::SIGNED_LEN
    }

    /// Reverse position of the last element; wraps [`end`](Self::end).
    #[inline]
    pub fn rbegin(&self) -> Reverse<Position<'_, T>> {
        Reverse::new(self.end())
    }

    /// Reverse position one before the first element; wraps [`begin`](Self::begin).
    #[inline]
    pub fn rend(&self) -> Reverse<Position<'_, T>> {
        Reverse::new(self.begin())
    }

    /// Mutable position of the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> Position<'_, T, Mut> {
        // SAFETY: points at the start of `self.items`, exclusively borrowed for
        // the position's lifetime.
        unsafe { Position::from_mut_ptr(self.items.as_mut_ptr()) }
    }

    /// Mutable `(begin, end)` pair from a single exclusive borrow.
    #[inline]
    pub fn cursors_mut(&mut self) -> (Position<'_, T, Mut>, Position<'_, T, Mut>) {
        let first = self.begin_mut();
        (first, first + Self::SIGNED_LEN)
    }

    /// Mutable `(rbegin, rend)` pair from a single exclusive borrow.
    #[inline]
    pub fn rcursors_mut(&mut self) -> (Reverse<Position<'_, T, Mut>>, Reverse<Position<'_, T, Mut>>) {
        let (first, last) = self.cursors_mut();
        (Reverse::new(last), Reverse::new(first))
    }

    /// `[begin, end)` as an iterator and algorithm input.
    pub fn span(&self) -> Span<Position<'_, T>> {
        // SAFETY: the whole array, borrowed for the span's lifetime.
        unsafe { Span::new(self.begin(), self.end()) }
    }

    pub fn span_mut(&mut self) -> Span<Position<'_, T, Mut>> {
        let (first, last) = self.cursors_mut();
        // SAFETY: the whole array, exclusively borrowed for the span's lifetime.
        unsafe { Span::new(first, last) }
    }

    /// `[rbegin, rend)`: the array back to front.
    pub fn rspan(&self) -> Span<Reverse<Position<'_, T>>> {
        // SAFETY: the whole array, borrowed for the span's lifetime.
        unsafe { Span::new(self.rbegin(), self.rend()) }
    }

    pub fn rspan_mut(&mut self) -> Span<Reverse<Position<'_, T, Mut>>> {
        let (first, last) = self.rcursors_mut();
        // SAFETY: the whole array, exclusively borrowed for the span's lifetime.
        unsafe { Span::new(first, last) }
    }
}

// --- Operations ---

impl<T, const N: usize> FixedArray<T, N> {
    /// Assigns a clone of `value` to every slot, index 0 first.
    ///
    /// If cloning panics, slots already assigned hold the new value and the
    /// rest keep their old one; the array stays fully usable.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        algo::fill(self.span_mut(), &value);
    }

    /// Assigns `make()` to every slot, index 0 first, stopping at the first
    /// error.
    ///
    /// On error, slots before the failing one hold their new value, the failing
    /// slot and those after it keep their old one, and the error is returned.
    ///
    /// ```
    /// use stlish_array::FixedArray;
    ///
    /// let mut a = FixedArray::new([0; 4]);
    /// let mut next = 10;
    /// let result = a.try_fill_with(|| {
    ///     next += 1;
    ///     if next > 12 { Err("exhausted") } else { Ok(next) }
    /// });
    /// assert_eq!(result, Err("exhausted"));
    /// assert_eq!(a, [11, 12, 0, 0]);
    /// ```
    pub fn try_fill_with<E>(&mut self, mut make: impl FnMut() -> Result<T, E>) -> Result<(), E> {
        for (index, slot) in self.span_mut().enumerate() {
            match make() {
                Ok(value) => *slot = value,
                Err(err) => {
                    tracing::debug!(index, len = N, "try_fill_with stopped early");
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Exchanges contents with `other`, element by element. Neither array's
    /// storage moves.
    pub fn swap(&mut self, other: &mut Self) {
        algo::swap_ranges(self.span_mut(), other.span_mut());
    }
}

// --- Iteration and conversions ---

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::{Cell, RefCell};
    use pretty_assertions::assert_eq;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;
    use std::string::{String, ToString};
    use std::vec::Vec;
    use std::{format, vec};

    use stlish_cursor::Cursor;

    use super::*;
    use crate::test_utils::init_test_logging;

    // ===================
    // Helper types
    // ===================

    /// Records its id into a shared log when dropped.
    struct Logged {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for Logged {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    /// Clone succeeds while the shared budget lasts, then panics.
    #[derive(Debug)]
    struct Flaky {
        value: i32,
        budget: Rc<Cell<usize>>,
    }

    impl Flaky {
        fn new(value: i32, budget: &Rc<Cell<usize>>) -> Self {
            Flaky {
                value,
                budget: Rc::clone(budget),
            }
        }
    }

    impl Clone for Flaky {
        fn clone(&self) -> Self {
            let left = self.budget.get();
            if left == 0 {
                panic!("Flaky: clone failed");
            }
            self.budget.set(left - 1);
            Flaky::new(self.value, &self.budget)
        }
    }

    /// Neither `Clone` nor `Default`.
    #[derive(Debug, PartialEq)]
    struct MoveOnly(i32);

    // ===================
    // Capacity
    // ===================

    const FIVE: FixedArray<i32, 5> = FixedArray::new([1, 2, 3, 4, 5]);
    const NONE: FixedArray<i32, 0> = FixedArray::new([]);

    static_assertions::const_assert_eq!(FIVE.len(), 5);
    static_assertions::const_assert_eq!(FIVE.max_len(), 5);
    static_assertions::const_assert!(!FIVE.is_empty());
    static_assertions::const_assert_eq!(NONE.len(), 0);
    static_assertions::const_assert!(NONE.is_empty());
    static_assertions::const_assert_eq!(FixedArray::<u8, 3>::LEN, 3);
    static_assertions::const_assert_eq!(*FIVE.first(), 1);
    static_assertions::const_assert_eq!(*FIVE.last(), 5);

    #[test]
    fn size_and_max_size_equal_n() {
        let a = FixedArray::new([0u8; 7]);
        assert_eq!(a.len(), 7);
        assert_eq!(a.max_len(), 7);
        assert!(!a.is_empty());

        let empty: FixedArray<String, 0> = FixedArray::default();
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.max_len(), 0);
        assert!(empty.is_empty());
    }

    // ===================
    // Construction
    // ===================

    #[test]
    fn full_partial_and_default_initialization() {
        let full = FixedArray::new([10, 20, 30]);
        assert_eq!(full, [10, 20, 30]);

        let partial = FixedArray::<i32, 5>::from_prefix([1, 2]).unwrap();
        assert_eq!(partial, [1, 2, 0, 0, 0]);

        let words = FixedArray::<String, 3>::from_prefix(["hello".to_string(), "world".to_string()])
            .unwrap();
        assert_eq!(words, ["hello", "world", ""]);

        let zeroed = FixedArray::<i32, 4>::default();
        assert_eq!(zeroed, [0; 4]);
    }

    #[test]
    fn from_prefix_rejects_too_many_elements() {
        let err = FixedArray::<i32, 2>::from_prefix([1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::TooManyElements { capacity: 2 });

        let exact = FixedArray::<i32, 2>::from_prefix([1, 2]).unwrap();
        assert_eq!(exact, [1, 2]);
    }

    #[test]
    fn from_fn_builds_in_index_order() {
        let a = FixedArray::<usize, 4>::from_fn(|i| i * i);
        assert_eq!(a, [0, 1, 4, 9]);
    }

    #[test]
    fn long_arrays_default_construct() {
        let a = FixedArray::<u8, 64>::default();
        assert!(a.iter().all(|&b| b == 0));
    }

    // ===================
    // Element access
    // ===================

    #[test]
    fn indexing_reads_and_writes() {
        let mut a = FixedArray::new([7, 8, 9]);
        assert_eq!(a[0], 7);
        a[1] = 99;
        assert_eq!(a[1], 99);
        assert_eq!(unsafe { *a.get_unchecked(2) }, 9);
        unsafe { *a.get_unchecked_mut(0) = 70 };
        assert_eq!(a, [70, 99, 9]);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_range_panics() {
        let a = FixedArray::new([1, 2, 3]);
        let _ = a[3];
    }

    #[test]
    fn checked_access_matches_indexing_in_range() {
        let a = FixedArray::new([1, 2, 3, 4]);
        for i in 0..a.len() {
            assert!(core::ptr::eq(a.at(i).unwrap(), &a[i]));
        }
    }

    #[test]
    fn checked_access_fails_at_and_past_n() {
        init_test_logging();
        let mut a = FixedArray::new([1, 2, 3]);

        for index in [3, 4, 99, usize::MAX] {
            assert_eq!(
                a.at(index),
                Err(OutOfRange {
                    operation: "FixedArray::at",
                    index,
                    len: 3
                })
            );
        }
        *a.at_mut(2).unwrap() = 77;
        assert_eq!(a[2], 77);
        assert_eq!(a.at_mut(3).unwrap_err().operation, "FixedArray::at_mut");
    }

    #[test]
    fn checked_access_message_identifies_operation() {
        let a = FixedArray::new([1, 2, 3]);
        let message = a.at(5).unwrap_err().to_string();
        assert!(message.contains("FixedArray::at"));
        assert!(message.contains("out of range"));
    }

    #[test]
    fn checked_access_on_empty_always_fails() {
        let empty: FixedArray<i32, 0> = FixedArray::new([]);
        assert!(empty.at(0).is_err());
    }

    #[test]
    fn first_and_last() {
        let mut a = FixedArray::new([10, 20, 30, 40]);
        assert_eq!(*a.first(), 10);
        assert_eq!(*a.last(), 40);
        *a.first_mut() = 99;
        *a.last_mut() = 77;
        assert_eq!(a, [99, 20, 30, 77]);

        let single = FixedArray::new([42]);
        assert!(core::ptr::eq(single.first(), single.last()));
    }

    #[test]
    fn raw_storage_is_non_null_and_first_slot() {
        let a = FixedArray::new([1, 2, 3]);
        assert_eq!(a.as_ptr(), &a[0] as *const i32);
        assert_eq!(unsafe { *a.as_ptr().add(2) }, 3);

        let mut empty: FixedArray<u64, 0> = FixedArray::new([]);
        assert!(!empty.as_ptr().is_null());
        assert!(!empty.as_mut_ptr().is_null());
    }

    // ===================
    // Cursors
    // ===================

    #[test]
    fn begin_to_end_visits_all() {
        let a = FixedArray::new([1, 2, 3, 4, 5]);
        let mut it = a.begin();
        let mut sum = 0;
        while it != a.end() {
            sum += unsafe { *it.get() };
            it.inc();
        }
        assert_eq!(sum, 15);
        assert_eq!(a.end() - a.begin(), 5);
    }

    #[test]
    fn begin_plus_k_is_kth_element() {
        let a = FixedArray::new([10, 20, 30, 40]);
        for k in 0..a.len() {
            assert_eq!(unsafe { *(a.begin() + k as isize).get() }, a[k]);
        }
    }

    #[test]
    fn reverse_cursors_walk_back() {
        let a = FixedArray::new([1, 2, 3, 4, 5]);
        assert_eq!(unsafe { *a.rbegin().get() }, 5);
        assert_eq!(unsafe { *(a.rbegin() + 4).get() }, 1);
        assert_eq!(unsafe { *a.rbegin().get() }, unsafe { *(a.begin() + 4).get() });
        assert_eq!(a.rend() - a.rbegin(), 5);
        assert_eq!(a.rbegin().base(), a.end());
        assert_eq!(a.rend().base(), a.begin());
    }

    #[test]
    fn empty_array_cursors_coincide() {
        let empty: FixedArray<i32, 0> = FixedArray::new([]);
        assert_eq!(empty.begin(), empty.end());
        assert!(empty.rbegin() == empty.rend());
        assert_eq!(empty.span().count(), 0);
    }

    #[test]
    fn mutable_cursors_write_through() {
        let mut a = FixedArray::new([1, 2, 3]);
        let (first, last) = a.cursors_mut();
        assert_eq!(last - first, 3);
        unsafe { *first.at(1) = 20 };

        let (rfirst, _) = a.rcursors_mut();
        unsafe { *rfirst.get() = 30 };

        unsafe { *a.begin_mut().get() = 10 };
        assert_eq!(a, [10, 20, 30]);
    }

    #[test]
    fn spans_iterate_both_ways() {
        let mut a = FixedArray::new([1, 2, 3]);
        assert_eq!(a.span().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(a.rspan().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

        for (i, v) in a.rspan_mut().enumerate() {
            *v += i as i32 * 100;
        }
        assert_eq!(a, [201, 102, 3]);

        a.span_mut().for_each(|v| *v = 0);
        assert_eq!(a, [0, 0, 0]);
    }

    #[test]
    fn storage_address_survives_fill_and_swap() {
        let mut a = FixedArray::new([1, 2, 3]);
        let mut b = FixedArray::new([7, 8, 9]);
        let before = a.as_ptr();

        a.fill(99);
        assert_eq!(a.as_ptr(), before);
        assert_eq!(unsafe { *a.begin().get() }, 99);

        a.swap(&mut b);
        assert_eq!(a.as_ptr(), before);
        assert_eq!(unsafe { *a.begin().get() }, 7);
    }

    // ===================
    // fill
    // ===================

    #[test]
    fn fill_sets_every_slot() {
        let mut a = FixedArray::new([1, 2, 3, 4, 5]);
        a.fill(0);
        assert_eq!(a, [0; 5]);

        let mut words: FixedArray<String, 3> = FixedArray::default();
        words.fill("hello".to_string());
        assert_eq!(words, ["hello", "hello", "hello"]);
    }

    #[test]
    fn fill_twice_is_idempotent() {
        let mut a = FixedArray::new([1, 2, 3]);
        a.fill(4);
        let once = a;
        a.fill(4);
        assert_eq!(a, once);
    }

    #[test]
    fn fill_on_empty_does_nothing() {
        let mut empty: FixedArray<i32, 0> = FixedArray::new([]);
        empty.fill(99);
        assert!(empty.is_empty());
    }

    #[test]
    fn fill_leaves_partial_state_when_clone_panics() {
        let budget = Rc::new(Cell::new(usize::MAX));
        let mut a = FixedArray::<Flaky, 5>::from_fn(|_| Flaky::new(1, &budget));

        let fill_budget = Rc::new(Cell::new(2));
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            a.fill(Flaky::new(99, &fill_budget));
        }));

        assert!(result.is_err());
        let values: Vec<i32> = a.iter().map(|f| f.value).collect();
        assert_eq!(values, vec![99, 99, 1, 1, 1]);
    }

    #[test]
    fn try_fill_with_stops_at_injected_failure() {
        init_test_logging();
        let mut a = FixedArray::new([1; 5]);
        let mut calls = 0;

        let result = a.try_fill_with(|| {
            calls += 1;
            if calls == 3 { Err("injected") } else { Ok(7) }
        });

        assert_eq!(result, Err("injected"));
        assert_eq!(a, [7, 7, 1, 1, 1]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn try_fill_with_success_assigns_all() {
        let mut a = FixedArray::new([0u8; 3]);
        let mut next = 0;
        let result: Result<(), ()> = a.try_fill_with(|| {
            next += 1;
            Ok(next)
        });
        assert_eq!(result, Ok(()));
        assert_eq!(a, [1, 2, 3]);
    }

    // ===================
    // swap
    // ===================

    #[test]
    fn swap_exchanges_all_elements() {
        let mut a = FixedArray::new([1, 2, 3]);
        let mut b = FixedArray::new([7, 8, 9]);
        let (old_a, old_b) = (a, b);

        a.swap(&mut b);

        for i in 0..3 {
            assert_eq!(a[i], old_b[i]);
            assert_eq!(b[i], old_a[i]);
        }
    }

    #[test]
    fn swap_strings_and_move_only_values() {
        let mut a = FixedArray::new(["hello".to_string(), "world".to_string()]);
        let mut b = FixedArray::new(["foo".to_string(), "bar".to_string()]);
        a.swap(&mut b);
        assert_eq!(a, ["foo", "bar"]);
        assert_eq!(b, ["hello", "world"]);

        let mut c = FixedArray::new([MoveOnly(1), MoveOnly(2)]);
        let mut d = FixedArray::new([MoveOnly(9), MoveOnly(8)]);
        c.swap(&mut d);
        assert_eq!(c[0], MoveOnly(9));
        assert_eq!(d[0], MoveOnly(1));
    }

    #[test]
    fn swap_empty_arrays() {
        let mut a: FixedArray<i32, 0> = FixedArray::new([]);
        let mut b: FixedArray<i32, 0> = FixedArray::new([]);
        a.swap(&mut b);
        assert!(a.is_empty() && b.is_empty());
    }

    // ===================
    // Lifetime of elements
    // ===================

    #[test]
    fn drops_every_element_once_in_index_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let _a = FixedArray::<Logged, 4>::from_fn(|i| Logged {
                id: i as u32,
                log: Rc::clone(&log),
            });
            assert!(log.borrow().is_empty());
        }
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn refill_drops_each_replaced_value() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut a = FixedArray::<Option<Logged>, 3>::from_fn(|i| {
            Some(Logged {
                id: i as u32,
                log: Rc::clone(&log),
            })
        });
        let result: Result<(), ()> = a.try_fill_with(|| Ok(None));
        assert_eq!(result, Ok(()));
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert!(a.iter().all(Option::is_none));
    }

    #[test]
    fn move_only_and_boxed_elements() {
        let mut a = FixedArray::new([MoveOnly(0), MoveOnly(0), MoveOnly(0)]);
        a[0] = MoveOnly(10);
        a[2] = MoveOnly(30);
        assert_eq!(a[0].0, 10);
        assert_eq!(a[2].0, 30);

        let mut boxes: FixedArray<Option<std::boxed::Box<i32>>, 2> = FixedArray::default();
        boxes[1] = Some(std::boxed::Box::new(20));
        assert_eq!(boxes[1].as_deref(), Some(&20));
    }

    #[test]
    fn zero_sized_elements() {
        let a = FixedArray::new([(); 6]);
        assert_eq!(a.end() - a.begin(), 6);
        assert_eq!(a.rspan().count(), 6);
    }

    #[test]
    fn zero_sized_elements_at_the_isize_limit() {
        const MAX: usize = isize::MAX as usize;
        let mut a = FixedArray::new([(); MAX]);
        assert_eq!(a.end() - a.begin(), isize::MAX);
        assert!(a.end() > a.begin());
        assert_eq!(a.span().len(), MAX);

        let (first, last) = a.cursors_mut();
        assert_eq!(last - first, isize::MAX);
    }

    // ===================
    // Iteration and formatting
    // ===================

    #[test]
    fn into_iterator_forms() {
        let mut a = FixedArray::new([1, 2, 3]);
        for v in &mut a {
            *v *= 2;
        }
        let borrowed: i32 = (&a).into_iter().sum();
        assert_eq!(borrowed, 12);
        assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn debug_formats_as_list() {
        let a = FixedArray::new([1, 2, 3]);
        assert_eq!(format!("{a:?}"), "[1, 2, 3]");
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(a.into_inner(), [1, 2, 3]);
    }
}
