//! Range algorithms over cursor spans.
//!
//! These take [`Span`]s, so the range itself was vouched for when the span was
//! created and the functions here are safe to call. They only rely on the
//! [`Cursor`] contract. When every cursor involved advertises
//! [`Contiguous`](crate::tag::Contiguous), `copy` and `sort_by` switch to a
//! direct memory operation. A reversed span is never contiguous, so it always
//! takes the element-by-element path.

use core::{cmp::Ordering, ptr, slice};

use crate::cursor::{Cursor, CursorMut};
use crate::span::Span;

/// Reads the element under `cursor`.
///
/// # Safety
///
/// `cursor` must name a live element and no exclusive reference to it may be
/// alive while the result is.
#[inline(always)]
unsafe fn read<'r, I: Cursor>(cursor: &I) -> &'r I::Value {
    // SAFETY: forwarded to the caller.
    unsafe { &*cursor.as_ptr() }
}

/// First cursor in `span` whose element equals `value`.
pub fn find<I>(span: Span<I>, value: &I::Value) -> Option<I>
where
    I: Cursor,
    I::Value: PartialEq,
{
    let (mut first, last) = span.into_bounds();
    while first != last {
        // SAFETY: `first` lies inside the span.
        if unsafe { read(&first) } == value {
            return Some(first);
        }
        first.advance(1);
    }
    None
}

/// Number of elements equal to `value`.
pub fn count<I>(span: Span<I>, value: &I::Value) -> usize
where
    I: Cursor,
    I::Value: PartialEq,
{
    let (mut first, last) = span.into_bounds();
    let mut n = 0;
    while first != last {
        // SAFETY: `first` lies inside the span.
        if unsafe { read(&first) } == value {
            n += 1;
        }
        first.advance(1);
    }
    n
}

/// Left fold over the span.
pub fn accumulate<I, B>(span: Span<I>, init: B, mut f: impl FnMut(B, &I::Value) -> B) -> B
where
    I: Cursor,
{
    let (mut first, last) = span.into_bounds();
    let mut acc = init;
    while first != last {
        // SAFETY: `first` lies inside the span.
        acc = f(acc, unsafe { read(&first) });
        first.advance(1);
    }
    acc
}

/// Element-wise equality; spans of different lengths are unequal.
pub fn equal<I, J>(a: Span<I>, b: Span<J>) -> bool
where
    I: Cursor,
    J: Cursor,
    I::Value: PartialEq<J::Value>,
{
    if a.len() != b.len() {
        return false;
    }
    let (mut x, last) = a.into_bounds();
    let (mut y, _) = b.into_bounds();
    while x != last {
        // SAFETY: both cursors lie inside their spans, which have equal length.
        if unsafe { read(&x) != read(&y) } {
            return false;
        }
        x.advance(1);
        y.advance(1);
    }
    true
}

/// Lexicographic comparison with a partial element order.
///
/// Stops at the first pair `compare` does not call equal; if one span is a
/// prefix of the other, the shorter one is less.
pub fn lexicographical_compare_by<I, J>(
    a: Span<I>,
    b: Span<J>,
    mut compare: impl FnMut(&I::Value, &J::Value) -> Option<Ordering>,
) -> Option<Ordering>
where
    I: Cursor,
    J: Cursor,
{
    let (mut x, x_last) = a.into_bounds();
    let (mut y, y_last) = b.into_bounds();
    loop {
        match (x == x_last, y == y_last) {
            (true, true) => return Some(Ordering::Equal),
            (true, false) => return Some(Ordering::Less),
            (false, true) => return Some(Ordering::Greater),
            (false, false) => {}
        }
        // SAFETY: neither cursor has reached its end.
        match compare(unsafe { read(&x) }, unsafe { read(&y) }) {
            Some(Ordering::Equal) => {}
            decided => return decided,
        }
        x.advance(1);
        y.advance(1);
    }
}

/// Lexicographic comparison with a total element order.
pub fn lexicographical_compare<I, J>(a: Span<I>, b: Span<J>) -> Ordering
where
    I: Cursor,
    J: Cursor<Value = I::Value>,
    I::Value: Ord,
{
    lexicographical_compare_by(a, b, |x, y| Some(x.cmp(y))).unwrap_or(Ordering::Equal)
}

/// Assigns a clone of `value` to every element, front to back.
///
/// If a clone panics, elements already assigned keep the new value, the
/// element being assigned and everything after it keep their old value.
pub fn fill<I>(span: Span<I>, value: &I::Value)
where
    I: CursorMut,
    I::Value: Clone,
{
    let (mut first, last) = span.into_bounds();
    while first != last {
        let fresh = value.clone();
        // SAFETY: `first` lies inside the span, which grants exclusive access.
        unsafe { *first.as_mut_ptr() = fresh };
        first.advance(1);
    }
}

/// Copies `src` into the front of `dest`, as many elements as fit.
///
/// Returns the cursor in `dest` just past the last element written.
pub fn copy<I, O>(src: Span<I>, dest: Span<O>) -> O
where
    I: Cursor,
    O: CursorMut<Value = I::Value>,
    I::Value: Copy,
{
    let n = src.len().min(dest.len());
    let (from, _) = src.into_bounds();
    let (to, _) = dest.into_bounds();

    if I::CATEGORY.is_contiguous() && O::CATEGORY.is_contiguous() {
        tracing::trace!(n, "copy: contiguous ranges, single memory copy");
        // SAFETY: both spans hold at least `n` live elements laid out in
        // address order; `ptr::copy` tolerates overlap.
        unsafe { ptr::copy(from.as_ptr(), to.as_mut_ptr(), n) };
    } else {
        tracing::trace!(n, "copy: element-wise");
        for i in 0..n as isize {
            // SAFETY: `i < n`, so both cursors stay inside their spans.
            unsafe { *to.offset(i).as_mut_ptr() = *from.offset(i).as_ptr() };
        }
    }
    to.offset(n as isize)
}

/// Swaps elements pairwise, front to back, as many pairs as the shorter span
/// holds. Returns the number of pairs swapped.
///
/// The two spans may be the same range, in which case nothing changes.
pub fn swap_ranges<I, J>(a: Span<I>, b: Span<J>) -> usize
where
    I: CursorMut,
    J: CursorMut<Value = I::Value>,
{
    let n = a.len().min(b.len());
    let (mut x, _) = a.into_bounds();
    let (mut y, _) = b.into_bounds();
    for _ in 0..n {
        // SAFETY: both cursors lie inside their spans; `ptr::swap` allows the
        // two pointers to be equal.
        unsafe { ptr::swap(x.as_mut_ptr(), y.as_mut_ptr()) };
        x.advance(1);
        y.advance(1);
    }
    n
}

/// Reverses the span in place.
pub fn reverse<I: CursorMut>(span: Span<I>) {
    let (mut first, mut last) = span.into_bounds();
    while first != last {
        last.retreat(1);
        if first == last {
            break;
        }
        // SAFETY: `first` and `last` are distinct elements inside the span.
        unsafe { ptr::swap(first.as_mut_ptr(), last.as_mut_ptr()) };
        first.advance(1);
    }
}

/// Sorts the span ascending. Not stable.
pub fn sort<I>(span: Span<I>)
where
    I: CursorMut,
    I::Value: Ord,
{
    sort_by(span, Ord::cmp);
}

/// Sorts the span with a comparator. Not stable.
///
/// Contiguous spans are sorted as a slice; every other span is heapsorted
/// through the cursor, which only needs random access.
pub fn sort_by<I>(span: Span<I>, mut compare: impl FnMut(&I::Value, &I::Value) -> Ordering)
where
    I: CursorMut,
{
    let len = span.len();
    if len < 2 {
        return;
    }
    let (first, _) = span.into_bounds();

    if I::CATEGORY.is_contiguous() {
        tracing::trace!(len, "sort_by: contiguous range, sorting as a slice");
        // SAFETY: a contiguous span of `len` elements is exactly a slice starting
        // at `first`, and the span grants exclusive access.
        let items = unsafe { slice::from_raw_parts_mut(first.as_mut_ptr(), len) };
        items.sort_unstable_by(compare);
        return;
    }

    tracing::trace!(len, "sort_by: heapsort through cursor");
    let mut less = |a: usize, b: usize| {
        // SAFETY: callers below only pass indices `< len`.
        let order =
            unsafe { compare(read(&first.offset(a as isize)), read(&first.offset(b as isize))) };
        order == Ordering::Less
    };
    let swap = |a: usize, b: usize| {
        // SAFETY: as above.
        unsafe {
            ptr::swap(
                first.offset(a as isize).as_mut_ptr(),
                first.offset(b as isize).as_mut_ptr(),
            )
        }
    };

    for root in (0..len / 2).rev() {
        sift_down(root, len, &mut less, &swap);
    }
    for end in (1..len).rev() {
        swap(0, end);
        sift_down(0, end, &mut less, &swap);
    }
}

fn sift_down(
    mut root: usize,
    end: usize,
    less: &mut impl FnMut(usize, usize) -> bool,
    swap: &impl Fn(usize, usize),
) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && less(child, child + 1) {
            child += 1;
        }
        if !less(root, child) {
            return;
        }
        swap(root, child);
        root = child;
    }
}
