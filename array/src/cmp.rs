//! Equality and lexicographic ordering between arrays, and the free [`swap`].
//!
//! Comparisons between two arrays walk both through their cursor spans, so
//! they agree with the [`algo`] functions element for element. Comparing with
//! a plain `[U; N]` goes through slice equality.

use core::cmp::Ordering;

use stlish_cursor::algo;

use crate::FixedArray;

impl<T, U, const N: usize> PartialEq<FixedArray<U, N>> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &FixedArray<U, N>) -> bool {
        algo::equal(self.span(), other.span())
    }
}

impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd, const N: usize> PartialOrd for FixedArray<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        algo::lexicographical_compare_by(self.span(), other.span(), T::partial_cmp)
    }
}

impl<T: Ord, const N: usize> Ord for FixedArray<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        algo::lexicographical_compare(self.span(), other.span())
    }
}

/// Exchanges the contents of two arrays of the same length.
///
/// ```
/// use stlish_array::{FixedArray, swap};
///
/// let mut a = FixedArray::new([1, 2]);
/// let mut b = FixedArray::new([3, 4]);
/// swap(&mut a, &mut b);
/// assert_eq!((a, b), (FixedArray::new([3, 4]), FixedArray::new([1, 2])));
/// ```
#[inline]
pub fn swap<T, const N: usize>(a: &mut FixedArray<T, N>, b: &mut FixedArray<T, N>) {
    a.swap(b);
}
