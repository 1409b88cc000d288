/// Builds a [`FixedArray`](crate::FixedArray) with array-literal syntax.
///
/// ```
/// use stlish_array::{FixedArray, fixed_array};
///
/// let listed: FixedArray<i32, 3> = fixed_array![1, 2, 3];
/// let repeated = fixed_array![0u8; 4];
///
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(repeated.len(), 4);
/// ```
#[macro_export]
macro_rules! fixed_array {
    ($value:expr; $n:expr) => {
        $crate::FixedArray::new([$value; $n])
    };
    ($($item:expr),* $(,)?) => {
        $crate::FixedArray::new([$($item),*])
    };
}
