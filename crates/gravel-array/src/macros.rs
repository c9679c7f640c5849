//! The `array!` construction macro.

/// Creates an [`Array`](crate::Array) containing the arguments.
///
/// Two forms, mirroring array expressions:
///
/// - a list of elements: `array![1, 2, 3]`;
/// - a repeated element and count: `array![0u8; 64]` (the element is
///   cloned, so the count need not be a constant).
///
/// ```
/// use gravel_array::array;
///
/// let a = array![1, 2, 3];
/// assert_eq!(a, [1, 2, 3]);
///
/// let b = array![7u32; 5];
/// assert_eq!(b.len(), 5);
/// ```
///
/// # Panics
///
/// Panics when the backing allocation fails.
#[macro_export]
macro_rules! array {
    () => (
        $crate::Array::new()
    );
    ($value:expr; $count:expr) => (
        match $crate::Array::from_elem($count, &$value) {
            Ok(array) => array,
            Err(err) => panic!("array! allocation failed: {err}"),
        }
    );
    ($($x:expr),+ $(,)?) => (
        $crate::Array::from([$($x),+])
    );
}
