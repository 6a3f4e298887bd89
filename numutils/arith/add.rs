use std::ops::Add;

/// Add two numbers and return the result.
///
/// Overflow follows the native `+` of `T`: integer overflow panics in debug builds and wraps in release,
/// floats follow IEEE 754. Use [`super::checked_add_numbers`] to get overflow back as an error.
#[inline]
pub fn add_numbers<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
