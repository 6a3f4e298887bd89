use std::ops::Mul;

/// Multiply two numbers and return the result.
///
/// Same overflow profile as [`super::add_numbers`], see [`super::checked_multiply_numbers`] for the checked form.
#[inline]
pub fn multiply_numbers<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}
