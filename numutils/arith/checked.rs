use std::fmt::Debug;

use crate::prelude::*;

/// Arithmetic that reports overflow instead of following the native operator semantics.
///
/// Implemented for every primitive integer and float, and for [`crate::Number`].
pub trait CheckedArith: Sized {
    /// `self + rhs`, or the reason it can't be represented.
    fn try_add(self, rhs: Self) -> Result<Self, ArithErr>;

    /// `self * rhs`, or the reason it can't be represented.
    fn try_mul(self, rhs: Self) -> Result<Self, ArithErr>;
}

macro_rules! impl_checked_int {
    ($($ty:ty),*) => {$(
        impl CheckedArith for $ty {
            #[inline]
            fn try_add(self, rhs: Self) -> Result<Self, ArithErr> {
                self.checked_add(rhs).ok_or(ArithErr::Overflow)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> Result<Self, ArithErr> {
                self.checked_mul(rhs).ok_or(ArithErr::Overflow)
            }
        }
    )*};
}

impl_checked_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Non-finite operands are passed through, only finite -> infinite is an error.
macro_rules! impl_checked_float {
    ($($ty:ty),*) => {$(
        impl CheckedArith for $ty {
            #[inline]
            fn try_add(self, rhs: Self) -> Result<Self, ArithErr> {
                let out = self + rhs;
                if out.is_finite() || !(self.is_finite() && rhs.is_finite()) {
                    Ok(out)
                } else {
                    Err(ArithErr::NonFinite)
                }
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> Result<Self, ArithErr> {
                let out = self * rhs;
                if out.is_finite() || !(self.is_finite() && rhs.is_finite()) {
                    Ok(out)
                } else {
                    Err(ArithErr::NonFinite)
                }
            }
        }
    )*};
}

impl_checked_float!(f32, f64);

/// Add two numbers, returning an [`ArithErr`] report when the result isn't representable.
pub fn checked_add_numbers<T: CheckedArith + Copy + Debug>(a: T, b: T) -> RResult<T, ArithErr> {
    a.try_add(b).map_err(|e| {
        debug!(?a, ?b, "checked add failed: {}", e);
        Report::new(e).attach_printable(format!("{:?} + {:?}", a, b))
    })
}

/// Multiply two numbers, returning an [`ArithErr`] report when the result isn't representable.
pub fn checked_multiply_numbers<T: CheckedArith + Copy + Debug>(
    a: T,
    b: T,
) -> RResult<T, ArithErr> {
    a.try_mul(b).map_err(|e| {
        debug!(?a, ?b, "checked multiply failed: {}", e);
        Report::new(e).attach_printable(format!("{:?} * {:?}", a, b))
    })
}
