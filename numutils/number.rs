use std::{
    fmt,
    ops::{Add, Mul},
};

use serde::{Deserialize, Serialize};

use crate::{arith::CheckedArith, prelude::*};

/// A number that is either an integer or a real, resolved at runtime.
///
/// Integer arithmetic stays integer while it fits in an `i64`, anything else (mixed operands, overflow) is done in `f64`.
/// Equality is exact across the two variants: `Int(5) == Float(5.0)`, but `Int(i64::MAX) != Float(2^63)`.
///
/// Serializes untagged, a JSON integer deserializes into `Int`, any other JSON number into `Float`.
/// JSON has no NaN or infinity, so non-finite floats serialize as `null` and don't deserialize back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// A whole number.
    Int(i64),
    /// A real number.
    Float(f64),
}

impl Number {
    /// The value as an `f64`, lossy for integers beyond 2^53.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// True when the integer variant.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// True when the float variant.
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                int_eq_float(i, f)
            }
        }
    }
}

/// Exact comparison, no rounding of `i` into an `f64`.
fn int_eq_float(i: i64, f: f64) -> bool {
    // [-2^63, 2^63), the range where `f as i64` doesn't saturate.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) && f as i64 == i
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" on whole floats.
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(v) => Number::Int(v),
                None => {
                    trace!(a, b, "int add overflowed, promoting to float");
                    Number::Float(a as f64 + b as f64)
                }
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_mul(b) {
                Some(v) => Number::Int(v),
                None => {
                    trace!(a, b, "int multiply overflowed, promoting to float");
                    Number::Float(a as f64 * b as f64)
                }
            },
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl CheckedArith for Number {
    fn try_add(self, rhs: Self) -> Result<Self, ArithErr> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.try_add(b).map(Number::Int),
            (a, b) => a.as_f64().try_add(b.as_f64()).map(Number::Float),
        }
    }

    fn try_mul(self, rhs: Self) -> Result<Self, ArithErr> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.try_mul(b).map(Number::Int),
            (a, b) => a.as_f64().try_mul(b.as_f64()).map(Number::Float),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $target:ty, $($ty:ty),*) => {$(
        impl From<$ty> for Number {
            fn from(v: $ty) -> Self {
                Number::$variant(v as $target)
            }
        }
    )*};
}

impl_from!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
impl_from!(Float, f64, f32, f64);
