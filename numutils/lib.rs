#![allow(clippy::module_inception)]
#![warn(clippy::disallowed_types)]
#![warn(missing_docs)]

//! numutils - Small pure numeric helpers: addition and multiplication over integers, floats and dynamic numbers.
//!
//! ```
//! use numutils::{add_numbers, multiply_numbers, Number};
//!
//! assert_eq!(add_numbers(2, 3), 5);
//! assert_eq!(multiply_numbers(-2.0, 3.0), -6.0);
//! assert_eq!(add_numbers(Number::Int(2), Number::Float(0.5)), Number::Float(2.5));
//! ```

mod prelude;

/// Pure arithmetic helpers, plain and checked.
pub mod arith;
/// Error handling utilities.
pub mod errors;
/// Logging utilities
pub mod log;
mod number;
#[cfg(feature = "test")]
/// Shared rstest fixtures for test modules.
pub mod testing;

pub use arith::{
    add_numbers, checked_add_numbers, checked_multiply_numbers, multiply_numbers, CheckedArith,
};
pub use number::Number;
