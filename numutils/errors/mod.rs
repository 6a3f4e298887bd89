mod any;
mod arith_err;
mod macros;
mod result_ext;

/// Publicly exporting the error stack crate, to prevent every dependent depending on it too.
pub use error_stack;

pub use any::AnyErr;
pub use arith_err::ArithErr;

/// Shorthand for a [`Result`] with a [`error_stack::Report`] as the error variant
pub type RResult<T, C> = Result<T, error_stack::Report<C>>;

pub use result_ext::*;

/// Easily import all useful error items. Useful to put inside a crate prelude.
pub mod prelude {
    #[allow(unused_imports)]
    pub use error_stack::{Report, ResultExt};

    #[allow(unused_imports)]
    pub use super::{AnyErr, ArithErr, NumResultExt, RResult};

    #[allow(unused_imports)]
    pub use crate::anyerr;
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::prelude::*;

    #[track_caller]
    fn failing() -> RResult<(), AnyErr> {
        Err(anyerr!("Failed with {}", 3))
    }

    #[rstest]
    fn test_anyerr_variants() {
        let bare = anyerr!();
        assert_eq!(bare.current_context().to_string(), "AnyErr");

        let msg = anyerr!("Hello world");
        assert!(format!("{:?}", msg).contains("Hello world"));

        let formatted = failing().unwrap_err();
        assert!(format!("{:?}", formatted).contains("Failed with 3"));
    }

    #[rstest]
    fn test_loc_attaches_caller() {
        let report = failing().loc().unwrap_err();
        // The attached location points into this file:
        assert!(format!("{:?}", report).contains("errors/mod.rs"));
    }

    #[rstest]
    fn test_change_context_into_any() {
        let res: RResult<(), ArithErr> = Err(Report::new(ArithErr::Overflow));
        let report = res.change_context(AnyErr).unwrap_err();
        assert!(format!("{:?}", report).contains("arithmetic overflow"));
    }
}
