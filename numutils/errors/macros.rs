/// A macro for building `AnyErr` reports easily, with or without a (formatted) message attached.
#[macro_export]
macro_rules! anyerr {
    () => {{
        use $crate::errors::{error_stack::Report, AnyErr};
        Report::new(AnyErr)
    }};

    ($str:expr) => {{
        use $crate::errors::{error_stack::Report, AnyErr};
        Report::new(AnyErr).attach_printable($str)
    }};

    ($str:expr, $($arg:expr),*) => {{
        use $crate::errors::{error_stack::Report, AnyErr};
        Report::new(AnyErr).attach_printable(format!($str, $($arg),*))
    }};
}
