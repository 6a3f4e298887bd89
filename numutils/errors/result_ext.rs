use error_stack::Report;

/// Further extensions on top of [`error_stack::ResultExt`].
pub trait NumResultExt {
    /// The [`error_stack::Context`] type of the [`Result`].
    type Context: error_stack::Context;

    /// Type of the [`Ok`] value in the [`Result`]
    type Ok;

    /// Attach the current location to the stacktrace of the [`Report`] inside the [`Result`] if it's in error state.
    /// Useful when the same error is propagating through a middleman fn, and the middleman specific location matters.
    #[track_caller]
    fn loc(self) -> Result<Self::Ok, Report<Self::Context>>;
}

impl<T, C: error_stack::Context> NumResultExt for Result<T, Report<C>> {
    type Context = C;
    type Ok = T;

    #[track_caller]
    fn loc(self) -> Result<T, Report<C>> {
        match self {
            Ok(ok) => Ok(ok),
            Err(report) => {
                Err(report.attach_printable(format!("at {}", std::panic::Location::caller())))
            }
        }
    }
}
