use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::{Dispatch, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{time::OffsetTime, MakeWriter};

use super::config::{CaptureWriter, LogConfig, LogOutput};
use crate::prelude::*;

// Keeps the registered logger, and with it the stdout flush guard, alive until exit.
static REGISTERED: Lazy<Mutex<Option<GlobalLog>>> = Lazy::new(Mutex::default);

/// A `tracing` subscriber built from a [`LogConfig`], either installed for the whole process or used for a scope.
///
/// The crate itself only logs at `debug` (failed checked arithmetic) and `trace` ([`crate::Number`] promotion).
///
/// ```
/// use numutils::log::{GlobalLog, LogConfig};
/// use tracing::Level;
///
/// let log = GlobalLog::new(LogConfig::stdout(Level::DEBUG));
/// log.register_global().unwrap();
/// ```
pub struct GlobalLog {
    dispatch: Dispatch,
    _guard: Option<WorkerGuard>,
}

impl GlobalLog {
    /// Build the subscriber, nothing is installed yet.
    pub fn new(config: LogConfig) -> Self {
        match config.output {
            LogOutput::Stdout => {
                let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
                Self {
                    dispatch: build_dispatch(&config, writer, true),
                    _guard: Some(guard),
                }
            }
            LogOutput::Capture(write) => Self {
                dispatch: build_dispatch(&config, CaptureWriter(write), false),
                _guard: None,
            },
        }
    }

    /// Install pretty stdout logging for the process in one call.
    pub fn setup_quick_stdout_global_logging(level: Level) -> RResult<(), AnyErr> {
        GlobalLog::new(LogConfig::stdout(level)).register_global()
    }

    /// Install as the process-wide subscriber. Errors if any global subscriber is already set.
    pub fn register_global(self) -> RResult<(), AnyErr> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .change_context(AnyErr)
            .attach_printable("Already registered!")?;
        REGISTERED.lock().replace(self);
        Ok(())
    }

    /// Run `f` with this subscriber as the current thread's default.
    pub fn with_tmp_global<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

fn build_dispatch<W>(config: &LogConfig, writer: W, ansi: bool) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(false)
        .with_file(config.include_loc)
        .with_line_number(config.include_loc)
        .with_ansi(ansi)
        .with_writer(writer);

    // pretty/compact and the timer each change the subscriber type, so erase per arm.
    match (config.pretty, config.include_ts) {
        (true, true) => Dispatch::new(builder.pretty().with_timer(local_timer()).finish()),
        (true, false) => Dispatch::new(builder.pretty().without_time().finish()),
        (false, true) => Dispatch::new(builder.compact().with_timer(local_timer()).finish()),
        (false, false) => Dispatch::new(builder.compact().without_time().finish()),
    }
}

type TimeFormat = &'static [time::format_description::BorrowedFormatItem<'static>];

fn local_timer() -> OffsetTime<TimeFormat> {
    let offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    OffsetTime::new(
        offset,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
    )
}
