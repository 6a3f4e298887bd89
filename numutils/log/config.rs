use tracing::Level;

/// Where formatted log lines end up.
#[derive(Clone, Copy)]
pub enum LogOutput {
    /// Colored, through a non-blocking stdout writer.
    Stdout,
    /// Each formatted line handed as raw bytes to the fn, uncolored. Mostly for asserting on logs in tests.
    Capture(fn(&[u8])),
}

/// How a [`super::GlobalLog`] formats and filters.
#[derive(Clone, Copy)]
pub struct LogConfig {
    /// Most verbose level let through, e.g. `Level::DEBUG` keeps debug and above.
    pub level: Level,
    /// Destination of the lines.
    pub output: LogOutput,
    /// Multi-line output instead of one line per event.
    pub pretty: bool,
    /// Prefix each line with the source file and line.
    pub include_loc: bool,
    /// Prefix each line with a local `HH:MM:SS.mmm` timestamp.
    pub include_ts: bool,
}

impl LogConfig {
    /// Pretty stdout, no location or timestamp.
    pub fn stdout(level: Level) -> Self {
        Self {
            level,
            output: LogOutput::Stdout,
            pretty: true,
            include_loc: false,
            include_ts: false,
        }
    }

    /// Compact single lines into `write`, no location or timestamp.
    pub fn capture(level: Level, write: fn(&[u8])) -> Self {
        Self {
            level,
            output: LogOutput::Capture(write),
            pretty: false,
            include_loc: false,
            include_ts: false,
        }
    }
}

/// Adapts a [`LogOutput::Capture`] fn to the writer traits the fmt subscriber wants.
#[derive(Clone, Copy)]
pub(crate) struct CaptureWriter(pub(crate) fn(&[u8]));

impl std::io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        (self.0)(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        *self
    }
}
