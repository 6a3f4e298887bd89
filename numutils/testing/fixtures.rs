// rstest expands the fixture into undocumented helper items.
#![allow(missing_docs)]

use tracing::Level;

use crate::log::GlobalLog;
use crate::testing::prelude::*;

/// Include this in a test to turn on logging globally.
///
/// Registration failing because something else got there first is fine, logs still go somewhere.
#[fixture]
#[once]
pub fn logging(#[default(Level::TRACE)] level: Level) {
    if let Err(e) = GlobalLog::setup_quick_stdout_global_logging(level) {
        debug!("logging fixture skipped registration: {:?}", e);
    }
}
