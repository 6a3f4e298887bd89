mod config;
mod global;

pub use config::{LogConfig, LogOutput};
pub use global::GlobalLog;

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;
    use parking_lot::Mutex;
    use rstest::*;
    use tracing::{debug, info, trace, Level};

    use super::*;
    use crate::{checked_add_numbers, Number};

    fn lines(logs: &Mutex<Vec<String>>) -> Vec<String> {
        logs.lock().clone()
    }

    #[rstest]
    fn test_capture_respects_level() {
        static LOGS: Lazy<Mutex<Vec<String>>> = Lazy::new(Mutex::default);

        let log = GlobalLog::new(LogConfig::capture(Level::DEBUG, |line| {
            LOGS.lock()
                .push(String::from_utf8_lossy(line).trim().to_string());
        }));

        log.with_tmp_global(|| {
            trace!("TLOG");
            debug!("DLOG");
            info!("ILOG");
        });

        let out = lines(&LOGS);
        assert_eq!(out.len(), 2, "{:?}", out);
        assert!(out[0].contains("DEBUG"), "{}", out[0]);
        assert!(out[0].ends_with("DLOG"), "{}", out[0]);
        assert!(out[1].contains("INFO"), "{}", out[1]);
        assert!(out[1].ends_with("ILOG"), "{}", out[1]);
    }

    #[rstest]
    fn test_capture_records_crate_events_with_location() {
        static LOGS: Lazy<Mutex<Vec<String>>> = Lazy::new(Mutex::default);

        let config = LogConfig {
            include_loc: true,
            ..LogConfig::capture(Level::TRACE, |line| {
                LOGS.lock()
                    .push(String::from_utf8_lossy(line).trim().to_string());
            })
        };
        let log = GlobalLog::new(config);

        log.with_tmp_global(|| {
            assert!(checked_add_numbers(i32::MAX, 1).is_err());
            assert!((Number::Int(i64::MAX) * Number::Int(3)).is_float());
        });

        let out = lines(&LOGS);
        assert_eq!(out.len(), 2, "{:?}", out);
        assert!(out[0].contains("checked add failed"), "{}", out[0]);
        assert!(out[0].contains("checked.rs"), "{}", out[0]);
        assert!(out[1].contains("promoting to float"), "{}", out[1]);
    }

    #[rstest]
    fn test_pretty_timestamped_capture_filters_debug() {
        static LOGS: Lazy<Mutex<Vec<String>>> = Lazy::new(Mutex::default);

        let config = LogConfig {
            pretty: true,
            include_ts: true,
            ..LogConfig::capture(Level::INFO, |line| {
                LOGS.lock()
                    .push(String::from_utf8_lossy(line).to_string());
            })
        };
        let log = GlobalLog::new(config);

        log.with_tmp_global(|| {
            assert!(checked_add_numbers(u8::MAX, 1).is_err());
        });
        assert!(lines(&LOGS).is_empty());

        log.with_tmp_global(|| info!("ILOG"));
        let joined = lines(&LOGS).concat();
        assert!(joined.contains("ILOG"), "{}", joined);
    }

    #[rstest]
    fn test_register_global_only_once() {
        // Whichever call comes first may win, the second can never succeed:
        let _ = GlobalLog::setup_quick_stdout_global_logging(Level::INFO);
        assert!(GlobalLog::setup_quick_stdout_global_logging(Level::INFO).is_err());
    }
}
