#![deny(missing_docs)]
//! Logging utilities shared by the unzip tool crates.
//!
//! Provides the `unzip_*` macros used at every call site and a test-only
//! initializer for the global logger. The macros forward to the `log` facade,
//! re-exported here so callers do not need their own `log` dependency.

use std::sync::Once;

#[doc(hidden)]
pub use log as __log;

/// Logs a trace-level message.
#[macro_export]
macro_rules! unzip_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message.
#[macro_export]
macro_rules! unzip_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs an info-level message.
#[macro_export]
macro_rules! unzip_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! unzip_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message.
#[macro_export]
macro_rules! unzip_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

static TEST_INIT: Once = Once::new();

/// Installs a terminal logger for tests.
///
/// Safe to call from every test; only the first call in a process has an effect,
/// and it quietly gives way if some other logger is already registered.
pub fn initialize_for_tests() {
    TEST_INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
