//! File logger for the tab bar engine.
//!
//! Controlled by the `EXPLORER_TABS_DEBUG_LEVEL` environment variable:
//! - 0 or unset: No debugging
//! - 1: Errors only
//! - 2: Info level (tab/group mutations, drops, detaches)
//! - 3: Debug level (layout passes, selection changes)
//! - 4: Trace level (pointer moves, hover updates)
//!
//! Output goes to `explorer_tabs_debug.log` in the system temp directory. The
//! bar lives inside a host process that owns stdout/stderr, so nothing is
//! written there.
//!
//! [`init_log_bridge`] routes records from the `log` facade into the same file.

use explorer_tabs_config::LogLevel;
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable that selects the file logger level.
pub const DEBUG_LEVEL_ENV: &str = "EXPLORER_TABS_DEBUG_LEVEL";

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Self {
        std::env::var(DEBUG_LEVEL_ENV)
            .ok()
            .map(|val| Self::parse(&val))
            .unwrap_or(DebugLevel::Off)
    }

    /// Parse a numeric level; anything unrecognised means off.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    fn from_log_level(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => DebugLevel::Error,
            log::Level::Info => DebugLevel::Info,
            log::Level::Debug => DebugLevel::Debug,
            log::Level::Trace => DebugLevel::Trace,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DebugLevel::Off => "OFF  ",
            DebugLevel::Error => "ERROR",
            DebugLevel::Info => "INFO ",
            DebugLevel::Debug => "DEBUG",
            DebugLevel::Trace => "TRACE",
        }
    }
}

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("explorer_tabs_debug.log")
}

struct DebugLogger {
    level: DebugLevel,
    file: Option<std::fs::File>,
}

impl DebugLogger {
    fn new() -> Self {
        let level = DebugLevel::from_env();
        let mut logger = DebugLogger { level, file: None };
        if level != DebugLevel::Off {
            logger.open_file();
        }
        logger
    }

    fn open_file(&mut self) {
        if self.file.is_some() {
            return;
        }
        // Failing to open the file just leaves logging disabled
        if let Ok(f) = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
        {
            self.file = Some(f);
            let banner = "=".repeat(80);
            self.write_raw(&format!(
                "\n{}\nexplorer-tabs debug session started at {} (level={:?})\n{}\n",
                banner,
                timestamp(),
                self.level,
                banner
            ));
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn log(&mut self, level: DebugLevel, category: &str, msg: &str) {
        if level == DebugLevel::Off || level > self.level {
            return;
        }
        self.write_raw(&format!(
            "[{}] [{}] [{}] {}\n",
            timestamp(),
            level.label(),
            category,
            msg
        ));
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

fn logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| Mutex::new(DebugLogger::new()))
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Check if debugging is enabled at given level
pub fn is_enabled(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level <= logger().lock().level
}

/// Log a message at specified level
pub fn log(level: DebugLevel, category: &str, msg: &str) {
    logger().lock().log(level, category, msg);
}

/// Log formatted message
pub fn logf(level: DebugLevel, category: &str, args: fmt::Arguments) {
    if is_enabled(level) {
        log(level, category, &format!("{}", args));
    }
}

// ============================================================================
// log crate bridge
// ============================================================================

struct LogBridge {
    filter: log::LevelFilter,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = DebugLevel::from_log_level(record.level());
        let msg = format!("{}", record.args());
        logger().lock().log(level, record.target(), &msg);
    }

    fn flush(&self) {}
}

/// Forward `log` records at or above `level` into the debug file.
///
/// The bridge raises the file logger to match `level`, so a host can enable
/// logging from its settings without setting the environment variable.
/// Only the first call installs the bridge; later calls are ignored.
pub fn init_log_bridge(level: LogLevel) {
    let filter = level.to_level_filter();
    if filter == log::LevelFilter::Off {
        return;
    }

    {
        let mut file_logger = logger().lock();
        let wanted = match filter {
            log::LevelFilter::Off => DebugLevel::Off,
            log::LevelFilter::Error | log::LevelFilter::Warn => DebugLevel::Error,
            log::LevelFilter::Info => DebugLevel::Info,
            log::LevelFilter::Debug => DebugLevel::Debug,
            log::LevelFilter::Trace => DebugLevel::Trace,
        };
        if wanted > file_logger.level {
            file_logger.level = wanted;
            file_logger.open_file();
        }
    }

    if log::set_boxed_logger(Box::new(LogBridge { filter })).is_ok() {
        log::set_max_level(filter);
    }
}

// Convenience macros for logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Error, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Info, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Debug, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Trace, $category, format_args!($($arg)*))
    };
}
