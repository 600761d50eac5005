//! # Logger trait and the built-in loggers that need no extra backend.
//!
//! The hub performs no I/O of its own: every lifecycle point is reported as a
//! [`LogRecord`] to the [`Logger`] the hub was created with.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use evhub::{DiscardLogger, Hub, LevelFilter, LogLevel, TracingLogger};
//!
//! // quiet hub for tests
//! let quiet = Hub::new("test", Arc::new(DiscardLogger));
//!
//! // only structural changes and failures
//! let hub = Hub::new("app", Arc::new(LevelFilter::new(LogLevel::Info, TracingLogger)));
//! assert_eq!(hub.name(), "app");
//! ```

use crate::events::EventMeta;
use crate::logging::{LogKind, LogLevel};

/// One structured log record.
///
/// Empty strings mean "not applicable" (e.g. `listener` for hub-level records).
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub kind: LogKind,
    pub hub: &'a str,
    pub topic: &'a str,
    pub listener: &'a str,
    /// The event being published, handled or used as a shutdown sentinel.
    pub event: Option<&'a EventMeta>,
    /// Failure details (panic message, duplicate position, ...).
    pub error: Option<&'a str>,
}

impl LogRecord<'_> {
    #[inline]
    pub fn level(&self) -> LogLevel {
        self.kind.level()
    }
}

/// Structured logging collaborator.
///
/// ### Implementation requirements
/// - Called synchronously from publishers and listener tasks: keep it cheap.
/// - Must not panic.
pub trait Logger: Send + Sync + 'static {
    /// Records one lifecycle point.
    fn log(&self, record: &LogRecord<'_>);

    /// Returns `false` when records of `level` would be dropped anyway.
    ///
    /// Lets callers skip building per-event records. Default: always `true`.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }
}

/// Logger that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardLogger;

impl Logger for DiscardLogger {
    fn log(&self, _record: &LogRecord<'_>) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Forwards records at or above a minimum level to another logger.
#[derive(Debug, Clone)]
pub struct LevelFilter<L> {
    min: LogLevel,
    target: L,
}

impl<L: Logger> LevelFilter<L> {
    pub fn new(min: LogLevel, target: L) -> Self {
        Self { min, target }
    }

    pub fn target(&self) -> &L {
        &self.target
    }

    pub fn min_level(&self) -> LogLevel {
        self.min
    }
}

impl<L: Logger> Logger for LevelFilter<L> {
    fn log(&self, record: &LogRecord<'_>) {
        if record.level() >= self.min {
            self.target.log(record);
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min && self.target.enabled(level)
    }
}
