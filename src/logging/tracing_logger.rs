//! # TracingLogger — forwards records to `tracing`
//!
//! Every record becomes one `tracing` event under the `evhub` target with the
//! fields `kind`, `hub`, `topic`, `listener`, `event_id`, `shutdown` and `error`.
//! Filtering is left to the installed subscriber (e.g. `RUST_LOG=evhub=debug`).

use crate::logging::{LogLevel, LogRecord, Logger};

/// Logger backed by the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, r: &LogRecord<'_>) {
        let event_id = r.event.map(|e| e.id);
        let shutdown = r.event.map(|e| e.shutdown);

        match r.level() {
            LogLevel::Debug => tracing::debug!(
                target: "evhub",
                kind = r.kind.as_label(),
                hub = r.hub,
                topic = r.topic,
                listener = r.listener,
                event_id,
                shutdown,
                "{}",
                r.kind.as_label()
            ),
            LogLevel::Info => tracing::info!(
                target: "evhub",
                kind = r.kind.as_label(),
                hub = r.hub,
                topic = r.topic,
                listener = r.listener,
                event_id,
                shutdown,
                "{}",
                r.kind.as_label()
            ),
            LogLevel::Error => tracing::error!(
                target: "evhub",
                kind = r.kind.as_label(),
                hub = r.hub,
                topic = r.topic,
                listener = r.listener,
                event_id,
                shutdown,
                error = r.error.unwrap_or(""),
                "{}",
                r.kind.as_label()
            ),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Debug => tracing::enabled!(target: "evhub", tracing::Level::DEBUG),
            LogLevel::Info => tracing::enabled!(target: "evhub", tracing::Level::INFO),
            LogLevel::Error => tracing::enabled!(target: "evhub", tracing::Level::ERROR),
        }
    }
}
