//! Logger bound to a hub/topic/listener context.
//!
//! ```text
//! Hub    ── LogScope{hub}
//! Topic  ── LogScope{hub, topic}
//! Listener ─ LogScope{hub, topic, listener}
//! ```
//! Each component logs through its own scope, so records always carry the
//! full context without the caller threading names around.

use std::sync::Arc;

use crate::events::EventMeta;
use crate::logging::{LogKind, LogRecord, Logger};

#[derive(Clone)]
pub(crate) struct LogScope {
    logger: Arc<dyn Logger>,
    hub: Arc<str>,
    topic: Arc<str>,
    listener: Arc<str>,
}

impl LogScope {
    pub(crate) fn for_hub(logger: Arc<dyn Logger>, hub: Arc<str>) -> Self {
        Self {
            logger,
            hub,
            topic: Arc::from(""),
            listener: Arc::from(""),
        }
    }

    pub(crate) fn for_topic(&self, topic: Arc<str>) -> Self {
        Self {
            logger: Arc::clone(&self.logger),
            hub: Arc::clone(&self.hub),
            topic,
            listener: Arc::from(""),
        }
    }

    pub(crate) fn for_listener(&self, listener: Arc<str>) -> Self {
        Self {
            logger: Arc::clone(&self.logger),
            hub: Arc::clone(&self.hub),
            topic: Arc::clone(&self.topic),
            listener,
        }
    }

    pub(crate) fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// Logs `kind` with this scope's context.
    pub(crate) fn log(&self, kind: LogKind) {
        self.emit(kind, &self.listener, None, None);
    }

    pub(crate) fn error(&self, kind: LogKind, error: &str) {
        self.emit(kind, &self.listener, None, Some(error));
    }

    /// Logs `kind` about a named listener (topic-level records).
    pub(crate) fn log_listener(&self, kind: LogKind, listener: &str) {
        self.emit(kind, listener, None, None);
    }

    pub(crate) fn error_listener(&self, kind: LogKind, listener: &str, error: &str) {
        self.emit(kind, listener, None, Some(error));
    }

    /// Logs `kind` for an event; builds the record only if the level is enabled.
    pub(crate) fn log_event<K>(&self, kind: LogKind, event: &crate::Event<K>) {
        if self.logger.enabled(kind.level()) {
            let meta = event.meta();
            self.emit(kind, &self.listener, Some(&meta), None);
        }
    }

    pub(crate) fn error_event(&self, kind: LogKind, event: &EventMeta, error: &str) {
        self.emit(kind, &self.listener, Some(event), Some(error));
    }

    fn emit(&self, kind: LogKind, listener: &str, event: Option<&EventMeta>, error: Option<&str>) {
        if !self.logger.enabled(kind.level()) {
            return;
        }
        self.logger.log(&LogRecord {
            kind,
            hub: &self.hub,
            topic: &self.topic,
            listener,
            event,
            error,
        });
    }
}
