//! # LogWriter — simple record printer
//!
//! A minimal logger that prints records to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [topic-registered] hub="H" topic="orders"
//! [subscribed] hub="H" topic="orders" listener="L1"
//! [handle-failed] hub="H" topic="orders" listener="L1" event={"id":2,...} err="boom"
//! [listener-closed] hub="H" topic="orders" listener="L1"
//! [hub-closed] hub="H"
//! ```

use crate::logging::{LogKind, LogLevel, LogRecord, Logger};

/// Stdout printer. Debug-level records are skipped unless `verbose` is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter {
    verbose: bool,
}

impl LogWriter {
    /// Construct a new [`LogWriter`] printing info and error records.
    #[must_use]
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Construct a [`LogWriter`] that also prints per-event debug records.
    #[must_use]
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Logger for LogWriter {
    fn log(&self, r: &LogRecord<'_>) {
        let (hub, topic, lsn) = (r.hub, r.topic, r.listener);
        match r.kind {
            LogKind::HubCloseBegin => println!("[hub-closing] hub={hub:?}"),
            LogKind::HubCloseOk => println!("[hub-closed] hub={hub:?}"),
            LogKind::TopicRegisterBegin => {
                println!("[topic-registering] hub={hub:?} topic={topic:?}")
            }
            LogKind::TopicRegisterOk => println!("[topic-registered] hub={hub:?} topic={topic:?}"),
            LogKind::ListenerSubOk => {
                println!("[subscribed] hub={hub:?} topic={topic:?} listener={lsn:?}")
            }
            LogKind::ListenerUnsubOk => {
                println!("[unsubscribed] hub={hub:?} topic={topic:?} listener={lsn:?}")
            }
            LogKind::ListenerCloseBegin => {
                println!("[listener-closing] hub={hub:?} topic={topic:?} listener={lsn:?}")
            }
            LogKind::ListenerCloseOk => {
                println!("[listener-closed] hub={hub:?} topic={topic:?} listener={lsn:?}")
            }
            LogKind::ListenerSubErr
            | LogKind::ListenerUnsubErr
            | LogKind::TopicRegisterErr
            | LogKind::EventSendErr
            | LogKind::EventHandleErr => {
                println!(
                    "[{}] hub={hub:?} topic={topic:?} listener={lsn:?} event={} err={:?}",
                    r.kind.as_label(),
                    r.event.map(|e| e.to_string()).unwrap_or_default(),
                    r.error.unwrap_or("unknown"),
                );
            }
            _ => {
                if let Some(ev) = r.event {
                    println!(
                        "[{}] topic={topic:?} listener={lsn:?} event={ev}",
                        r.kind.as_label()
                    );
                } else {
                    println!("[{}] topic={topic:?} listener={lsn:?}", r.kind.as_label());
                }
            }
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.verbose || level > LogLevel::Debug
    }
}
