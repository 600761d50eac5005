//! Recording logger used by unit tests.

use std::sync::Mutex;

use crate::events::EventId;
use crate::logging::{LogKind, LogRecord, Logger};

#[derive(Debug, Clone)]
pub(crate) struct OwnedRecord {
    pub kind: LogKind,
    pub hub: String,
    pub topic: String,
    pub listener: String,
    pub event_id: Option<EventId>,
    pub error: Option<String>,
}

#[derive(Default)]
pub(crate) struct MemoryLogger {
    records: Mutex<Vec<OwnedRecord>>,
}

impl MemoryLogger {
    pub(crate) fn records(&self) -> Vec<OwnedRecord> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn kinds(&self) -> Vec<LogKind> {
        self.records().into_iter().map(|r| r.kind).collect()
    }

    pub(crate) fn count(&self, kind: LogKind) -> usize {
        self.records().iter().filter(|r| r.kind == kind).count()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, r: &LogRecord<'_>) {
        self.records.lock().unwrap().push(OwnedRecord {
            kind: r.kind,
            hub: r.hub.to_string(),
            topic: r.topic.to_string(),
            listener: r.listener.to_string(),
            event_id: r.event.map(|e| e.id),
            error: r.error.map(str::to_string),
        });
    }
}
