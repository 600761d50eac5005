//! # Event envelope delivered to listeners.
//!
//! An [`Event`] is created by a [`Topic`](crate::Topic) either at publish time
//! (a data event carrying the payload) or when a listener is being stopped
//! (a shutdown sentinel carrying no payload).
//!
//! ## Ordering guarantees
//! Each event has a per-topic unique id ([`EventId`]) that increases monotonically.
//! Data events and shutdown sentinels share the same counter, so every event ever
//! seen on a topic can be correlated in logs by `(hub, topic, id)`.
//!
//! ## Example
//! ```rust
//! use evhub::Event;
//!
//! let ev = Event::data(1, "H".into(), "orders".into(), 42_i32);
//! assert_eq!(ev.id, 1);
//! assert_eq!(ev.payload(), Some(&42));
//! assert!(!ev.is_shutdown());
//!
//! let stop = Event::<i32>::shutdown(2, "H".into(), "orders".into());
//! assert!(stop.is_shutdown());
//! assert_eq!(stop.payload(), None);
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Per-topic event identifier. The first event on a topic gets id `1`.
pub type EventId = u64;

/// Immutable envelope for one payload or a shutdown sentinel.
///
/// - `id`: per-topic, monotonically increasing
/// - `hub`/`topic`: names for log correlation
/// - payload: present for data events, absent for shutdown sentinels
#[derive(Debug, Clone)]
pub struct Event<K> {
    /// Per-topic unique, monotonically increasing id.
    pub id: EventId,
    /// Name of the hub owning the topic.
    pub hub: Arc<str>,
    /// Name of the topic the event was created on.
    pub topic: Arc<str>,

    payload: Option<K>,
}

impl<K> Event<K> {
    /// Creates a data event.
    #[inline]
    pub fn data(id: EventId, hub: Arc<str>, topic: Arc<str>, payload: K) -> Self {
        Self {
            id,
            hub,
            topic,
            payload: Some(payload),
        }
    }

    /// Creates a shutdown sentinel.
    #[inline]
    pub fn shutdown(id: EventId, hub: Arc<str>, topic: Arc<str>) -> Self {
        Self {
            id,
            hub,
            topic,
            payload: None,
        }
    }

    /// Returns the payload, or `None` for a shutdown sentinel.
    #[inline]
    pub fn payload(&self) -> Option<&K> {
        self.payload.as_ref()
    }

    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.payload.is_none()
    }

    /// Returns the untyped part of the event, as seen by loggers.
    pub fn meta(&self) -> EventMeta {
        EventMeta {
            id: self.id,
            hub: Arc::clone(&self.hub),
            topic: Arc::clone(&self.topic),
            shutdown: self.is_shutdown(),
        }
    }
}

/// Payload-free view of an [`Event`].
///
/// Loggers are not generic over the payload type, so they receive this instead.
/// `Display` renders a compact JSON object, names escaped as JSON strings:
/// ```text
/// {"id":3,"hub":"H","topic":"orders","close":false}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMeta {
    pub id: EventId,
    pub hub: Arc<str>,
    pub topic: Arc<str>,
    pub shutdown: bool,
}

impl fmt::Display for EventMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"id\":{},\"hub\":{},\"topic\":{},\"close\":{}}}",
            self.id,
            Value::from(&*self.hub),
            Value::from(&*self.topic),
            self.shutdown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_has_no_payload() {
        let ev = Event::<String>::shutdown(7, "H".into(), "orders".into());
        assert!(ev.is_shutdown());
        assert!(ev.payload().is_none());
        assert_eq!(ev.id, 7);
    }

    #[test]
    fn test_meta_display() {
        let ev = Event::data(3, "H".into(), "orders".into(), "x".to_string());
        assert_eq!(
            ev.meta().to_string(),
            r#"{"id":3,"hub":"H","topic":"orders","close":false}"#
        );

        let stop = Event::<()>::shutdown(4, "H".into(), "orders".into());
        assert!(stop.meta().shutdown);
        assert!(stop.meta().to_string().ends_with("\"close\":true}"));
    }

    #[test]
    fn test_meta_display_escapes_names() {
        let ev = Event::<()>::shutdown(1, "a\"b".into(), "\u{1b}[0m\n".into());
        let text = ev.meta().to_string();
        assert_eq!(
            text,
            r#"{"id":1,"hub":"a\"b","topic":"\u001b[0m\n","close":true}"#
        );

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["topic"], "\u{1b}[0m\n");
        assert_eq!(parsed["id"], 1);
    }
}
