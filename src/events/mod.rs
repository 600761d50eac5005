//! Events: the envelope delivered to listeners.
//!
//! ## Contents
//! - [`Event`] typed envelope (data or shutdown sentinel)
//! - [`EventMeta`] payload-free view used by loggers
//! - [`EventId`] per-topic monotonic id

mod event;

pub use event::{Event, EventId, EventMeta};
