//! # evhub
//!
//! **evhub** is an in-process, typed publish/subscribe event hub for Tokio.
//!
//! Producers publish typed payloads to named topics; every listener of a topic
//! receives every event on its own bounded queue and its own task, at its own
//! pace, in publish order. A failing listener never affects the others.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐
//!     │  Producer A  │   │  Producer B  │
//!     └──────┬───────┘   └──────┬───────┘
//!            │ publish(mode, payload)
//!            ▼                  ▼
//! ┌───────────────────────────────────────────────────────┐
//! │  Hub "H"  (topic name ─► Topic, type-checked lookup)   │
//! │   ├── Topic<Order> "orders"                           │
//! │   │     id counter, RwLock<Vec<Listener>>             │
//! │   └── Topic<u64>   "ticks"                            │
//! └──────┬──────────────────┬─────────────────┬───────────┘
//!        ▼                  ▼                 ▼
//!   [queue L1]         [queue L2]        [queue LN]     (bounded, FIFO)
//!        ▼                  ▼                 ▼
//!    task L1            task L2           task LN       (one per listener)
//!        ▼                  ▼                 ▼
//!   L1.on_event()      L2.on_event()     LN.on_event()  (panics caught, logged)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Hub::new ──► create_topic::<K> ──► subscribe(name, listener, capacity)
//!
//! publish(mode, payload)
//!   ├─► wait for the topic's previous fan-out, id = new_event_id()
//!   ├─► Sync  : enqueue to every listener on the caller's task (blocks on full queues)
//!   ├─► Async : same, on a spawned task; publish returns before it runs
//!   └─► Auto  : Async if listener_count >= async_threshold (default 100), else Sync
//!
//! unsubscribe(name) ─► remove ─► shutdown sentinel queued behind pending events
//! Topic::close(wait) ─► accepted fan-outs, then a sentinel to every listener
//!                    ─► (wait) all listener tasks exited
//! Hub::close(wait)   ─► Topic::close(wait) for every topic
//! ```
//!
//! ## Features
//! | Area          | Description                                                   | Key types / traits                       |
//! |---------------|---------------------------------------------------------------|------------------------------------------|
//! | **Registry**  | Named topics, type-checked lookup, coordinated shutdown.      | [`Hub`], [`HubConfig`]                   |
//! | **Topics**    | Typed channels with Sync/Async/Auto publish.                  | [`Topic`], [`PublishMode`]               |
//! | **Listeners** | Per-listener queue and task, panic isolation.                 | [`Listen`], [`ListenFn`]                 |
//! | **Events**    | Envelope with per-topic monotonic ids.                        | [`Event`], [`EventMeta`], [`EventId`]    |
//! | **Logging**   | Structured lifecycle records, pluggable backends.             | [`Logger`], [`TracingLogger`]            |
//! | **Errors**    | Typed structural errors.                                      | [`HubError`], [`TopicError`]             |
//!
//! ## Optional features
//! - `logging`: exports a simple stdout [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use evhub::{Hub, PublishMode, TracingLogger};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hub = Hub::new("H", Arc::new(TracingLogger));
//!
//!     let orders = hub.create_topic::<i32>("orders").await?;
//!     orders.subscribe_fn("L1", |v: &i32| println!("L1 got {v}"), 4).await?;
//!     orders.subscribe_fn("L2", |v: &i32| println!("L2 got {v}"), 4).await?;
//!
//!     for v in [1, 2, 3] {
//!         orders.publish(PublishMode::Sync, v).await?;
//!     }
//!     assert_eq!(orders.curr_event_id(), 3);
//!
//!     hub.close(true).await;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod listeners;
mod logging;

// ---- Public re-exports ----

pub use crate::core::{AnyTopic, Hub, HubConfig, PayloadType, PublishMode, Topic};
pub use error::{HubError, TopicError};
pub use events::{Event, EventId, EventMeta};
pub use listeners::{Listen, ListenFn};
pub use logging::{
    DiscardLogger, LevelFilter, LogKind, LogLevel, LogRecord, Logger, TracingLogger,
};

// Optional: expose a simple built-in stdout logger (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use logging::LogWriter;
