//! # Logging collaborator.
//!
//! The hub performs no I/O itself; every lifecycle point flows through a
//! [`Logger`] as a structured [`LogRecord`].
//!
//! ## Lifecycle points
//! ```text
//! Hub::register_topic  ─► TopicRegisterBegin ─► TopicRegisterOk
//! Topic::subscribe     ─► ListenerSubOk | ListenerSubErr
//! Topic::unsubscribe   ─► ListenerUnsubOk ─► ListenerCloseBegin | ListenerUnsubErr
//! Topic::publish       ─► EventPubBegin ─► (EventSendBegin ─► EventSendOk)* ─► EventPubOk
//! listener task        ─► EventHandleBegin ─► EventHandleOk | EventHandleErr
//!                      ─► ListenerCloseOk (on shutdown sentinel)
//! Topic::close         ─► TopicCloseBegin ─► ListenerCloseBegin* ─► TopicCloseOk
//! Hub::close           ─► HubCloseBegin ─► ... ─► HubCloseOk
//! ```
//!
//! ## Built-in loggers
//! - [`TracingLogger`]: forwards to `tracing` (default choice)
//! - [`DiscardLogger`]: drops everything
//! - [`LevelFilter`]: minimum-level wrapper around any logger
//! - `LogWriter`: stdout printer (feature `logging`, demo/reference only)

mod kind;
mod logger;
mod scope;
mod tracing_logger;
#[cfg(feature = "logging")]
mod writer;

#[cfg(test)]
pub(crate) mod testing;

pub use kind::{LogKind, LogLevel};
pub use logger::{DiscardLogger, LevelFilter, LogRecord, Logger};
pub use tracing_logger::TracingLogger;
#[cfg(feature = "logging")]
pub use writer::LogWriter;

pub(crate) use scope::LogScope;
