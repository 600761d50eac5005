//! # Listener callback trait.
//!
//! Provides [`Listen`], the extension point for consuming events of one topic.
//!
//! Each subscription gets:
//! - **Dedicated consumer task** (runs independently of publishers and other listeners)
//! - **Per-listener bounded queue** (capacity given to [`Topic::subscribe`](crate::Topic::subscribe))
//! - **Panic isolation** (panics are caught and logged as `LogKind::EventHandleErr`)
//!
//! ## Architecture
//! ```text
//! Topic::publish ──► [bounded queue] ──► consumer task ──► listener.on_event(&payload)
//!                                                      └─► panic caught → EventHandleErr
//! ```
//!
//! ## Rules
//! - A slow listener only affects its own queue (and, through backpressure, publishers).
//! - Events are processed sequentially (FIFO) per listener.
//! - A full queue **blocks** the publisher until space is available; nothing is dropped.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use evhub::Listen;
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Listen<String> for Audit {
//!     async fn on_event(&self, line: &String) {
//!         // write audit record...
//!         let _ = line.len();
//!     }
//! }
//! ```

use async_trait::async_trait;

/// Consumer of events of payload type `K`.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Panics are caught per event; the next event is still delivered.
/// - A callback that never returns stalls this listener only.
#[async_trait]
pub trait Listen<K>: Send + Sync + 'static
where
    K: Send + Sync + 'static,
{
    /// Processes a single payload.
    ///
    /// Called from the listener's own task, never in the publisher context.
    async fn on_event(&self, payload: &K);
}
