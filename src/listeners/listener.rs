//! # Listener: bounded queue + dedicated consumer task.
//!
//! ## Architecture
//! ```text
//! enqueue(event) ──► [queue] (bounded) ──► consumer task ──► listen.on_event(&payload)
//!                                                     ├──► panic → EventHandleErr, continue
//!                                                     └──► shutdown sentinel → exit
//! ```
//!
//! ## Rules
//! - **Per-listener FIFO**: one consumer over one queue, events handled in enqueue order
//! - **Backpressure**: `enqueue` waits while the queue is full; nothing is dropped
//! - **Cooperative stop**: the sentinel is queued behind pending events, so everything
//!   enqueued before it is handled first
//! - **Terminal**: once the sentinel is seen the task exits; later events are discarded
//!   (logged as `EventSendErr`)
//!
//! ## Panic handling
//! The consumer uses `catch_unwind` around each callback invocation:
//! - Panic is caught and logged with hub/topic/listener/event id
//! - The task continues with the next event
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if the listener uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio_util::task::TaskTracker;

use crate::events::Event;
use crate::listeners::Listen;
use crate::logging::{LogKind, LogScope};

/// One subscription of a topic.
///
/// Owned by the topic; dropping it closes the queue.
pub(crate) struct Listener<K> {
    name: Arc<str>,
    sender: mpsc::Sender<Arc<Event<K>>>,
    log: LogScope,
}

impl<K> Listener<K>
where
    K: Send + Sync + 'static,
{
    /// Creates the queue and starts the consumer task on `tracker`.
    ///
    /// Capacity is clamped to a minimum of 1.
    pub(crate) fn spawn(
        name: Arc<str>,
        listen: Arc<dyn Listen<K>>,
        capacity: usize,
        log: LogScope,
        tracker: &TaskTracker,
    ) -> Self {
        let (tx, rx) = mpsc::channel::<Arc<Event<K>>>(capacity.max(1));
        tracker.spawn(consume(rx, listen, log.clone()));

        Self {
            name,
            sender: tx,
            log,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Appends an event, waiting while the queue is full.
    pub(crate) async fn enqueue(&self, event: Arc<Event<K>>) {
        self.log.log_event(LogKind::EventSendBegin, event.as_ref());

        match self.sender.send(Arc::clone(&event)).await {
            Ok(()) => self.log.log_event(LogKind::EventSendOk, event.as_ref()),
            Err(_) => {
                self.log
                    .error_event(LogKind::EventSendErr, &event.meta(), "listener stopped")
            }
        }
    }

    /// Queues the shutdown sentinel behind every pending event.
    ///
    /// Does not wait for the consumer task to exit.
    pub(crate) async fn stop(&self, sentinel: Arc<Event<K>>) {
        self.log
            .log_event(LogKind::ListenerCloseBegin, sentinel.as_ref());
        // Err means the task already saw an earlier sentinel.
        let _ = self.sender.send(sentinel).await;
    }
}

/// Consumer loop: `Running` until the first shutdown sentinel, then `Stopped`.
async fn consume<K>(
    mut rx: mpsc::Receiver<Arc<Event<K>>>,
    listen: Arc<dyn Listen<K>>,
    log: LogScope,
) where
    K: Send + Sync + 'static,
{
    while let Some(event) = rx.recv().await {
        let Some(payload) = event.payload() else {
            log.log_event(LogKind::ListenerCloseOk, event.as_ref());
            break;
        };

        log.log_event(LogKind::EventHandleBegin, event.as_ref());

        let fut = listen.on_event(payload);
        match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(()) => log.log_event(LogKind::EventHandleOk, event.as_ref()),
            Err(panic_err) => {
                let info = panic_message(panic_err.as_ref());
                log.error_event(LogKind::EventHandleErr, &event.meta(), &info);
            }
        }
    }
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
