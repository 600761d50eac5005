//! # Topic: one typed pub/sub channel.
//!
//! A [`Topic<K>`] owns the ordered set of listeners for payload type `K`, a
//! monotonic event-id counter, and the publish/subscribe/close operations.
//!
//! ## Architecture
//! ```text
//! publish(mode, payload)
//!     │  take dispatch gate (FIFO), id = new_event_id()
//!     ├─ Sync  ─► fan-out on the caller's task, then release the gate
//!     ├─ Async ─► fan-out on a tracked task that owns the gate
//!     └─ Auto  ─► Async if listener_count >= async_threshold, else Sync
//!
//! fan-out (gate + read lock held):
//!     ├──► [queue L1] ──► task L1 ──► L1.on_event()
//!     ├──► [queue L2] ──► task L2 ──► L2.on_event()
//!     └──► [queue LN] ──► task LN ──► LN.on_event()
//! ```
//!
//! ## Rules
//! - **Snapshot fan-out**: listeners present when fan-out takes the read lock receive
//!   the event; listeners added later do not
//! - **Backpressure**: a full listener queue blocks the fan-out (and thus a `Sync` publisher)
//! - **Ids**: strictly increasing per topic, shared by data events and shutdown sentinels
//! - **Ordering**: fan-outs of one topic run one at a time in id order, so every
//!   listener sees events in publish order whatever the mode. An `Async` publish
//!   returns before its own fan-out, but after the previous one has finished
//! - **Terminal close**: a closed topic rejects subscribe and publish; fan-outs
//!   already accepted are enqueued before any shutdown sentinel

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tokio_util::task::TaskTracker;

use crate::core::{AnyTopic, Hub, HubConfig, PayloadType};
use crate::error::TopicError;
use crate::events::{Event, EventId};
use crate::listeners::{Listen, ListenFn, Listener};
use crate::logging::{LogKind, LogScope};

/// Delivery mode of [`Topic::publish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishMode {
    /// The publisher awaits until the event is enqueued to every listener.
    Sync,
    /// Fan-out runs on a spawned task; `publish` returns without waiting for it.
    Async,
    /// `Async` when the listener count is at or above the hub's threshold, else `Sync`.
    #[default]
    Auto,
}

/// Typed pub/sub channel.
///
/// Always handled as `Arc<Topic<K>>`; obtain one from [`Hub::create_topic`],
/// [`Hub::get_topic`] or [`Hub::get_or_create_topic`].
pub struct Topic<K> {
    name: Arc<str>,
    hub_name: Arc<str>,
    hub: Weak<Hub>,
    payload_type: PayloadType,
    config: HubConfig,

    listeners: RwLock<Vec<Listener<K>>>,
    listener_count: AtomicUsize,
    event_id: AtomicU64,
    closed: AtomicBool,
    /// Held for the duration of one fan-out; waiters are served in FIFO order.
    dispatch: Arc<Mutex<()>>,
    /// Every listener task and async fan-out ever started on this topic.
    tracker: TaskTracker,

    log: LogScope,
}

impl<K> Topic<K>
where
    K: Send + Sync + 'static,
{
    /// Creates an unregistered topic bound to `hub`.
    ///
    /// Register it with [`Hub::register_topic`] to make it discoverable.
    pub fn new(name: impl Into<Arc<str>>, hub: &Arc<Hub>) -> Arc<Self> {
        let name: Arc<str> = name.into();
        Arc::new(Self {
            log: hub.log_scope().for_topic(Arc::clone(&name)),
            name,
            hub_name: hub.name_arc(),
            hub: Arc::downgrade(hub),
            payload_type: PayloadType::of::<K>(),
            config: hub.config().clone(),
            listeners: RwLock::new(Vec::new()),
            listener_count: AtomicUsize::new(0),
            event_id: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            dispatch: Arc::new(Mutex::new(())),
            tracker: TaskTracker::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }

    /// Returns the owning hub, if it is still alive.
    pub fn hub(&self) -> Option<Arc<Hub>> {
        self.hub.upgrade()
    }

    pub fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    /// Id of the most recently created event (`0` before the first one).
    pub fn curr_event_id(&self) -> EventId {
        self.event_id.load(Ordering::SeqCst)
    }

    /// Allocates the next event id.
    pub fn new_event_id(&self) -> EventId {
        self.event_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Current number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listener_count.load(Ordering::Acquire)
    }

    /// Listener names in subscribe order.
    pub async fn listener_names(&self) -> Vec<String> {
        let listeners = self.listeners.read().await;
        listeners.iter().map(|l| l.name().to_string()).collect()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Subscribes a listener with a queue of `capacity` events.
    ///
    /// Returns the listener's 1-based position.
    ///
    /// # Errors
    /// - [`TopicError::DuplicateListener`] if `name` is already subscribed (logged
    ///   as `ListenerSubErr`; the listener count is unchanged).
    /// - [`TopicError::Closed`] if the topic was closed.
    pub async fn subscribe(
        &self,
        name: impl Into<Arc<str>>,
        listen: Arc<dyn Listen<K>>,
        capacity: usize,
    ) -> Result<usize, TopicError> {
        let name: Arc<str> = name.into();
        let mut listeners = self.listeners.write().await;

        if self.is_closed() {
            return Err(TopicError::Closed {
                topic: self.name.to_string(),
            });
        }

        if let Some(idx) = listeners.iter().position(|l| l.name() == &*name) {
            let position = idx + 1;
            self.log.error_listener(
                LogKind::ListenerSubErr,
                &name,
                &format!("duplicated listener on #{position}"),
            );
            return Err(TopicError::DuplicateListener {
                topic: self.name.to_string(),
                listener: name.to_string(),
                position,
            });
        }

        let listener = Listener::spawn(
            Arc::clone(&name),
            listen,
            capacity,
            self.log.for_listener(Arc::clone(&name)),
            &self.tracker,
        );
        listeners.push(listener);
        self.listener_count.store(listeners.len(), Ordering::Release);

        self.log.log_listener(LogKind::ListenerSubOk, &name);
        Ok(listeners.len())
    }

    /// Subscribes a closure with a queue of `capacity` events.
    pub async fn subscribe_fn<F>(
        &self,
        name: impl Into<Arc<str>>,
        f: F,
        capacity: usize,
    ) -> Result<usize, TopicError>
    where
        F: Fn(&K) + Send + Sync + 'static,
    {
        self.subscribe(name, ListenFn::arc(f), capacity).await
    }

    /// Subscribes with the hub's `default_queue_capacity`.
    pub async fn subscribe_default(
        &self,
        name: impl Into<Arc<str>>,
        listen: Arc<dyn Listen<K>>,
    ) -> Result<usize, TopicError> {
        let capacity = self.config.queue_capacity_clamped();
        self.subscribe(name, listen, capacity).await
    }

    /// Removes a listener and queues its shutdown sentinel.
    ///
    /// Events enqueued before the removal are still handled by it; events
    /// published afterwards never reach it. Does not wait for it to drain.
    /// Returns `false` (and logs `ListenerUnsubErr`) if `name` is unknown.
    pub async fn unsubscribe(&self, name: &str) -> bool {
        let removed = {
            let mut listeners = self.listeners.write().await;
            match listeners.iter().position(|l| l.name() == name) {
                Some(idx) => {
                    let listener = listeners.remove(idx);
                    self.listener_count.store(listeners.len(), Ordering::Release);
                    Some(listener)
                }
                None => None,
            }
        };

        let Some(listener) = removed else {
            self.log
                .error_listener(LogKind::ListenerUnsubErr, name, "not found");
            return false;
        };
        self.log.log_listener(LogKind::ListenerUnsubOk, name);

        // Fan-outs that saw this listener finished before the write lock was granted,
        // so the sentinel lands behind all of them.
        listener.stop(Arc::new(self.shutdown_event())).await;
        true
    }

    /// Publishes `payload` to every current listener.
    ///
    /// Waits for the previous fan-out of this topic to finish, in every mode.
    ///
    /// # Errors
    /// [`TopicError::Closed`] if the topic was closed; nothing is delivered.
    pub async fn publish(
        self: &Arc<Self>,
        mode: PublishMode,
        payload: K,
    ) -> Result<(), TopicError> {
        let gate = Arc::clone(&self.dispatch).lock_owned().await;
        // `close` sets the flag before taking the gate.
        if self.is_closed() {
            return Err(TopicError::Closed {
                topic: self.name.to_string(),
            });
        }

        let dispatch_async = match mode {
            PublishMode::Sync => false,
            PublishMode::Async => true,
            PublishMode::Auto => self.listener_count() >= self.config.async_threshold,
        };

        let event = Arc::new(Event::data(
            self.new_event_id(),
            Arc::clone(&self.hub_name),
            Arc::clone(&self.name),
            payload,
        ));

        if dispatch_async {
            let me = Arc::clone(self);
            self.tracker.spawn(async move {
                let _gate = gate;
                me.fan_out(event).await;
            });
        } else {
            self.fan_out(event).await;
            drop(gate);
        }
        Ok(())
    }

    async fn fan_out(&self, event: Arc<Event<K>>) {
        let listeners = self.listeners.read().await;

        self.log.log_event(LogKind::EventPubBegin, event.as_ref());
        for listener in listeners.iter() {
            listener.enqueue(Arc::clone(&event)).await;
        }
        self.log.log_event(LogKind::EventPubOk, event.as_ref());
    }

    /// Stops every listener; with `wait`, returns once all listener tasks exited.
    ///
    /// Publishes accepted before the close are enqueued first, and listeners
    /// handle everything queued before their sentinel. Waiting also covers
    /// listeners unsubscribed earlier that are still draining.
    /// Calling it again only waits (if asked).
    pub async fn close(&self, wait: bool) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            let gate = self.dispatch.lock().await;
            let listeners = self.listeners.read().await;
            let sentinel = Arc::new(self.shutdown_event());

            self.log.log_event(LogKind::TopicCloseBegin, sentinel.as_ref());
            for listener in listeners.iter() {
                listener.stop(Arc::clone(&sentinel)).await;
            }
            drop(listeners);
            drop(gate);

            // No task can be spawned past this point: subscribe checks `closed`
            // under the write lock, publish under the gate.
            self.tracker.close();
            if wait {
                self.tracker.wait().await;
            }
            self.log.log_event(LogKind::TopicCloseOk, sentinel.as_ref());
        } else if wait {
            self.tracker.wait().await;
        }
    }

    fn shutdown_event(&self) -> Event<K> {
        Event::shutdown(
            self.new_event_id(),
            Arc::clone(&self.hub_name),
            Arc::clone(&self.name),
        )
    }
}

#[async_trait]
impl<K> AnyTopic for Topic<K>
where
    K: Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    fn curr_event_id(&self) -> EventId {
        Topic::curr_event_id(self)
    }

    async fn unsubscribe(&self, name: &str) -> bool {
        Topic::unsubscribe(self, name).await
    }

    async fn close(&self, wait: bool) {
        Topic::close(self, wait).await
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn std::any::Any + Send + Sync> {
        self
    }
}

impl<K> fmt::Debug for Topic<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Topic")
            .field("hub", &self.hub_name)
            .field("name", &self.name)
            .field("payload_type", &self.payload_type)
            .field("listeners", &self.listener_count.load(Ordering::Relaxed))
            .field("event_id", &self.event_id.load(Ordering::Relaxed))
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use tokio::sync::watch;

    use crate::logging::testing::MemoryLogger;

    type Seen<T> = Arc<Mutex<Vec<T>>>;

    fn hub_with(config: HubConfig) -> (Arc<Hub>, Arc<MemoryLogger>) {
        let mem = Arc::new(MemoryLogger::default());
        (Hub::with_config("H", mem.clone(), config), mem)
    }

    fn recorder<T: Clone + Send + Sync + 'static>(
        seen: &Seen<T>,
    ) -> impl Fn(&T) + Send + Sync + 'static {
        let seen = seen.clone();
        move |v: &T| seen.lock().unwrap().push(v.clone())
    }

    /// Listener whose callback waits until the gate opens.
    struct Gated {
        gate: watch::Receiver<bool>,
        seen: Seen<i32>,
    }

    #[async_trait]
    impl Listen<i32> for Gated {
        async fn on_event(&self, v: &i32) {
            let mut gate = self.gate.clone();
            let _ = gate.wait_for(|open| *open).await;
            self.seen.lock().unwrap().push(*v);
        }
    }

    fn gated(gate: &watch::Sender<bool>) -> (Arc<Gated>, Seen<i32>) {
        let seen: Seen<i32> = Arc::default();
        let l = Arc::new(Gated {
            gate: gate.subscribe(),
            seen: seen.clone(),
        });
        (l, seen)
    }

    #[tokio::test]
    async fn test_sync_publish_in_order() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        let a: Seen<i32> = Arc::default();
        let b: Seen<i32> = Arc::default();

        assert_eq!(topic.subscribe_fn("A", recorder(&a), 4).await, Ok(1));
        assert_eq!(topic.subscribe_fn("B", recorder(&b), 4).await, Ok(2));

        for v in 1..=20 {
            topic.publish(PublishMode::Sync, v).await.unwrap();
        }
        assert_eq!(topic.curr_event_id(), 20);

        topic.close(true).await;
        let expected: Vec<i32> = (1..=20).collect();
        assert_eq!(*a.lock().unwrap(), expected);
        assert_eq!(*b.lock().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_listener_sees_increasing_ids() {
        let (hub, mem) = hub_with(HubConfig::default());
        let topic = Topic::<u8>::new("ids", &hub);
        topic.subscribe_fn("L", |_: &u8| {}, 2).await.unwrap();
        for v in 0..10u8 {
            topic.publish(PublishMode::Sync, v).await.unwrap();
        }
        topic.close(true).await;

        let handled: Vec<EventId> = mem
            .records()
            .into_iter()
            .filter(|r| r.kind == LogKind::EventHandleOk && r.listener == "L")
            .filter_map(|r| r.event_id)
            .collect();
        assert_eq!(handled, (1..=10).collect::<Vec<EventId>>());
    }

    #[tokio::test]
    async fn test_duplicate_listener_rejected() {
        let (hub, mem) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);

        topic.subscribe_fn("L1", |_: &i32| {}, 4).await.unwrap();
        let err = topic.subscribe_fn("L1", |_: &i32| {}, 4).await.unwrap_err();

        assert_eq!(
            err,
            TopicError::DuplicateListener {
                topic: "orders".into(),
                listener: "L1".into(),
                position: 1,
            }
        );
        assert_eq!(topic.listener_count(), 1);
        assert_eq!(mem.count(LogKind::ListenerSubErr), 1);
        topic.close(true).await;
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_returns_false() {
        let (hub, mem) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);

        assert!(!topic.unsubscribe("ghost").await);
        let errs: Vec<_> = mem
            .records()
            .into_iter()
            .filter(|r| r.kind == LogKind::ListenerUnsubErr)
            .collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].listener, "ghost");
        assert_eq!(errs[0].error.as_deref(), Some("not found"));
    }

    #[tokio::test]
    async fn test_unsubscribe_keeps_order_of_the_rest() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        for name in ["A", "B", "C", "D"] {
            topic.subscribe_fn(name, |_: &i32| {}, 1).await.unwrap();
        }

        assert!(topic.unsubscribe("D").await);
        assert!(topic.unsubscribe("B").await);
        assert_eq!(topic.listener_names().await, vec!["A", "C"]);
        assert_eq!(topic.listener_count(), 2);

        // sentinels consume ids
        assert_eq!(topic.curr_event_id(), 2);
        topic.close(true).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unsubscribe_mid_stream() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        let (open, _keep) = watch::channel(false);

        let (slow, slow_seen) = gated(&open);
        let other: Seen<i32> = Arc::default();
        topic.subscribe("slow", slow, 4).await.unwrap();
        topic.subscribe_fn("other", recorder(&other), 4).await.unwrap();

        topic.publish(PublishMode::Sync, 1).await.unwrap();
        topic.publish(PublishMode::Sync, 2).await.unwrap();
        assert!(topic.unsubscribe("slow").await);
        topic.publish(PublishMode::Sync, 3).await.unwrap();

        open.send_replace(true);
        tokio::time::timeout(Duration::from_secs(5), topic.close(true))
            .await
            .expect("close should finish");

        assert_eq!(*slow_seen.lock().unwrap(), vec![1, 2]);
        assert_eq!(*other.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_close_waits_for_every_listener() {
        let (hub, mem) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        let seen: Seen<i32> = Arc::default();

        for name in ["A", "B", "C"] {
            topic.subscribe_fn(name, recorder(&seen), 8).await.unwrap();
        }
        for v in 0..5 {
            topic.publish(PublishMode::Sync, v).await.unwrap();
        }

        topic.close(true).await;

        assert!(topic.tracker.is_empty());
        assert_eq!(seen.lock().unwrap().len(), 15);
        assert_eq!(mem.count(LogKind::ListenerCloseOk), 3);
        assert_eq!(mem.count(LogKind::TopicCloseOk), 1);
    }

    #[tokio::test]
    async fn test_closed_topic_rejects_publish_and_subscribe() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        let seen: Seen<i32> = Arc::default();
        topic.subscribe_fn("A", recorder(&seen), 4).await.unwrap();

        topic.publish(PublishMode::Sync, 1).await.unwrap();
        topic.close(true).await;
        topic.close(true).await;

        let err = topic.publish(PublishMode::Sync, 2).await.unwrap_err();
        assert_eq!(err.as_label(), "topic_closed");
        assert!(matches!(
            topic.subscribe_fn("B", |_: &i32| {}, 1).await,
            Err(TopicError::Closed { .. })
        ));
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_unsubscribe_before_close_is_safe() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        topic.subscribe_fn("A", |_: &i32| {}, 1).await.unwrap();
        topic.subscribe_fn("B", |_: &i32| {}, 1).await.unwrap();

        assert!(topic.unsubscribe("A").await);
        tokio::time::timeout(Duration::from_secs(5), topic.close(true))
            .await
            .expect("close should finish");
        assert!(topic.tracker.is_empty());
    }

    #[tokio::test]
    async fn test_auto_with_no_listeners_is_sync() {
        let (hub, mem) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);

        topic.publish(PublishMode::Auto, 1).await.unwrap();

        // fan-out already ran on this task
        assert_eq!(mem.count(LogKind::EventPubOk), 1);
        assert_eq!(topic.curr_event_id(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_auto_below_threshold_blocks_on_full_queue() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        let (open, _keep) = watch::channel(false);
        let (slow, seen) = gated(&open);
        topic.subscribe("slow", slow, 1).await.unwrap();

        // one event in the callback, one in the queue, the third must wait
        let publishing = async {
            for v in 1..=3 {
                topic.publish(PublishMode::Auto, v).await.unwrap();
            }
        };
        let res = tokio::time::timeout(Duration::from_millis(200), publishing).await;
        assert!(res.is_err(), "sync fan-out should block on a full queue");

        open.send_replace(true);
        topic.close(true).await;
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_auto_at_threshold_is_async() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("wide", &hub);
        let (open, _keep) = watch::channel(false);

        let mut seen = Vec::new();
        for i in 0..100 {
            let (l, s) = gated(&open);
            topic.subscribe(format!("L{i}"), l, 1).await.unwrap();
            seen.push(s);
        }
        assert_eq!(topic.listener_count(), 100);

        let publishing = async {
            for v in 1..=3 {
                topic.publish(PublishMode::Auto, v).await.unwrap();
            }
        };
        tokio::time::timeout(Duration::from_secs(1), publishing)
            .await
            .expect("async fan-out must not block the publisher");
        assert!(seen.iter().all(|s| s.lock().unwrap().is_empty()));

        open.send_replace(true);
        topic.close(true).await;
        assert!(seen.iter().all(|s| s.lock().unwrap().len() == 3));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_publishers_keep_per_publisher_order() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<(u32, u32)>::new("pairs", &hub);
        let seen: Seen<(u32, u32)> = Arc::default();
        topic.subscribe_fn("L", recorder(&seen), 8).await.unwrap();

        let mut handles = Vec::new();
        for p in 0..4u32 {
            let t = Arc::clone(&topic);
            handles.push(tokio::spawn(async move {
                for n in 0..50u32 {
                    t.publish(PublishMode::Sync, (p, n)).await.unwrap();
                }
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        topic.close(true).await;

        assert_eq!(topic.curr_event_id(), 201);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 200);
        for p in 0..4u32 {
            let ns: Vec<u32> = seen
                .iter()
                .filter(|(q, _)| *q == p)
                .map(|(_, n)| *n)
                .collect();
            assert_eq!(ns, (0..50).collect::<Vec<_>>());
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_async_publish_keeps_order() {
        let (hub, mem) = hub_with(HubConfig::default());
        let topic = Topic::<u32>::new("async", &hub);
        let seen: Seen<u32> = Arc::default();
        topic.subscribe_fn("L", recorder(&seen), 1024).await.unwrap();

        for v in 0..500u32 {
            topic.publish(PublishMode::Async, v).await.unwrap();
        }
        tokio::time::timeout(Duration::from_secs(5), topic.close(true))
            .await
            .expect("close should finish");

        assert_eq!(*seen.lock().unwrap(), (0..500).collect::<Vec<_>>());
        let handled: Vec<EventId> = mem
            .records()
            .into_iter()
            .filter(|r| r.kind == LogKind::EventHandleOk)
            .filter_map(|r| r.event_id)
            .collect();
        assert_eq!(handled, (1..=500).collect::<Vec<EventId>>());
    }

    #[tokio::test]
    async fn test_close_delivers_accepted_async_publish() {
        let (hub, mem) = hub_with(HubConfig::default());
        let topic = Topic::<i32>::new("orders", &hub);
        let seen: Seen<i32> = Arc::default();
        topic.subscribe_fn("L", recorder(&seen), 4).await.unwrap();

        topic.publish(PublishMode::Async, 7).await.unwrap();
        topic.close(true).await;

        assert_eq!(*seen.lock().unwrap(), vec![7]);
        assert_eq!(mem.count(LogKind::EventSendErr), 0);
        assert!(topic.tracker.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_subscribe_and_unsubscribe_while_publishing() {
        let (hub, _) = hub_with(HubConfig::default());
        let topic = Topic::<u32>::new("churn", &hub);
        let seen: Vec<Seen<u32>> = (0..20).map(|_| Arc::default()).collect();

        let publisher = {
            let t = Arc::clone(&topic);
            tokio::spawn(async move {
                for v in 1..=300u32 {
                    t.publish(PublishMode::Sync, v).await.unwrap();
                    if v % 10 == 0 {
                        tokio::task::yield_now().await;
                    }
                }
            })
        };

        for (i, s) in seen.iter().enumerate() {
            let name = format!("L{i}");
            topic
                .subscribe_fn(name.clone(), recorder(s), 16)
                .await
                .unwrap();
            tokio::task::yield_now().await;
            if i % 2 == 0 {
                assert!(topic.unsubscribe(&name).await);
            }
        }
        publisher.await.unwrap();
        tokio::time::timeout(Duration::from_secs(5), topic.close(true))
            .await
            .expect("close should finish");

        for (i, s) in seen.iter().enumerate() {
            let got = s.lock().unwrap();
            assert!(
                got.windows(2).all(|w| w[1] == w[0] + 1),
                "L{i} got a gap or reorder: {got:?}"
            );
            // still subscribed at the end, so the run reaches the last value
            if i % 2 == 1 {
                if let Some(last) = got.last() {
                    assert_eq!(*last, 300, "L{i}");
                }
            }
        }
    }
}
