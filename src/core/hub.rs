//! # Hub: named registry of topics.
//!
//! A [`Hub`] maps topic names to topics of any payload type, offers
//! type-checked lookup, and shuts every topic down on [`Hub::close`].
//!
//! ## Architecture
//! ```text
//! Hub "H"
//!  ├── "orders"  ─► Topic<Order>   (listeners: audit, billing)
//!  ├── "ticks"   ─► Topic<u64>     (listeners: metrics)
//!  └── ...
//!
//! create_topic::<K>(name) = Topic::new(name) + register_topic(topic)
//! get_topic::<K>(name)    = lookup + PayloadType check + downcast
//! ```
//!
//! ## Rules
//! - Topic names are unique for the hub's lifetime; a duplicate registration is an error
//! - Looking up a topic with the wrong payload type is an error, never a silent `None`
//! - `create_topic` is not atomic against a concurrent creation of the same name;
//!   the loser gets [`HubError::DuplicateTopic`]. Use [`Hub::get_or_create_topic`]
//!   when several components may race to create a topic
//! - `close` is terminal: afterwards no topic can be registered or created
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use evhub::{DiscardLogger, Hub, PublishMode};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hub = Hub::new("H", Arc::new(DiscardLogger));
//!     let orders = hub.create_topic::<i32>("orders").await?;
//!     orders.subscribe_fn("print", |v: &i32| println!("order {v}"), 4).await?;
//!
//!     orders.publish(PublishMode::Sync, 1).await?;
//!     assert!(hub.get_topic::<String>("orders").await.is_err());
//!
//!     hub.close(true).await;
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::{AnyTopic, HubConfig, PayloadType, Topic};
use crate::error::HubError;
use crate::logging::{LogKind, LogScope, Logger};

/// Named registry of topics.
pub struct Hub {
    name: Arc<str>,
    topics: RwLock<HashMap<String, Arc<dyn AnyTopic>>>,
    config: HubConfig,
    closed: AtomicBool,
    log: LogScope,
}

impl Hub {
    /// Creates a hub with the default [`HubConfig`].
    pub fn new(name: impl Into<Arc<str>>, logger: Arc<dyn Logger>) -> Arc<Self> {
        Self::with_config(name, logger, HubConfig::default())
    }

    pub fn with_config(
        name: impl Into<Arc<str>>,
        logger: Arc<dyn Logger>,
        config: HubConfig,
    ) -> Arc<Self> {
        let name: Arc<str> = name.into();
        Arc::new(Self {
            log: LogScope::for_hub(logger, Arc::clone(&name)),
            name,
            topics: RwLock::new(HashMap::new()),
            config,
            closed: AtomicBool::new(false),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        self.log.logger()
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub(crate) fn log_scope(&self) -> &LogScope {
        &self.log
    }

    /// Registers a topic under its name.
    ///
    /// # Errors
    /// - [`HubError::DuplicateTopic`] if the name is taken.
    /// - [`HubError::Closed`] if the hub was closed.
    pub async fn register_topic(&self, topic: Arc<dyn AnyTopic>) -> Result<(), HubError> {
        let mut topics = self.topics.write().await;
        self.insert_locked(&mut topics, topic)
    }

    fn insert_locked(
        &self,
        topics: &mut HashMap<String, Arc<dyn AnyTopic>>,
        topic: Arc<dyn AnyTopic>,
    ) -> Result<(), HubError> {
        let name = topic.name().to_string();
        let scope = self.log.for_topic(Arc::from(name.as_str()));
        scope.log(LogKind::TopicRegisterBegin);

        // `close` flips the flag under the write lock held here.
        if self.is_closed() {
            scope.error(LogKind::TopicRegisterErr, "hub closed");
            return Err(HubError::Closed {
                hub: self.name.to_string(),
            });
        }
        if topics.contains_key(&name) {
            scope.error(LogKind::TopicRegisterErr, "duplicated topic");
            return Err(HubError::DuplicateTopic { topic: name });
        }
        topics.insert(name, topic);

        scope.log(LogKind::TopicRegisterOk);
        Ok(())
    }

    pub async fn has_topic(&self, name: &str) -> bool {
        self.topics.read().await.contains_key(name)
    }

    /// Registered topic names, sorted.
    pub async fn topic_names(&self) -> Vec<String> {
        let topics = self.topics.read().await;
        let mut names: Vec<String> = topics.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Looks up a topic of payload type `K`.
    ///
    /// Returns `Ok(None)` if no topic has this name.
    ///
    /// # Errors
    /// [`HubError::TypeMismatch`] if the topic exists with another payload type.
    pub async fn get_topic<K>(&self, name: &str) -> Result<Option<Arc<Topic<K>>>, HubError>
    where
        K: Send + Sync + 'static,
    {
        let topics = self.topics.read().await;
        match topics.get(name) {
            Some(topic) => downcast(topic).map(Some),
            None => Ok(None),
        }
    }

    /// Creates a topic of payload type `K` and registers it.
    ///
    /// # Errors
    /// - [`HubError::DuplicateTopic`] if the name is taken, including by a
    ///   concurrent `create_topic` that registered first.
    /// - [`HubError::Closed`] if the hub was closed.
    pub async fn create_topic<K>(self: &Arc<Self>, name: &str) -> Result<Arc<Topic<K>>, HubError>
    where
        K: Send + Sync + 'static,
    {
        let topic = Topic::<K>::new(name, self);
        self.register_topic(topic.clone()).await?;
        Ok(topic)
    }

    /// Returns the topic named `name`, creating it if absent.
    ///
    /// Lookup and registration happen under one write lock, so concurrent
    /// callers all receive the same topic.
    ///
    /// # Errors
    /// - [`HubError::TypeMismatch`] if the topic exists with another payload type.
    /// - [`HubError::Closed`] if the topic is absent and the hub was closed.
    pub async fn get_or_create_topic<K>(
        self: &Arc<Self>,
        name: &str,
    ) -> Result<Arc<Topic<K>>, HubError>
    where
        K: Send + Sync + 'static,
    {
        let mut topics = self.topics.write().await;
        if let Some(topic) = topics.get(name) {
            return downcast(topic);
        }

        let topic = Topic::<K>::new(name, self);
        self.insert_locked(&mut topics, topic.clone())?;
        Ok(topic)
    }

    /// Closes every registered topic, forwarding `wait`.
    ///
    /// Terminal: registration fails with [`HubError::Closed`] afterwards.
    /// Calling it again closes (or waits on) the same topics.
    pub async fn close(&self, wait: bool) {
        let topics: Vec<Arc<dyn AnyTopic>> = {
            let topics = self.topics.write().await;
            self.closed.store(true, Ordering::Release);
            topics.values().cloned().collect()
        };
        self.log.log(LogKind::HubCloseBegin);

        for topic in &topics {
            topic.close(wait).await;
        }

        self.log.log(LogKind::HubCloseOk);
    }
}

fn downcast<K>(topic: &Arc<dyn AnyTopic>) -> Result<Arc<Topic<K>>, HubError>
where
    K: Send + Sync + 'static,
{
    let expected = PayloadType::of::<K>();
    let actual = topic.payload_type();
    if expected != actual {
        return Err(HubError::TypeMismatch {
            topic: topic.name().to_string(),
            expected: expected.name(),
            actual: actual.name(),
        });
    }

    Arc::clone(topic)
        .into_any()
        .downcast::<Topic<K>>()
        .map_err(|_| HubError::TypeMismatch {
            topic: topic.name().to_string(),
            expected: expected.name(),
            actual: actual.name(),
        })
}

impl fmt::Debug for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
