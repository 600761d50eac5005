//! # Type-erased topic handle stored by the hub.
//!
//! The hub keeps topics of different payload types in one map, so it only sees
//! them through [`AnyTopic`]. Typed access goes through
//! [`Hub::get_topic`](crate::Hub::get_topic), which checks [`PayloadType`] and
//! downcasts back to `Arc<Topic<K>>`.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::PayloadType;
use crate::events::EventId;

/// Operations available on a topic without knowing its payload type.
#[async_trait]
pub trait AnyTopic: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn payload_type(&self) -> PayloadType;

    fn curr_event_id(&self) -> EventId;

    async fn unsubscribe(&self, name: &str) -> bool;

    async fn close(&self, wait: bool);

    /// Upcast used for typed downcasting.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}
