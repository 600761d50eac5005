//! Hub core: registry, typed topics and their configuration.
//!
//! Internal modules:
//! - [`hub`]: named registry of topics, type-checked lookup, coordinated close;
//! - [`topic`]: typed channel owning listeners, event ids and publish modes;
//! - [`any_topic`]: type-erased topic handle stored by the hub;
//! - [`payload`]: payload type identity token;
//! - [`config`]: settings shared by a hub and its topics.

mod any_topic;
mod config;
mod hub;
mod payload;
mod topic;

pub use any_topic::AnyTopic;
pub use config::HubConfig;
pub use hub::Hub;
pub use payload::PayloadType;
pub use topic::{PublishMode, Topic};
