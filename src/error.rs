//! Error types used by the hub and its topics.
//!
//! This module defines two error enums:
//!
//! - [`HubError`]: structural errors raised while registering or looking up topics.
//! - [`TopicError`]: errors raised by topic operations (subscribe, publish).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Failures of listener callbacks are **not** represented here: they never reach
//! the caller and are reported only through the [`Logger`](crate::Logger).

use thiserror::Error;

/// # Errors produced by the hub registry.
///
/// These indicate wiring bugs (two components creating the same topic, or a
/// caller using the wrong payload type against an established topic) and must
/// be handled by the caller.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HubError {
    /// A topic with this name is already registered in the hub.
    #[error("duplicated topic '{topic}'")]
    DuplicateTopic {
        /// Name of the topic.
        topic: String,
    },

    /// The topic exists but carries a different payload type.
    #[error("topic '{topic}': expected event type is {expected}, but got {actual}")]
    TypeMismatch {
        /// Name of the topic.
        topic: String,
        /// Payload type requested by the caller.
        expected: &'static str,
        /// Payload type the topic was created with.
        actual: &'static str,
    },

    /// The hub has been closed and no longer accepts topics.
    #[error("hub '{hub}' is closed")]
    Closed {
        /// Name of the hub.
        hub: String,
    },
}

impl HubError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evhub::HubError;
    ///
    /// let err = HubError::DuplicateTopic { topic: "orders".into() };
    /// assert_eq!(err.as_label(), "hub_duplicate_topic");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HubError::DuplicateTopic { .. } => "hub_duplicate_topic",
            HubError::TypeMismatch { .. } => "hub_type_mismatch",
            HubError::Closed { .. } => "hub_closed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HubError::DuplicateTopic { topic } => format!("duplicate topic: {topic}"),
            HubError::TypeMismatch {
                topic,
                expected,
                actual,
            } => format!("type mismatch on {topic}: expected={expected} actual={actual}"),
            HubError::Closed { hub } => format!("closed: {hub}"),
        }
    }
}

/// # Errors produced by topic operations.
///
/// A duplicate listener is an "expected to sometimes happen" condition: it is
/// logged and reported here, never turned into a panic.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
    /// A listener with this name is already subscribed.
    #[error("duplicated listener '{listener}' on topic '{topic}' (#{position})")]
    DuplicateListener {
        /// Name of the topic.
        topic: String,
        /// Name of the listener.
        listener: String,
        /// 1-based position of the already subscribed listener.
        position: usize,
    },

    /// The topic has been closed and no longer accepts listeners or events.
    #[error("topic '{topic}' is closed")]
    Closed {
        /// Name of the topic.
        topic: String,
    },
}

impl TopicError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evhub::TopicError;
    ///
    /// let err = TopicError::Closed { topic: "orders".into() };
    /// assert_eq!(err.as_label(), "topic_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TopicError::DuplicateListener { .. } => "topic_duplicate_listener",
            TopicError::Closed { .. } => "topic_closed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TopicError::DuplicateListener {
                listener, position, ..
            } => format!("duplicated listener {listener} on #{position}"),
            TopicError::Closed { topic } => format!("closed: {topic}"),
        }
    }
}
