//! # Hub configuration.
//!
//! Provides [`HubConfig`], settings shared by a hub and every topic it creates.
//!
//! Config is used in two ways:
//! 1. **Hub creation**: `Hub::with_config(name, logger, config)`
//! 2. **Topic defaults**: copied into each topic at creation time

/// Configuration for a hub and its topics.
///
/// ## Field semantics
/// - `async_threshold`: listener count at which `PublishMode::Auto` switches to async fan-out
/// - `default_queue_capacity`: queue size used by `Topic::subscribe_default` (min 1)
#[derive(Clone, Debug)]
pub struct HubConfig {
    /// Listener count at or above which `PublishMode::Auto` dispatches on a separate task.
    ///
    /// With many listeners, blocking the publisher on sequential enqueue is
    /// expensive; with few, the extra task has no benefit.
    pub async_threshold: usize,

    /// Queue capacity for listeners subscribed without an explicit capacity.
    pub default_queue_capacity: usize,
}

impl HubConfig {
    /// Returns the default queue capacity clamped to a minimum of 1.
    #[inline]
    pub fn queue_capacity_clamped(&self) -> usize {
        self.default_queue_capacity.max(1)
    }
}

impl Default for HubConfig {
    /// Default configuration:
    ///
    /// - `async_threshold = 100`
    /// - `default_queue_capacity = 1024`
    fn default() -> Self {
        Self {
            async_threshold: 100,
            default_queue_capacity: 1024,
        }
    }
}
