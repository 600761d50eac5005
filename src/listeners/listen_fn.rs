//! # Function-backed listener (`ListenFn`)
//!
//! [`ListenFn`] wraps a plain closure `F: Fn(&K)`, so simple consumers do not
//! need a dedicated type.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use evhub::{Listen, ListenFn};
//!
//! let l: Arc<dyn Listen<i32>> = ListenFn::arc(|v: &i32| println!("got {v}"));
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::listeners::Listen;

/// Closure-backed [`Listen`] implementation.
#[derive(Debug)]
pub struct ListenFn<F> {
    f: F,
}

impl<F> ListenFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<K, F> Listen<K> for ListenFn<F>
where
    K: Send + Sync + 'static,
    F: Fn(&K) + Send + Sync + 'static,
{
    async fn on_event(&self, payload: &K) {
        (self.f)(payload)
    }
}
