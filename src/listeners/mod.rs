//! # Listeners: named subscriptions of a topic.
//!
//! - [`Listen`] - trait implemented by event consumers
//! - [`ListenFn`] - closure-backed [`Listen`]
//! - `Listener` (internal) - bounded queue plus the consumer task driving a [`Listen`]

mod listen;
mod listen_fn;
mod listener;

pub use listen::Listen;
pub use listen_fn::ListenFn;

pub(crate) use listener::Listener;
