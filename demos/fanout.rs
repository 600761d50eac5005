//! # Example: fanout
//!
//! Wide fan-out with `PublishMode::Auto` and `tracing` output.
//!
//! 150 listeners exceed the default async threshold (100), so `publish` hands
//! the fan-out to a spawned task and returns immediately.
//!
//! ## Run
//! ```bash
//! RUST_LOG=evhub=info cargo run --example fanout
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use evhub::{Hub, PublishMode, TracingLogger};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let hub = Hub::new("metrics", Arc::new(TracingLogger));
    let ticks = hub.create_topic::<u64>("ticks").await?;
    let total = Arc::new(AtomicU64::new(0));

    for i in 0..150 {
        let total = Arc::clone(&total);
        ticks
            .subscribe_fn(
                format!("sink-{i}"),
                move |v: &u64| {
                    total.fetch_add(*v, Ordering::Relaxed);
                },
                8,
            )
            .await?;
    }

    for v in 1..=10u64 {
        ticks.publish(PublishMode::Auto, v).await?;
    }

    // let the spawned fan-outs reach every queue before stopping listeners
    while total.load(Ordering::Relaxed) < 150 * 55 {
        tokio::task::yield_now().await;
    }

    hub.close(true).await;
    println!("sum over all listeners: {}", total.load(Ordering::Relaxed));
    Ok(())
}
