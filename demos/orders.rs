//! # Example: orders
//!
//! Demonstrates a hub with one typed topic and two listeners.
//!
//! Shows how to:
//! - Create a [`Hub`] and a typed topic.
//! - Subscribe a closure and a custom [`Listen`] implementation.
//! - Publish in `Sync` mode and observe a panicking listener being isolated.
//! - Unsubscribe mid-stream and close the hub, waiting for listeners to drain.
//!
//! ## Flow
//! ```text
//! Hub "shop"
//!  └─► Topic<Order> "orders"
//!        ├─► [queue] ─► "billing" (closure)
//!        └─► [queue] ─► "audit"   (Listen impl, panics on refunds)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example orders --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use evhub::{Hub, Listen, LogWriter, PublishMode};

#[derive(Debug, Clone)]
struct Order {
    id: u32,
    cents: i64,
}

struct Audit;

#[async_trait]
impl Listen<Order> for Audit {
    async fn on_event(&self, order: &Order) {
        if order.cents < 0 {
            panic!("refunds are not audited yet (order {})", order.id);
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        println!("[audit] order={} cents={}", order.id, order.cents);
    }
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> anyhow::Result<()> {
    let hub = Hub::new("shop", Arc::new(LogWriter::new()));
    let orders = hub.create_topic::<Order>("orders").await?;

    orders
        .subscribe_fn(
            "billing",
            |o: &Order| println!("[billing] charge order={} cents={}", o.id, o.cents),
            16,
        )
        .await?;
    orders.subscribe("audit", Arc::new(Audit), 4).await?;

    for (id, cents) in [(1, 1200), (2, -300), (3, 450)] {
        orders
            .publish(PublishMode::Sync, Order { id, cents })
            .await?;
    }

    // billing stops after order 3; audit keeps going
    orders.unsubscribe("billing").await;
    orders
        .publish(PublishMode::Auto, Order { id: 4, cents: 99 })
        .await?;

    hub.close(true).await;
    println!("last event id: {}", orders.curr_event_id());
    Ok(())
}
