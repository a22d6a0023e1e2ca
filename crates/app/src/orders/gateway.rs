//! Order gateways.

use std::time::Duration;

use async_trait::async_trait;
use foodcart::prelude::{Order, OrderUuid};
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::orders::{errors::GatewayError, payload::OrderPayload};

/// Default latency of [`SimulatedOrderGateway`].
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Receipt returned by a gateway once it has accepted an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Order the acknowledgement refers to.
    pub order: OrderUuid,

    /// When the gateway accepted the order.
    pub received_at: Timestamp,
}

/// Backend that accepts placed orders.
#[automock]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit an order. Called once per placement and never retried.
    async fn submit(&self, order: &Order<'static>) -> Result<Acknowledgement, GatewayError>;
}

/// Gateway that logs the order payload and acknowledges after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedOrderGateway {
    delay: Duration,
}

impl SimulatedOrderGateway {
    /// Create a gateway that acknowledges after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured submission delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedOrderGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl OrderGateway for SimulatedOrderGateway {
    #[tracing::instrument(
        name = "orders.gateway.submit",
        skip_all,
        fields(order_uuid = %order.uuid(), user = %order.user()),
        err
    )]
    async fn submit(&self, order: &Order<'static>) -> Result<Acknowledgement, GatewayError> {
        let payload = serde_json::to_string(&OrderPayload::from(order))?;

        debug!(%payload, "submitting order");

        tokio::time::sleep(self.delay).await;

        info!(delay = ?self.delay, "order acknowledged");

        Ok(Acknowledgement {
            order: order.uuid(),
            received_at: Timestamp::now(),
        })
    }
}
