//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use foodcart::prelude::{CartLedger, Order};
use mockall::automock;
use tracing::info;

use crate::orders::{customer::Customer, errors::CheckoutError, gateway::OrderGateway};

/// Places orders from a cart ledger.
#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Snapshot `ledger` into an order for `customer` and submit it.
    ///
    /// The ledger itself is never modified.
    async fn place_order(
        &self,
        ledger: &CartLedger<'static>,
        customer: &Customer,
    ) -> Result<Order<'static>, CheckoutError>;
}

/// Checkout service that submits every order through an [`OrderGateway`].
#[derive(Clone)]
pub struct GatewayCheckoutService {
    gateway: Arc<dyn OrderGateway>,
}

impl std::fmt::Debug for GatewayCheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayCheckoutService").finish_non_exhaustive()
    }
}

impl GatewayCheckoutService {
    /// Create a service that submits through `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CheckoutService for GatewayCheckoutService {
    #[tracing::instrument(
        name = "orders.service.place_order",
        skip_all,
        fields(
            user = %customer.user,
            line_items = ledger.len(),
            delivery = customer.delivery_address.is_some()
        ),
        err
    )]
    async fn place_order(
        &self,
        ledger: &CartLedger<'static>,
        customer: &Customer,
    ) -> Result<Order<'static>, CheckoutError> {
        let mut order = Order::place(ledger, customer.user.clone())?;

        if let Some(address) = &customer.delivery_address {
            order = order.with_delivery_address(address.clone());
        }

        let ack = self.gateway.submit(&order).await?;

        info!(order_uuid = %ack.order, total = %order.total(), "placed order");

        Ok(order)
    }
}
