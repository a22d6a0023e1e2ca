//! Cart Sessions

use foodcart::prelude::{CartLedger, Item, LedgerError, LineItemUuid, Order, UserId};
use rusty_money::iso::Currency;
use tracing::debug;

use crate::orders::{CheckoutError, CheckoutService, Customer};

/// One user's shopping session: who is ordering and what is in their cart.
#[derive(Debug, Clone)]
pub struct CartSession {
    customer: Customer,
    ledger: CartLedger<'static>,
}

impl CartSession {
    /// Start a session with an empty cart priced in `currency`.
    #[must_use]
    pub fn new(user: UserId, currency: &'static Currency) -> Self {
        Self {
            customer: Customer::new(user),
            ledger: CartLedger::new(currency),
        }
    }

    /// Ordering user
    pub fn user(&self) -> &UserId {
        &self.customer.user
    }

    /// Where the order will be delivered, if set
    pub fn delivery_address(&self) -> Option<&str> {
        self.customer.delivery_address.as_deref()
    }

    /// Set or clear the delivery address used at checkout.
    pub fn set_delivery_address(&mut self, address: Option<String>) {
        self.customer.delivery_address = address;
    }

    /// Current cart contents
    pub fn ledger(&self) -> &CartLedger<'static> {
        &self.ledger
    }

    /// Mutable access to the cart, e.g. to remove lines
    pub fn ledger_mut(&mut self) -> &mut CartLedger<'static> {
        &mut self.ledger
    }

    /// Add `quantity` of `item` to the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if the quantity is zero, the item is priced in
    /// another currency or the line quantity would overflow.
    pub fn add(
        &mut self,
        item: &Item<'static>,
        quantity: u32,
    ) -> Result<LineItemUuid, LedgerError> {
        let line = self.ledger.add_item(item, quantity)?;

        debug!(user = %self.customer.user, item = item.name(), quantity, "added item to cart");

        Ok(line)
    }

    /// Place an order for the cart contents.
    ///
    /// The cart is cleared once the order has been acknowledged. If placement
    /// fails, the cart is left as it was.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the order cannot be placed.
    pub async fn checkout(
        &mut self,
        service: &dyn CheckoutService,
    ) -> Result<Order<'static>, CheckoutError> {
        let order = service.place_order(&self.ledger, &self.customer).await?;

        self.ledger.clear();

        Ok(order)
    }
}
