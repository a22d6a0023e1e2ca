//! Orders

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ledger::{CartLedger, LineItem},
    pricing::TotalPriceError,
    uuids::TypedUuid,
};

pub mod summary;

/// Order UUID
pub type OrderUuid = TypedUuid<Order<'static>>;

/// Errors that can occur when placing an order.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    /// The ledger total could not be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// Identifier of the user an order belongs to.
///
/// Supplied by an identity provider; the value is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw user identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Immutable snapshot of a ledger at the moment of checkout.
///
/// The order owns copies of the line items, so changing or clearing the ledger
/// afterwards has no effect on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    uuid: OrderUuid,
    user: UserId,
    items: Vec<LineItem<'a>>,
    total: Money<'a, Currency>,
    placed_at: Timestamp,
    delivery_address: Option<String>,
}

impl<'a> Order<'a> {
    /// Snapshot `ledger` into a new order placed now.
    ///
    /// The ledger is left unchanged; an empty ledger produces an empty order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::TotalPrice`] if the ledger total cannot be calculated.
    pub fn place(ledger: &CartLedger<'a>, user: UserId) -> Result<Self, OrderError> {
        Self::place_at(ledger, user, Timestamp::now())
    }

    /// Snapshot `ledger` into a new order placed at `placed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::TotalPrice`] if the ledger total cannot be calculated.
    pub fn place_at(
        ledger: &CartLedger<'a>,
        user: UserId,
        placed_at: Timestamp,
    ) -> Result<Self, OrderError> {
        let total = ledger.total_price()?;

        Ok(Self {
            uuid: OrderUuid::new(),
            user,
            items: ledger.items().to_vec(),
            total,
            placed_at,
            delivery_address: None,
        })
    }

    /// Attach the address the order should be delivered to.
    ///
    /// The address is free text and is not validated.
    #[must_use]
    pub fn with_delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = Some(address.into());
        self
    }

    /// Order identifier
    pub fn uuid(&self) -> OrderUuid {
        self.uuid
    }

    /// User the order was placed for
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Line items captured at placement
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Total price captured at placement
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Placement time
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// Delivery address, if one was given
    pub fn delivery_address(&self) -> Option<&str> {
        self.delivery_address.as_deref()
    }

    /// Check if the order has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::items::{Item, ItemUuid};

    use super::*;

    fn item(name: &str, minor: i64) -> Item<'static> {
        Item::new(ItemUuid::new(), name, "", Money::from_minor(minor, USD), "")
    }

    #[test]
    fn order_captures_ledger_contents() -> TestResult {
        let pizza = item("Pizza", 9_99);
        let burger = item("Burger", 5_99);
        let at: Timestamp = "2024-11-27T12:00:00Z".parse()?;
        let mut ledger = CartLedger::new(USD);

        ledger.add_item(&pizza, 2)?;
        ledger.add(&burger)?;

        let order = Order::place_at(&ledger, UserId::from("user-1"), at)?;

        assert_eq!(order.user().as_str(), "user-1");
        assert_eq!(order.items(), ledger.items());
        assert_eq!(order.total(), Money::from_minor(25_97, USD));
        assert_eq!(order.placed_at(), at);

        Ok(())
    }

    #[test]
    fn order_is_isolated_from_later_ledger_changes() -> TestResult {
        let pizza = item("Pizza", 9_99);
        let mut ledger = CartLedger::new(USD);

        ledger.add(&pizza)?;

        let order = Order::place(&ledger, UserId::from("user-1"))?;

        ledger.add(&pizza)?;
        assert_eq!(order.items().first().map(LineItem::quantity), Some(1));

        ledger.clear();
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total(), Money::from_minor(9_99, USD));

        Ok(())
    }

    #[test]
    fn placing_does_not_clear_the_ledger() -> TestResult {
        let mut ledger = CartLedger::new(USD);

        ledger.add(&item("Pasta", 7_99))?;

        Order::place(&ledger, UserId::from("user-1"))?;

        assert_eq!(ledger.len(), 1);

        Ok(())
    }

    #[test]
    fn empty_ledger_places_an_empty_order() -> TestResult {
        let ledger = CartLedger::new(USD);

        let order = Order::place(&ledger, UserId::from("user-1"))?;

        assert!(order.is_empty());
        assert_eq!(order.total(), Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn delivery_address_is_optional() -> TestResult {
        let ledger = CartLedger::new(USD);

        let pickup = Order::place(&ledger, UserId::from("user-1"))?;
        let delivery = pickup.clone().with_delivery_address("1 Infinite Loop");

        assert_eq!(pickup.delivery_address(), None);
        assert_eq!(delivery.delivery_address(), Some("1 Infinite Loop"));
        assert_eq!(delivery.uuid(), pickup.uuid());

        Ok(())
    }

    #[test]
    fn each_order_gets_a_fresh_uuid() -> TestResult {
        let ledger = CartLedger::new(USD);

        let first = Order::place(&ledger, UserId::from("user-1"))?;
        let second = Order::place(&ledger, UserId::from("user-1"))?;

        assert_ne!(first.uuid(), second.uuid());

        Ok(())
    }
}
