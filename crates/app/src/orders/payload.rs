//! Wire representation of a placed order.

use foodcart::prelude::{ItemUuid, LineItem, LineItemUuid, Order, OrderUuid, UserId};
use jiff::Timestamp;
use serde::Serialize;

/// Order as submitted to a backend, with amounts in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    /// Order identifier
    pub uuid: OrderUuid,

    /// User the order was placed for
    pub user: UserId,

    /// ISO currency code of every amount
    pub currency: &'static str,

    /// Order total in minor units
    pub total_minor: i64,

    /// Placement time
    pub placed_at: Timestamp,

    /// Free-text delivery address, if any
    pub delivery_address: Option<String>,

    /// Ordered lines, in cart order
    pub items: Vec<LineItemPayload>,
}

/// One line of an [`OrderPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemPayload {
    /// Line item identifier
    pub uuid: LineItemUuid,

    /// Ordered item identifier
    pub item_uuid: ItemUuid,

    /// Item name at placement
    pub name: String,

    /// Unit price in minor units
    pub unit_price_minor: i64,

    /// Quantity ordered
    pub quantity: u32,
}

impl From<&LineItem<'_>> for LineItemPayload {
    fn from(line: &LineItem<'_>) -> Self {
        Self {
            uuid: line.uuid(),
            item_uuid: line.item_uuid(),
            name: line.item().name().to_string(),
            unit_price_minor: line.unit_price().to_minor_units(),
            quantity: line.quantity(),
        }
    }
}

impl From<&Order<'_>> for OrderPayload {
    fn from(order: &Order<'_>) -> Self {
        let total = order.total();

        Self {
            uuid: order.uuid(),
            user: order.user().clone(),
            currency: total.currency().iso_alpha_code,
            total_minor: total.to_minor_units(),
            placed_at: order.placed_at(),
            delivery_address: order.delivery_address().map(str::to_string),
            items: order.items().iter().map(LineItemPayload::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use foodcart::prelude::{CartLedger, Item};
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn payload_serializes_amounts_in_minor_units() -> TestResult {
        let pizza = Item::new(ItemUuid::new(), "Pizza", "", Money::from_minor(9_99, USD), "");
        let mut ledger = CartLedger::new(USD);

        ledger.add_item(&pizza, 2)?;

        let order = Order::place_at(&ledger, UserId::from("user-7"), Timestamp::UNIX_EPOCH)?;
        let json = serde_json::to_value(OrderPayload::from(&order))?;

        assert_eq!(json["user"], "user-7");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["total_minor"], 19_98);
        assert_eq!(json["items"][0]["name"], "Pizza");
        assert_eq!(json["items"][0]["unit_price_minor"], 9_99);
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["placed_at"], "1970-01-01T00:00:00Z");
        assert!(json["delivery_address"].is_null());

        Ok(())
    }

    #[test]
    fn payload_carries_delivery_address() -> TestResult {
        let order = Order::place(&CartLedger::new(USD), UserId::from("user-7"))?
            .with_delivery_address("221B Baker Street");

        let payload = OrderPayload::from(&order);

        assert_eq!(payload.delivery_address.as_deref(), Some("221B Baker Street"));
        assert_eq!(payload.total_minor, 0);
        assert!(payload.items.is_empty());

        Ok(())
    }
}
