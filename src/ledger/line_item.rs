//! Line Items

use rusty_money::{Money, iso::Currency};

use crate::{
    items::{Item, ItemUuid},
    pricing::{TotalPriceError, line_total},
    uuids::TypedUuid,
};

/// Line Item UUID
pub type LineItemUuid = TypedUuid<LineItem<'static>>;

/// One cart entry: an item and how many of it were ordered.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem<'a> {
    uuid: LineItemUuid,
    item: Item<'a>,
    quantity: u32,
}

impl<'a> LineItem<'a> {
    /// Creates a line item with a fresh identifier.
    ///
    /// Callers are responsible for `quantity >= 1`; the ledger checks this before
    /// creating entries.
    pub(crate) fn new(item: Item<'a>, quantity: u32) -> Self {
        Self {
            uuid: LineItemUuid::new(),
            item,
            quantity,
        }
    }

    /// Returns the line item identifier
    pub fn uuid(&self) -> LineItemUuid {
        self.uuid
    }

    /// Returns the ordered item
    pub fn item(&self) -> &Item<'a> {
        &self.item
    }

    /// Returns the identifier of the ordered item
    pub fn item_uuid(&self) -> ItemUuid {
        self.item.uuid()
    }

    /// Returns the quantity ordered
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price of the ordered item
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        self.item.price()
    }

    /// Calculates `quantity × unit price`.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the total does not fit in minor units.
    pub fn line_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_total(self.item.price(), self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
