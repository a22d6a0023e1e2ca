//! Items

use rusty_money::{Money, iso::Currency};

use crate::uuids::TypedUuid;

/// Item UUID
pub type ItemUuid = TypedUuid<Item<'static>>;

/// A purchasable menu entry.
///
/// Items are created when the catalog is loaded and never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<'a> {
    uuid: ItemUuid,
    name: String,
    description: String,
    price: Money<'a, Currency>,
    image: String,
}

impl<'a> Item<'a> {
    /// Creates a new item.
    pub fn new(
        uuid: ItemUuid,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money<'a, Currency>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        }
    }

    /// Returns the item identifier
    pub fn uuid(&self) -> ItemUuid {
        self.uuid
    }

    /// Returns the item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the opaque image reference
    pub fn image(&self) -> &str {
        &self.image
    }
}
