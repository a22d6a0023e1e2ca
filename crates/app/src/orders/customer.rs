//! Order recipients.

use foodcart::prelude::UserId;

/// Who an order is for and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Ordering user
    pub user: UserId,

    /// Free-text delivery address; not validated
    pub delivery_address: Option<String>,
}

impl Customer {
    /// A customer with no delivery address.
    #[must_use]
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            delivery_address: None,
        }
    }

    /// Set the delivery address.
    #[must_use]
    pub fn with_delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = Some(address.into());
        self
    }
}
