//! Foodcart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    items::{Item, ItemUuid},
    ledger::{CartLedger, LedgerError, LineItem, LineItemUuid},
    orders::{
        Order, OrderError, OrderUuid, UserId,
        summary::{SummaryError, write_ledger, write_menu, write_order},
    },
    pricing::TotalPriceError,
    uuids::TypedUuid,
};
