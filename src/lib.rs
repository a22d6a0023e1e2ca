//! Foodcart
//!
//! Foodcart is the ordering core of a food-delivery menu: a catalog of purchasable items,
//! a quantity-merging cart ledger, and immutable order snapshots taken at checkout.

pub mod catalog;
pub mod items;
pub mod ledger;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod uuids;
