//! Cart Ledger

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    items::{Item, ItemUuid},
    pricing::{TotalPriceError, line_total, total_price},
};

mod line_item;

pub use line_item::{LineItem, LineItemUuid};

/// Errors raised when changing the contents of a ledger.
///
/// A failed operation never changes the ledger.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// Items must be added at least once.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// The merged quantity, its line total or the ledger total no longer fits the numeric range.
    #[error("quantity of item {0} would overflow")]
    QuantityOverflow(ItemUuid),

    /// The item is priced in a different currency to the ledger (item currency, ledger currency).
    #[error("item has currency {0}, but ledger has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// Quantity-aggregated cart contents for a single in-progress order.
///
/// Line items keep the order in which their item was first added. Each item
/// appears at most once; adding it again increases the existing quantity.
#[derive(Debug, Clone)]
pub struct CartLedger<'a> {
    lines: Vec<LineItem<'a>>,
    index: FxHashMap<ItemUuid, usize>,
    currency: &'static Currency,
}

impl<'a> CartLedger<'a> {
    /// Create an empty ledger priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        CartLedger {
            lines: Vec::new(),
            index: FxHashMap::default(),
            currency,
        }
    }

    /// Add a single unit of `item`.
    ///
    /// # Errors
    ///
    /// See [`CartLedger::add_item`].
    pub fn add(&mut self, item: &Item<'a>) -> Result<LineItemUuid, LedgerError> {
        self.add_item(item, 1)
    }

    /// Add `quantity` units of `item`, merging with an existing line for the same item.
    ///
    /// Returns the identifier of the line item that now holds the item.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidQuantity`]: `quantity` is zero.
    /// - [`LedgerError::CurrencyMismatch`]: the item is priced in another currency.
    /// - [`LedgerError::QuantityOverflow`]: the merged quantity, line total or ledger total
    ///   is out of range.
    pub fn add_item(
        &mut self,
        item: &Item<'a>,
        quantity: u32,
    ) -> Result<LineItemUuid, LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }

        let item_currency = item.price().currency();

        if item_currency != self.currency {
            return Err(LedgerError::CurrencyMismatch(
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let total_fits = line_total(item.price(), quantity)
            .ok()
            .and_then(|added| self.total_minor()?.checked_add(added.to_minor_units()))
            .is_some();

        if !total_fits {
            return Err(LedgerError::QuantityOverflow(item.uuid()));
        }

        let existing = self
            .index
            .get(&item.uuid())
            .and_then(|&position| self.lines.get_mut(position));

        if let Some(line) = existing {
            let merged = line
                .quantity()
                .checked_add(quantity)
                .filter(|&merged| line_total(item.price(), merged).is_ok())
                .ok_or(LedgerError::QuantityOverflow(item.uuid()))?;

            line.set_quantity(merged);

            return Ok(line.uuid());
        }

        let line = LineItem::new(item.clone(), quantity);
        let uuid = line.uuid();

        self.index.insert(item.uuid(), self.lines.len());
        self.lines.push(line);

        Ok(uuid)
    }

    /// Remove a line item. Removing an unknown line item does nothing.
    pub fn remove_line_item(&mut self, line_item: LineItemUuid) -> Option<LineItem<'a>> {
        let position = self
            .lines
            .iter()
            .position(|line| line.uuid() == line_item)?;

        let removed = self.lines.remove(position);

        self.reindex();

        Some(removed)
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.index.clear();
    }

    /// Calculate the total price of the ledger.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the money arithmetic overflows.
    pub fn total_price(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.lines, self.currency)
    }

    /// Line items in the order their items were first added.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.lines
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.lines.iter()
    }

    /// Get the line item holding `item`, if any.
    pub fn get(&self, item: ItemUuid) -> Option<&LineItem<'a>> {
        self.index
            .get(&item)
            .and_then(|&position| self.lines.get(position))
    }

    /// Quantity of `item` in the ledger, zero when absent.
    pub fn quantity_of(&self, item: ItemUuid) -> u32 {
        self.get(item).map_or(0, LineItem::quantity)
    }

    /// Get the number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the ledger.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Sum of all line totals in minor units, `None` if it does not fit.
    fn total_minor(&self) -> Option<i64> {
        self.lines.iter().try_fold(0_i64, |acc, line| {
            acc.checked_add(line.line_total().ok()?.to_minor_units())
        })
    }

    fn reindex(&mut self) {
        self.index = self
            .lines
            .iter()
            .enumerate()
            .map(|(position, line)| (line.item_uuid(), position))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    fn pizza() -> Item<'static> {
        Item::new(
            ItemUuid::new(),
            "Pizza",
            "Delicious cheese pizza",
            Money::from_minor(9_99, USD),
            "pizza",
        )
    }

    fn burger() -> Item<'static> {
        Item::new(
            ItemUuid::new(),
            "Burger",
            "Juicy beef burger",
            Money::from_minor(5_99, USD),
            "burger",
        )
    }

    fn names(ledger: &CartLedger<'_>) -> Vec<(String, u32)> {
        ledger
            .iter()
            .map(|line| (line.item().name().to_string(), line.quantity()))
            .collect()
    }

    #[test]
    fn new_ledger_is_empty() -> TestResult {
        let ledger = CartLedger::new(USD);

        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.currency(), USD);
        assert_eq!(ledger.total_price()?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn add_merge_and_clear_scenario() -> TestResult {
        let pizza = pizza();
        let burger = burger();
        let mut ledger = CartLedger::new(USD);

        ledger.add(&pizza)?;
        assert_eq!(names(&ledger), vec![("Pizza".to_string(), 1)]);
        assert_eq!(ledger.total_price()?, Money::from_minor(9_99, USD));

        ledger.add(&burger)?;
        assert_eq!(
            names(&ledger),
            vec![("Pizza".to_string(), 1), ("Burger".to_string(), 1)]
        );
        assert_eq!(ledger.total_price()?, Money::from_minor(15_98, USD));

        ledger.add(&pizza)?;
        assert_eq!(
            names(&ledger),
            vec![("Pizza".to_string(), 2), ("Burger".to_string(), 1)]
        );
        assert_eq!(ledger.total_price()?, Money::from_minor(25_97, USD));

        ledger.clear();
        assert!(ledger.items().is_empty());
        assert_eq!(ledger.total_price()?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn re_adding_an_item_merges_into_the_same_line() -> TestResult {
        let pizza = pizza();
        let mut ledger = CartLedger::new(USD);

        let first = ledger.add_item(&pizza, 2)?;
        let second = ledger.add_item(&pizza, 3)?;

        assert_eq!(first, second);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.quantity_of(pizza.uuid()), 5);

        Ok(())
    }

    #[test]
    fn zero_quantity_is_rejected_without_changes() -> TestResult {
        let pizza = pizza();
        let mut ledger = CartLedger::new(USD);

        ledger.add(&pizza)?;

        let result = ledger.add_item(&pizza, 0);

        assert_eq!(result, Err(LedgerError::InvalidQuantity));
        assert_eq!(names(&ledger), vec![("Pizza".to_string(), 1)]);
        assert_eq!(ledger.total_price()?, Money::from_minor(9_99, USD));

        Ok(())
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let tea = Item::new(ItemUuid::new(), "Tea", "", Money::from_minor(250, GBP), "tea");
        let mut ledger = CartLedger::new(USD);

        let result = ledger.add(&tea);

        assert_eq!(
            result,
            Err(LedgerError::CurrencyMismatch(
                GBP.iso_alpha_code,
                USD.iso_alpha_code
            ))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn quantity_overflow_is_rejected_without_changes() -> TestResult {
        let pizza = pizza();
        let mut ledger = CartLedger::new(USD);

        ledger.add(&pizza)?;

        let result = ledger.add_item(&pizza, u32::MAX);

        assert_eq!(result, Err(LedgerError::QuantityOverflow(pizza.uuid())));
        assert_eq!(ledger.quantity_of(pizza.uuid()), 1);

        Ok(())
    }

    #[test]
    fn ledger_total_overflow_is_rejected_without_changes() -> TestResult {
        let half = i64::MAX / 2 + 10;
        let first = Item::new(ItemUuid::new(), "First", "", Money::from_minor(half, USD), "");
        let second = Item::new(ItemUuid::new(), "Second", "", Money::from_minor(half, USD), "");
        let mut ledger = CartLedger::new(USD);

        ledger.add(&first)?;

        let result = ledger.add(&second);

        assert_eq!(result, Err(LedgerError::QuantityOverflow(second.uuid())));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_price()?, Money::from_minor(half, USD));

        Ok(())
    }

    #[test]
    fn remove_line_item_keeps_remaining_order() -> TestResult {
        let pizza = pizza();
        let burger = burger();
        let pasta = Item::new(
            ItemUuid::new(),
            "Pasta",
            "Creamy pasta with sauce",
            Money::from_minor(7_99, USD),
            "pasta",
        );
        let mut ledger = CartLedger::new(USD);

        ledger.add(&pizza)?;
        let burger_line = ledger.add(&burger)?;
        ledger.add(&pasta)?;

        let removed = ledger.remove_line_item(burger_line);

        assert_eq!(removed.as_ref().map(LineItem::item_uuid), Some(burger.uuid()));
        assert_eq!(
            names(&ledger),
            vec![("Pizza".to_string(), 1), ("Pasta".to_string(), 1)]
        );

        // The index must follow the shifted positions.
        ledger.add(&pasta)?;
        assert_eq!(ledger.quantity_of(pasta.uuid()), 2);
        assert_eq!(ledger.quantity_of(burger.uuid()), 0);
        assert_eq!(ledger.total_price()?, Money::from_minor(25_97, USD));

        Ok(())
    }

    #[test]
    fn remove_unknown_line_item_is_a_no_op() -> TestResult {
        let mut ledger = CartLedger::new(USD);

        ledger.add(&pizza())?;

        assert!(ledger.remove_line_item(LineItemUuid::new()).is_none());
        assert_eq!(ledger.len(), 1);

        Ok(())
    }

    #[test]
    fn get_returns_line_for_item() -> TestResult {
        let pizza = pizza();
        let mut ledger = CartLedger::new(USD);

        let line = ledger.add_item(&pizza, 4)?;

        let found = ledger.get(pizza.uuid());

        assert_eq!(found.map(LineItem::uuid), Some(line));
        assert_eq!(found.map(LineItem::quantity), Some(4));
        assert!(ledger.get(ItemUuid::new()).is_none());

        Ok(())
    }
}
