//! Order Summaries
//!
//! Plain-text tables for the menu, the current cart and placed orders.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    items::Item,
    ledger::{CartLedger, LineItem},
    orders::Order,
    pricing::TotalPriceError,
};

/// Errors that can occur when writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A line or order total could not be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write the given menu items as a table.
///
/// # Errors
///
/// Returns [`SummaryError::Io`] if the output cannot be written.
pub fn write_menu(mut out: impl io::Write, items: &[&Item<'_>]) -> Result<(), SummaryError> {
    if items.is_empty() {
        writeln!(out, "No menu items found.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Description", "Price"]);

    for item in items {
        builder.push_record([
            item.name().to_string(),
            item.description().to_string(),
            format!("{}", item.price()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the current cart contents and total.
///
/// # Errors
///
/// Returns an error if a total cannot be calculated or the output cannot be written.
pub fn write_ledger(
    mut out: impl io::Write,
    ledger: &CartLedger<'_>,
) -> Result<(), SummaryError> {
    if ledger.is_empty() {
        writeln!(out, "Your cart is empty.")?;

        return Ok(());
    }

    writeln!(out, "{}", lines_table(ledger.items())?)?;
    writeln!(out, " Total: {}", ledger.total_price()?)?;

    Ok(())
}

/// Write a placed order with its line items and total.
///
/// # Errors
///
/// Returns an error if a line total cannot be calculated or the output cannot be written.
pub fn write_order(mut out: impl io::Write, order: &Order<'_>) -> Result<(), SummaryError> {
    writeln!(
        out,
        "Order {} for {} placed at {}",
        order.uuid(),
        order.user(),
        order.placed_at()
    )?;

    if let Some(address) = order.delivery_address() {
        writeln!(out, "Deliver to: {address}")?;
    }

    if !order.is_empty() {
        writeln!(out, "{}", lines_table(order.items())?)?;
    }

    writeln!(out, " Total: {}", order.total())?;

    Ok(())
}

fn lines_table(lines: &[LineItem<'_>]) -> Result<String, TotalPriceError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Price", "Qty", "Line Total"]);

    for (idx, line) in lines.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            line.item().name().to_string(),
            format!("{}", line.unit_price()),
            line.quantity().to_string(),
            format!("{}", line.line_total()?),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::{items::ItemUuid, orders::UserId};

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

    #[test]
    fn empty_ledger_prints_empty_message() -> TestResult {
        let ledger = CartLedger::new(USD);
        let mut out = Vec::new();

        write_ledger(&mut out, &ledger)?;

        assert_eq!(String::from_utf8(out)?, "Your cart is empty.\n");

        Ok(())
    }

    #[test]
    fn ledger_summary_lists_lines_and_total() -> TestResult {
        let mut ledger = CartLedger::new(USD);
        let mut out = Vec::new();

        ledger.add_item(&pizza(), 2)?;

        write_ledger(&mut out, &ledger)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Pizza"), "missing item name in {text}");
        assert!(text.contains("$19.98"), "missing line total in {text}");
        assert!(text.contains("Total: $19.98"), "missing total in {text}");

        Ok(())
    }

    #[test]
    fn menu_lists_items_with_prices() -> TestResult {
        let pizza = pizza();
        let mut out = Vec::new();

        write_menu(&mut out, &[&pizza])?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Delicious cheese pizza"), "missing description in {text}");
        assert!(text.contains("$9.99"), "missing price in {text}");

        Ok(())
    }

    #[test]
    fn order_summary_includes_user_and_total() -> TestResult {
        let mut ledger = CartLedger::new(USD);
        let mut out = Vec::new();

        ledger.add(&pizza())?;

        let order = Order::place_at(&ledger, UserId::from("guest"), Timestamp::UNIX_EPOCH)?;

        write_order(&mut out, &order)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains(&order.uuid().to_string()), "missing uuid in {text}");
        assert!(text.contains("for guest"), "missing user in {text}");
        assert!(text.contains("Total: $9.99"), "missing total in {text}");
        assert!(!text.contains("Deliver to"), "unexpected address in {text}");

        Ok(())
    }

    #[test]
    fn order_summary_includes_delivery_address() -> TestResult {
        let ledger = CartLedger::new(USD);
        let mut out = Vec::new();

        let order = Order::place_at(&ledger, UserId::from("guest"), Timestamp::UNIX_EPOCH)?
            .with_delivery_address("12 High Street");

        write_order(&mut out, &order)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Deliver to: 12 High Street"), "missing address in {text}");

        Ok(())
    }
}
