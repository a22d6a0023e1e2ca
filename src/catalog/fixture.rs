//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    items::{Item, ItemUuid},
};

/// Catalog file contents
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Currency code every item is priced in (e.g. "USD")
    pub currency: String,

    /// Menu entries, in display order
    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item identifier
    pub id: ItemUuid,

    /// Item name
    pub name: String,

    /// Item description
    #[serde(default)]
    pub description: String,

    /// Item price (e.g., "9.99 USD")
    pub price: String,

    /// Image reference
    #[serde(default)]
    pub image: String,
}

impl TryFrom<ItemFixture> for Item<'static> {
    type Error = CatalogError;

    fn try_from(fixture: ItemFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        if minor_units < 0 {
            return Err(CatalogError::NegativePrice(fixture.name));
        }

        Ok(Item::new(
            fixture.id,
            fixture.name,
            fixture.description,
            Money::from_minor(minor_units, currency),
            fixture.image,
        ))
    }
}

/// Parse price string (e.g., "9.99 USD") into minor units and currency
///
/// The amount may not carry more decimal places than the currency has minor units.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal or is more precise than the
/// currency allows, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = parse_currency(code)?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?
        .normalize();

    if amount.scale() > currency.exponent {
        return Err(CatalogError::InvalidPrice(format!(
            "{s} has more than {} decimal places",
            currency.exponent
        )));
    }

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|factor| amount.checked_mul(Decimal::from(factor)))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

/// Resolve a supported ISO currency code.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownCurrency`] for codes other than GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, CatalogError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(CatalogError::UnknownCurrency(other.to_string())),
    }
}
