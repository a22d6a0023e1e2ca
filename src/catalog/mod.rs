//! Catalog

use std::{fs, path::Path};

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::items::{Item, ItemUuid};

pub mod fixture;

use fixture::{CatalogFixture, parse_currency};

const BUILTIN_CATALOG: &str = include_str!("../../fixtures/catalog/default.yml");

/// Catalog Loading Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Price below zero
    #[error("Item {0} has a negative price")]
    NegativePrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Item priced in a currency other than the catalog's
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The same identifier was used for two items
    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemUuid),
}

/// The fixed set of purchasable items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item<'static>>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create a catalog from already-built items.
    ///
    /// # Errors
    ///
    /// Returns an error if an item is priced in another currency or if two items
    /// share an identifier.
    pub fn with_items(
        items: impl Into<Vec<Item<'static>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let items = items.into();
        let mut seen = FxHashSet::default();

        for item in &items {
            let item_currency = item.price().currency();

            if item_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    currency.iso_alpha_code.to_string(),
                    item_currency.iso_alpha_code.to_string(),
                ));
            }

            if !seen.insert(item.uuid()) {
                return Err(CatalogError::DuplicateItem(item.uuid()));
            }
        }

        Ok(Self { items, currency })
    }

    /// The default menu bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled menu cannot be parsed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or any entry is invalid.
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;
        let currency = parse_currency(&fixture.currency)?;

        let items = fixture
            .items
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_items(items, currency)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// All items, in catalog order.
    pub fn list(&self) -> &[Item<'static>] {
        &self.items
    }

    /// Look up an item by identifier.
    pub fn get(&self, uuid: ItemUuid) -> Option<&Item<'static>> {
        self.items.iter().find(|item| item.uuid() == uuid)
    }

    /// Look up an item by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Item<'static>> {
        let name = name.trim().to_lowercase();

        self.items
            .iter()
            .find(|item| item.name().to_lowercase() == name)
    }

    /// Items whose name contains `query`, ignoring case. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Item<'static>> {
        let query = query.trim().to_lowercase();

        self.items
            .iter()
            .filter(|item| query.is_empty() || item.name().to_lowercase().contains(&query))
            .collect()
    }

    /// Get the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency all items are priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
