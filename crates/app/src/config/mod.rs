//! CLI configuration

use std::{num::ParseIntError, path::PathBuf, str::FromStr, time::Duration};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

pub mod observability;

pub use observability::{LogFormat, LoggingConfig};

/// Foodcart configuration
#[derive(Debug, Parser)]
#[command(name = "foodcart", about = "Browse the menu and place food orders", long_about = None)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Menu file (YAML); the bundled menu is used when omitted
    #[arg(long, env = "FOODCART_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List menu items
    Menu(MenuArgs),

    /// Build a cart and place an order
    Order(OrderArgs),
}

/// Arguments for `menu`.
#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Only show items whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for `order`.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// User the order is placed for
    #[arg(short, long, env = "FOODCART_USER", default_value = "guest")]
    pub user: String,

    /// Item to add, as NAME or NAME:QTY (repeatable)
    #[arg(short = 'a', long = "add", value_name = "NAME[:QTY]")]
    pub items: Vec<ItemSelection>,

    /// Delivery address for the order (free text)
    #[arg(short, long, env = "FOODCART_DELIVERY_ADDRESS")]
    pub delivery_address: Option<String>,

    /// Simulated order submission latency in milliseconds
    #[arg(long, env = "CHECKOUT_DELAY_MS", default_value_t = 2_000)]
    pub checkout_delay_ms: u64,
}

impl OrderArgs {
    /// Simulated order submission latency.
    #[must_use]
    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }
}

/// Errors parsing an item selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemSelectionError {
    /// No item name was given.
    #[error("item name cannot be empty")]
    EmptyName,

    /// The quantity was not a whole number.
    #[error("invalid quantity {0:?}: {1}")]
    InvalidQuantity(String, #[source] ParseIntError),
}

/// An item name with the quantity to add, parsed from `NAME[:QTY]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelection {
    /// Menu item name, matched case-insensitively.
    pub name: String,

    /// Quantity to add; defaults to 1. Zero is rejected by the cart, not here.
    pub quantity: u32,
}

impl FromStr for ItemSelection {
    type Err = ItemSelectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Only a trailing `:DIGITS` is a quantity; other colons belong to the name.
        let (name, quantity) = match value.rsplit_once(':') {
            Some((name, quantity))
                if !quantity.trim().is_empty()
                    && quantity.trim().bytes().all(|byte| byte.is_ascii_digit()) =>
            {
                let quantity = quantity.trim();

                (
                    name,
                    quantity.parse().map_err(|error| {
                        ItemSelectionError::InvalidQuantity(quantity.to_string(), error)
                    })?,
                )
            }
            _ => (value, 1),
        };

        let name = name.trim();

        if name.is_empty() {
            return Err(ItemSelectionError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            quantity,
        })
    }
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
