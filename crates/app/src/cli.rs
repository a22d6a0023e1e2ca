//! Command dispatch for the `foodcart` binary.

use std::{io, sync::Arc};

use foodcart::prelude::{
    Catalog, CatalogError, LedgerError, SummaryError, UserId, write_ledger, write_menu, write_order,
};
use thiserror::Error;
use tracing::info;

use crate::{
    config::{AppConfig, Command, MenuArgs, OrderArgs},
    orders::{CheckoutError, GatewayCheckoutService, SimulatedOrderGateway},
    session::CartSession,
};

/// Errors surfaced by a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The menu could not be loaded.
    #[error("failed to load menu: {0}")]
    Catalog(#[from] CatalogError),

    /// No menu item has the requested name.
    #[error("no menu item named {0:?}")]
    UnknownItem(String),

    /// The cart rejected an item.
    #[error("failed to add item to cart: {0}")]
    Ledger(#[from] LedgerError),

    /// The order could not be placed.
    #[error("checkout failed: {0}")]
    Checkout(#[from] CheckoutError),

    /// A table could not be rendered.
    #[error("failed to write summary: {0}")]
    Summary(#[from] SummaryError),

    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Run the configured command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if the menu cannot be loaded, an item is unknown or
/// rejected by the cart, or the order cannot be placed.
pub async fn run(config: AppConfig, mut out: impl io::Write) -> Result<(), CliError> {
    let catalog = match &config.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    info!(items = catalog.len(), "loaded menu");

    match config.command {
        Command::Menu(args) => menu(&catalog, &args, &mut out),
        Command::Order(args) => order(&catalog, args, &mut out).await,
    }
}

fn menu(catalog: &Catalog, args: &MenuArgs, out: impl io::Write) -> Result<(), CliError> {
    let items = catalog.search(args.search.as_deref().unwrap_or_default());

    write_menu(out, &items)?;

    Ok(())
}

async fn order(
    catalog: &Catalog,
    args: OrderArgs,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let delay = args.checkout_delay();
    let mut session = CartSession::new(UserId::from(args.user), catalog.currency());

    session.set_delivery_address(args.delivery_address);

    for selection in args.items {
        let item = catalog
            .find_by_name(&selection.name)
            .ok_or(CliError::UnknownItem(selection.name))?;

        session.add(item, selection.quantity)?;
    }

    write_ledger(&mut out, session.ledger())?;
    writeln!(out, "Placing your order...")?;

    let service = GatewayCheckoutService::new(Arc::new(SimulatedOrderGateway::new(delay)));
    let order = session.checkout(&service).await?;

    write_order(&mut out, &order)?;
    writeln!(out, "Order placed successfully!")?;

    Ok(())
}
