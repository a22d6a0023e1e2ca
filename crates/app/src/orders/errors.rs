//! Order service errors.

use foodcart::prelude::OrderError;
use thiserror::Error;

/// Errors returned by an order gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend refused the order.
    #[error("order rejected: {0}")]
    Rejected(String),

    /// The order could not be encoded for submission.
    #[error("failed to encode order payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Errors returned while checking out a cart.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order snapshot could not be taken.
    #[error("failed to place order: {0}")]
    Order(#[from] OrderError),

    /// The gateway did not accept the order.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
