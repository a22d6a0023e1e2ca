//! Order placement and submission.

mod customer;
mod errors;
mod gateway;
mod payload;
mod service;

pub use customer::Customer;
pub use errors::{CheckoutError, GatewayError};
pub use gateway::{Acknowledgement, MockOrderGateway, OrderGateway, SimulatedOrderGateway};
pub use payload::{LineItemPayload, OrderPayload};
pub use service::{CheckoutService, GatewayCheckoutService, MockCheckoutService};
