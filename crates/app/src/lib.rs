//! Foodcart application services: order submission, cart sessions and the CLI.

pub mod cli;
pub mod config;
pub mod observability;
pub mod orders;
pub mod session;
