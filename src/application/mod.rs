//! Application layer orchestrating checkouts against shared stock.
//!
//! This module defines the `CheckoutService`, the entry point for placing
//! orders. It serializes every read-validate-commit sequence behind a `tokio`
//! mutex so the stock invariants hold under concurrent callers.

pub mod service;
