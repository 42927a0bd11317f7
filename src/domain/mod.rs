//! Checkout domain: money, carts, stock, coupons and the validation pipeline.
//!
//! Nothing in here performs I/O; the only mutation is the inventory commit at
//! the end of a successful [`checkout::CheckoutValidator::checkout`].

pub mod cart;
pub mod checkout;
pub mod coupon;
pub mod inventory;
pub mod money;
pub mod order;
pub mod ports;
