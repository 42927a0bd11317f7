pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod telemetry;

pub use domain::checkout::{CheckoutValidator, Receipt, checkout};
pub use error::{CheckoutError, Error, Result};
