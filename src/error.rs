use crate::domain::money::Money;
use thiserror::Error;

/// A checkout attempt that was refused.
///
/// Every variant aborts only the current attempt: inventory and balance are
/// left exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Out of stock: {sku} (requested {requested}, available {available})")]
    OutOfStock {
        sku: String,
        requested: u32,
        available: u32,
    },
    #[error("Unknown coupon: {code}")]
    InvalidCoupon { code: String },
    #[error("Insufficient funds: need {required}, have {available}")]
    PaymentDeclined { required: Money, available: Money },
    /// The cart references a SKU the price list does not know about.
    ///
    /// Points at a gap in the catalog rather than at bad order input.
    #[error("No price for {sku}")]
    UnpricedItem { sku: String },
    /// Adding this line pushes the subtotal past the largest `Money` amount.
    #[error("Order amount too large: {sku} x {quantity} overflows the subtotal")]
    AmountOverflow { sku: String, quantity: u32 },
}

impl CheckoutError {
    /// Stable label for reports and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OutOfStock { .. } => "out_of_stock",
            Self::InvalidCoupon { .. } => "invalid_coupon",
            Self::PaymentDeclined { .. } => "payment_declined",
            Self::UnpricedItem { .. } => "unpriced_item",
            Self::AmountOverflow { .. } => "amount_overflow",
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

pub type Result<T> = std::result::Result<T, Error>;
