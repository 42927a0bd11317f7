use super::cart::Cart;
use super::money::Money;

/// One checkout attempt, fully parsed and ready for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub cart: Cart,
    pub coupon: Option<String>,
    pub balance: Money,
}
