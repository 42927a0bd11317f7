use super::cart::Cart;
use super::coupon::CouponBook;
use super::inventory::{Inventory, PriceList};
use super::money::Money;
use crate::error::CheckoutError;

/// What a successful checkout charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Sum of the line totals before any coupon.
    pub subtotal: Money,
    /// The amount actually charged.
    pub total: Money,
}

/// Validates a cart and, only if every check passes, takes its items out of
/// stock.
///
/// The pipeline runs stock, pricing, coupon and balance checks in that order
/// and stops at the first failure. `inventory` is written to by the final
/// commit step and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct CheckoutValidator {
    coupons: CouponBook,
}

impl CheckoutValidator {
    pub fn new(coupons: CouponBook) -> Self {
        Self { coupons }
    }

    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    pub fn checkout(
        &self,
        cart: &Cart,
        inventory: &mut Inventory,
        prices: &PriceList,
        coupon: Option<&str>,
        balance: Money,
    ) -> Result<Receipt, CheckoutError> {
        if let Some((sku, requested, available)) = inventory.first_shortage(cart) {
            return Err(CheckoutError::OutOfStock {
                sku: sku.to_string(),
                requested,
                available,
            });
        }

        let subtotal = subtotal(cart, prices)?;
        let total = self.coupons.apply(subtotal, coupon)?;

        if balance < total {
            return Err(CheckoutError::PaymentDeclined {
                required: total,
                available: balance,
            });
        }

        inventory.commit(cart);
        Ok(Receipt { subtotal, total })
    }
}

/// Runs a checkout with the default coupon book and returns the charged total.
pub fn checkout(
    cart: &Cart,
    inventory: &mut Inventory,
    prices: &PriceList,
    coupon: Option<&str>,
    balance: Money,
) -> Result<Money, CheckoutError> {
    CheckoutValidator::default()
        .checkout(cart, inventory, prices, coupon, balance)
        .map(|receipt| receipt.total)
}

fn subtotal(cart: &Cart, prices: &PriceList) -> Result<Money, CheckoutError> {
    cart.lines().try_fold(Money::ZERO, |subtotal, (sku, qty)| {
        let price = prices
            .unit_price(sku.as_str())
            .ok_or_else(|| CheckoutError::UnpricedItem {
                sku: sku.to_string(),
            })?;
        price
            .checked_multiply_quantity(qty)
            .and_then(|line| subtotal.checked_add(line))
            .ok_or_else(|| CheckoutError::AmountOverflow {
                sku: sku.to_string(),
                quantity: qty,
            })
    })
}
