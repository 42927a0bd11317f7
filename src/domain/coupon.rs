use super::money::Money;
use crate::error::{CheckoutError, Error, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Recognised coupon codes and the multiplier each applies to a subtotal.
///
/// Codes are matched case-insensitively after trimming. The default book
/// knows `SAVE10` (10% off).
#[derive(Debug, Clone, PartialEq)]
pub struct CouponBook {
    multipliers: HashMap<String, Decimal>,
}

impl Default for CouponBook {
    fn default() -> Self {
        Self {
            multipliers: HashMap::from([("SAVE10".to_string(), dec!(0.90))]),
        }
    }
}

impl CouponBook {
    /// A book that recognises no codes at all.
    pub fn empty() -> Self {
        Self {
            multipliers: HashMap::new(),
        }
    }

    /// Trims and uppercases a raw code. Blank input means "no coupon".
    pub fn normalize(raw: &str) -> Option<String> {
        let code = raw.trim();
        (!code.is_empty()).then(|| code.to_uppercase())
    }

    /// Registers `code` with a discount of `percent_off` percent, replacing
    /// any previous entry for the same code.
    pub fn with_percent_off(mut self, code: &str, percent_off: u8) -> Result<Self> {
        let code = Self::normalize(code)
            .ok_or_else(|| Error::Validation("Coupon code must not be blank".to_string()))?;
        if percent_off > 100 {
            return Err(Error::Validation(format!(
                "Coupon {code} discount must be between 0 and 100 percent, got {percent_off}"
            )));
        }
        let multiplier = (Decimal::ONE_HUNDRED - Decimal::from(percent_off)) / Decimal::ONE_HUNDRED;
        self.multipliers.insert(code, multiplier);
        Ok(self)
    }

    pub fn contains(&self, code: &str) -> bool {
        Self::normalize(code).is_some_and(|code| self.multipliers.contains_key(&code))
    }

    /// Applies `code` to `subtotal`.
    ///
    /// The discounted amount is truncated toward zero, never rounded:
    /// 10% off 999 is 899.
    pub fn apply(
        &self,
        subtotal: Money,
        code: Option<&str>,
    ) -> std::result::Result<Money, CheckoutError> {
        let Some(code) = code.and_then(Self::normalize) else {
            return Ok(subtotal);
        };
        let Some(multiplier) = self.multipliers.get(&code) else {
            return Err(CheckoutError::InvalidCoupon { code });
        };
        let discounted = (Decimal::from(subtotal.cents()) * *multiplier).trunc();
        // Multipliers are within [0, 1], so the result always fits.
        Ok(discounted
            .to_u64()
            .map(Money::from_cents)
            .unwrap_or(subtotal))
    }
}
