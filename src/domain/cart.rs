use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Stock keeping unit: the identifier of a sellable item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Requested quantities for a single checkout attempt.
///
/// Quantities are always positive. Lines iterate in SKU order, which keeps
/// the first reported out-of-stock item stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: BTreeMap<Sku, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from `(sku, quantity)` pairs, merging repeated SKUs.
    pub fn try_from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<Sku>,
    {
        let mut cart = Self::new();
        for (sku, qty) in lines {
            cart.add(sku, qty)?;
        }
        Ok(cart)
    }

    /// Adds `qty` units of `sku` to the cart.
    pub fn add(&mut self, sku: impl Into<Sku>, qty: u32) -> Result<()> {
        let sku = sku.into();
        if qty == 0 {
            return Err(Error::Validation(format!(
                "Quantity for {sku} must be positive"
            )));
        }
        let line = self.lines.entry(sku).or_default();
        *line = line
            .checked_add(qty)
            .ok_or_else(|| Error::Validation("Quantity overflow".to_string()))?;
        Ok(())
    }

    pub fn quantity(&self, sku: &str) -> u32 {
        self.lines.get(sku).copied().unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Sku, u32)> {
        self.lines.iter().map(|(sku, qty)| (sku, *qty))
    }

    pub fn skus(&self) -> impl Iterator<Item = &Sku> {
        self.lines.keys()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
