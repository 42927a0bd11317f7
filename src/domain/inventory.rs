use super::cart::{Cart, Sku};
use super::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Available quantity per SKU. A SKU with no entry has nothing available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    stock: HashMap<Sku, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self, sku: &str) -> u32 {
        self.stock.get(sku).copied().unwrap_or(0)
    }

    pub fn set(&mut self, sku: impl Into<Sku>, available: u32) {
        self.stock.insert(sku.into(), available);
    }

    pub fn get(&self, sku: &str) -> Option<u32> {
        self.stock.get(sku).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sku, u32)> {
        self.stock.iter().map(|(sku, qty)| (sku, *qty))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// The first cart line asking for more than is available, as
    /// `(sku, requested, available)`.
    pub(crate) fn first_shortage<'a>(&self, cart: &'a Cart) -> Option<(&'a Sku, u32, u32)> {
        cart.lines().find_map(|(sku, requested)| {
            let available = self.available(sku.as_str());
            (requested > available).then_some((sku, requested, available))
        })
    }

    /// Removes the cart's quantities from stock.
    ///
    /// Callers must have checked `first_shortage` first; quantities never go
    /// below zero.
    pub(crate) fn commit(&mut self, cart: &Cart) {
        for (sku, qty) in cart.lines() {
            let remaining = self.available(sku.as_str()).saturating_sub(qty);
            self.stock.insert(sku.clone(), remaining);
        }
    }
}

impl<S: Into<Sku>> FromIterator<(S, u32)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            stock: iter.into_iter().map(|(sku, qty)| (sku.into(), qty)).collect(),
        }
    }
}

/// Unit price per SKU. Read-only during checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceList {
    prices: HashMap<Sku, Money>,
}

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, sku: impl Into<Sku>, unit_price: Money) {
        self.prices.insert(sku.into(), unit_price);
    }

    pub fn unit_price(&self, sku: &str) -> Option<Money> {
        self.prices.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<S: Into<Sku>> FromIterator<(S, Money)> for PriceList {
    fn from_iter<T: IntoIterator<Item = (S, Money)>>(iter: T) -> Self {
        Self {
            prices: iter
                .into_iter()
                .map(|(sku, price)| (sku.into(), price))
                .collect(),
        }
    }
}
