use crate::domain::cart::Cart;
use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::Read;

/// An order row exactly as it appears in the CSV file.
#[derive(Debug, Deserialize)]
struct OrderRecord {
    order: u32,
    items: String,
    coupon: Option<String>,
    balance: u64,
}

impl TryFrom<OrderRecord> for Order {
    type Error = Error;

    fn try_from(record: OrderRecord) -> Result<Self> {
        let cart = parse_items(&record.items)
            .map_err(|reason| Error::InvalidRecord(format!("order {}: {reason}", record.order)))?;
        Ok(Order {
            id: record.order,
            cart,
            coupon: record.coupon.filter(|code| !code.trim().is_empty()),
            balance: Money::from_cents(record.balance),
        })
    }
}

/// Parses `SKU:QTY` pairs separated by whitespace or `;`.
fn parse_items(items: &str) -> std::result::Result<Cart, String> {
    let mut cart = Cart::new();
    for pair in items
        .split(|c: char| c == ';' || c.is_whitespace())
        .filter(|pair| !pair.is_empty())
    {
        let (sku, qty) = pair
            .split_once(':')
            .ok_or_else(|| format!("expected SKU:QTY, got '{pair}'"))?;
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(format!("missing SKU in '{pair}'"));
        }
        let qty: u32 = qty
            .trim()
            .parse()
            .map_err(|_| format!("invalid quantity in '{pair}'"))?;
        cart.add(sku, qty).map_err(|e| e.to_string())?;
    }
    if cart.is_empty() {
        return Err("no items".to_string());
    }
    Ok(cart)
}

/// Reads orders from a CSV source.
///
/// Expects the columns `order,items,coupon,balance`. Each row is converted
/// into a typed [`Order`] before it is handed out, so a malformed row shows up
/// as an `Err` item and never reaches the checkout pipeline.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts orders.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize::<OrderRecord>()
            .map(|result| result.map_err(Error::from).and_then(Order::try_from))
    }
}
