#![allow(dead_code)]

use rand::Rng;
use std::fs;
use std::io::Error;
use std::path::{Path, PathBuf};

/// Stock and price files for the checkout lab: SKU1 x3 at 500, SKU2 x10 at 200.
pub struct Catalog {
    pub stock: PathBuf,
    pub prices: PathBuf,
}

pub fn write_lab_catalog(dir: &Path) -> Result<Catalog, Error> {
    let stock = dir.join("stock.csv");
    let prices = dir.join("prices.json");
    fs::write(&stock, "sku,available\nSKU1,3\nSKU2,10\n")?;
    fs::write(&prices, r#"{"SKU1": 500, "SKU2": 200}"#)?;
    Ok(Catalog { stock, prices })
}

pub fn write_orders(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["order", "items", "coupon", "balance"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `rows` random single-SKU orders against the lab catalog.
pub fn generate_random_orders(path: &Path, rows: usize) -> Result<(), Error> {
    let mut rng = rand::thread_rng();
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["order", "items", "coupon", "balance"])?;

    for i in 1..=rows {
        let sku = if rng.gen_bool(0.5) { "SKU1" } else { "SKU2" };
        let qty: u32 = rng.gen_range(1..=4);
        let coupon = if rng.gen_bool(0.3) { "SAVE10" } else { "" };
        let balance: u64 = rng.gen_range(0..=2_000);
        wtr.write_record([
            i.to_string(),
            format!("{sku}:{qty}"),
            coupon.to_string(),
            balance.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
