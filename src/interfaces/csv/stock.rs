use crate::domain::cart::Sku;
use crate::domain::inventory::Inventory;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Serialize, Deserialize)]
struct StockRecord {
    sku: Sku,
    available: u32,
}

/// Loads a `sku,available` table.
///
/// Unlike orders, stock is loaded all or nothing: a bad row or a duplicated
/// SKU fails the whole file.
pub fn read_stock<R: Read>(source: R) -> Result<Inventory> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut inventory = Inventory::new();
    for record in reader.deserialize::<StockRecord>() {
        let record = record?;
        if inventory.get(record.sku.as_str()).is_some() {
            return Err(Error::InvalidRecord(format!(
                "duplicate stock entry for {}",
                record.sku
            )));
        }
        inventory.set(record.sku, record.available);
    }
    Ok(inventory)
}

/// Writes `inventory` as a `sku,available` table sorted by SKU.
pub fn write_stock<W: Write>(sink: W, inventory: &Inventory) -> Result<()> {
    let mut rows: Vec<StockRecord> = inventory
        .iter()
        .map(|(sku, available)| StockRecord {
            sku: sku.clone(),
            available,
        })
        .collect();
    rows.sort_by(|a, b| a.sku.cmp(&b.sku));

    let mut writer = csv::Writer::from_writer(sink);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
