use super::cart::Sku;
use super::inventory::Inventory;
use crate::error::Result;
use async_trait::async_trait;

/// Shared stock that checkouts read from and commit to.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Current quantities for `skus`. SKUs the store has never seen are
    /// left out of the result.
    async fn load(&self, skus: &[Sku]) -> Result<Inventory>;
    /// Overwrites the quantities of every SKU in `inventory`.
    async fn save(&self, inventory: Inventory) -> Result<()>;
    async fn snapshot(&self) -> Result<Inventory>;
}

pub type InventoryStoreBox = Box<dyn InventoryStore>;
