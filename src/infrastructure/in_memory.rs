use crate::domain::cart::Sku;
use crate::domain::inventory::Inventory;
use crate::domain::ports::InventoryStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory stock table.
///
/// Uses `Arc<RwLock<Inventory>>` so clones share the same stock. Suitable for
/// tests and for batch runs where the stock is loaded from a file up front.
#[derive(Default, Clone)]
pub struct InMemoryInventoryStore {
    stock: Arc<RwLock<Inventory>>,
}

impl InMemoryInventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `inventory`.
    pub fn with_stock(inventory: Inventory) -> Self {
        Self {
            stock: Arc::new(RwLock::new(inventory)),
        }
    }
}

#[async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn load(&self, skus: &[Sku]) -> Result<Inventory> {
        let stock = self.stock.read().await;
        Ok(skus
            .iter()
            .filter_map(|sku| stock.get(sku.as_str()).map(|qty| (sku.clone(), qty)))
            .collect())
    }

    async fn save(&self, inventory: Inventory) -> Result<()> {
        let mut stock = self.stock.write().await;
        for (sku, qty) in inventory.iter() {
            stock.set(sku.clone(), qty);
        }
        Ok(())
    }

    async fn snapshot(&self) -> Result<Inventory> {
        Ok(self.stock.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_only_requested_skus() {
        let store = InMemoryInventoryStore::with_stock(
            [("SKU1", 3), ("SKU2", 10), ("SKU3", 1)].into_iter().collect(),
        );

        let loaded = store
            .load(&[Sku::new("SKU1"), Sku::new("SKU9")])
            .await
            .unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("SKU1"), Some(3));
        assert_eq!(loaded.get("SKU9"), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_given_skus() {
        let store = InMemoryInventoryStore::with_stock(
            [("SKU1", 3), ("SKU2", 10)].into_iter().collect(),
        );

        store
            .save([("SKU1", 2), ("SKU4", 5)].into_iter().collect())
            .await
            .unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.get("SKU1"), Some(2));
        assert_eq!(snapshot.get("SKU2"), Some(10));
        assert_eq!(snapshot.get("SKU4"), Some(5));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryInventoryStore::new();
        let clone = store.clone();
        clone
            .save([("SKU1", 1)].into_iter().collect())
            .await
            .unwrap();
        assert_eq!(store.snapshot().await.unwrap().get("SKU1"), Some(1));
    }
}
