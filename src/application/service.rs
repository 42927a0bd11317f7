use crate::domain::cart::Sku;
use crate::domain::checkout::{CheckoutValidator, Receipt};
use crate::domain::inventory::{Inventory, PriceList};
use crate::domain::order::Order;
use crate::domain::ports::InventoryStoreBox;
use crate::error::Result;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Runs checkouts against a shared inventory store.
///
/// `CheckoutService` owns the store, the price list and the validator. Every
/// order goes through one read-validate-commit sequence under the commit lock,
/// so concurrent callers can never sell the same unit twice.
pub struct CheckoutService {
    store: InventoryStoreBox,
    prices: PriceList,
    validator: CheckoutValidator,
    commit_lock: Mutex<()>,
}

impl CheckoutService {
    /// Creates a new `CheckoutService`.
    ///
    /// # Arguments
    ///
    /// * `store` - Shared stock that successful orders are committed to.
    /// * `prices` - Unit prices for every sellable SKU.
    /// * `validator` - The checkout pipeline, including its coupon book.
    pub fn new(store: InventoryStoreBox, prices: PriceList, validator: CheckoutValidator) -> Self {
        Self {
            store,
            prices,
            validator,
            commit_lock: Mutex::new(()),
        }
    }

    /// Validates `order` and commits its stock changes if it is accepted.
    ///
    /// A refused order comes back as `Error::Checkout` and leaves the store
    /// exactly as it was.
    pub async fn place_order(&self, order: &Order) -> Result<Receipt> {
        let _guard = self.commit_lock.lock().await;

        let skus: Vec<Sku> = order.cart.skus().cloned().collect();
        let mut stock: Inventory = self.store.load(&skus).await?;
        debug!(order = order.id, lines = skus.len(), "loaded stock for order");

        let outcome = self.validator.checkout(
            &order.cart,
            &mut stock,
            &self.prices,
            order.coupon.as_deref(),
            order.balance,
        );

        match outcome {
            Ok(receipt) => {
                self.store.save(stock).await?;
                info!(
                    order = order.id,
                    subtotal = receipt.subtotal.cents(),
                    total = receipt.total.cents(),
                    "order charged"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(order = order.id, kind = e.kind(), "order refused: {e}");
                Err(e.into())
            }
        }
    }

    /// The current state of the whole store.
    pub async fn inventory(&self) -> Result<Inventory> {
        self.store.snapshot().await
    }
}
