//! Product persistence abstraction.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use shoplite_core::{ProductId, StoreError, StoreResult};

use crate::product::Product;

/// Persistence operations for the product catalog.
///
/// Absence on lookup-by-id is `Ok(None)`, never an error. Sequence results
/// follow store-defined order with no further guarantee.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_products(&self) -> StoreResult<Vec<Product>>;

    async fn get_product(&self, id: &ProductId) -> StoreResult<Option<Product>>;

    async fn get_products_by_category(&self, category: &str) -> StoreResult<Vec<Product>>;

    /// Persists the product under `product.id`.
    async fn create_product(&self, product: &Product) -> StoreResult<()>;

    /// Replaces the stored record with the same id (upsert).
    async fn update_product(&self, product: &Product) -> StoreResult<()>;

    async fn delete_product(&self, id: &ProductId) -> StoreResult<()>;
}

/// In-memory catalog store for dev/test wiring.
///
/// Listing order is ascending by id.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, used by dev seeding and tests.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let inner = products
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect::<BTreeMap<_, _>>();
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_products(&self) -> StoreResult<Vec<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("catalog store lock poisoned"))?;
        Ok(map.values().cloned().collect())
    }

    async fn get_product(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("catalog store lock poisoned"))?;
        Ok(map.get(id).cloned())
    }

    async fn get_products_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("catalog store lock poisoned"))?;
        Ok(map
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn create_product(&self, product: &Product) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("catalog store lock poisoned"))?;
        map.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("catalog store lock poisoned"))?;
        map.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("catalog store lock poisoned"))?;
        map.remove(id);
        Ok(())
    }
}
