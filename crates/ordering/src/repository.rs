//! Order persistence abstraction.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use shoplite_core::{OrderId, StoreError, StoreResult};

use crate::order::Order;

/// Persistence operations for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders placed by `user_name`, store-defined order.
    async fn get_orders_by_user_name(&self, user_name: &str) -> StoreResult<Vec<Order>>;

    /// Persists the order under `order.id`.
    async fn create_order(&self, order: &Order) -> StoreResult<()>;
}

/// In-memory order store for dev/test wiring. Listing order is ascending by id.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    inner: RwLock<BTreeMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let inner = orders
            .into_iter()
            .map(|o| (o.id.clone(), o))
            .collect::<BTreeMap<_, _>>();
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_orders_by_user_name(&self, user_name: &str) -> StoreResult<Vec<Order>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("order store lock poisoned"))?;
        Ok(map
            .values()
            .filter(|o| o.user_name == user_name)
            .cloned()
            .collect())
    }

    async fn create_order(&self, order: &Order) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("order store lock poisoned"))?;
        map.insert(order.id.clone(), order.clone());
        Ok(())
    }
}
