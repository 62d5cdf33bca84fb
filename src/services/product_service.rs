//! Product catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{CreateProduct, Product, ProductId, UpdateProduct};
use crate::errors::AppResult;
use crate::infra::{defer, Latency, MemoryStore};

/// Product service trait for dependency injection.
///
/// Absence is reported as `Ok(None)` / `Ok(false)`, never as an error; the
/// `Result` wrapper keeps call sites compatible with a backend that can
/// actually fail.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// All products in insertion order
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Look up one product by id
    async fn get_product(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// Create a product under a store-assigned id
    async fn add_product(&self, draft: CreateProduct) -> AppResult<Product>;

    /// Shallow-merge an update onto an existing product
    async fn update_product(
        &self,
        id: ProductId,
        updates: UpdateProduct,
    ) -> AppResult<Option<Product>>;

    /// Remove a product, reporting whether anything was removed
    async fn remove_product(&self, id: ProductId) -> AppResult<bool>;
}

/// Concrete implementation backed by an in-memory store.
///
/// Every operation takes the store lock once, computes its result, releases
/// the lock, and only then waits out the simulated delay. Responses
/// therefore reflect store state at the moment the call was issued, and
/// outstanding calls never block one another.
#[derive(Clone)]
pub struct ProductManager {
    store: Arc<RwLock<MemoryStore<Product>>>,
    latency: Latency,
}

impl ProductManager {
    /// Create a manager owning a store seeded with `initial`
    pub fn new(initial: Vec<Product>, latency: Latency) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::with_items(initial))),
            latency,
        }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        let snapshot = self.store.read().await.list();
        Ok(defer(snapshot, self.latency.list).await)
    }

    async fn get_product(&self, id: ProductId) -> AppResult<Option<Product>> {
        let found = self.store.read().await.get(id);
        Ok(defer(found, self.latency.item).await)
    }

    async fn add_product(&self, draft: CreateProduct) -> AppResult<Product> {
        let created = self.store.write().await.insert(draft);
        tracing::debug!(id = %created.id, "product added");
        Ok(defer(created, self.latency.mutate).await)
    }

    async fn update_product(
        &self,
        id: ProductId,
        updates: UpdateProduct,
    ) -> AppResult<Option<Product>> {
        let updated = self.store.write().await.update(id, updates);
        Ok(defer(updated, self.latency.mutate).await)
    }

    async fn remove_product(&self, id: ProductId) -> AppResult<bool> {
        let removed = self.store.write().await.remove(id);
        if removed {
            tracing::debug!(%id, "product removed");
        }
        Ok(defer(removed, self.latency.mutate).await)
    }
}
