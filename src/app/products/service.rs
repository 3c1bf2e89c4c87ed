//! 产品业务服务
//!
//! 读操作持有读锁，创建、更新、删除在写锁内完成，保证每次变更相对其他请求是原子的。

use std::sync::Arc;
use tokio::sync::RwLock;

use super::{
    model::Product,
    registry::{ProductRegistry, RegistryError},
};

#[derive(Clone)]
pub struct ProductService {
    registry: Arc<RwLock<ProductRegistry>>,
}

impl ProductService {
    pub fn new(registry: ProductRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    pub async fn list_products(
        &self,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Vec<Product> {
        self.registry.read().await.list(min_price, max_price)
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, RegistryError> {
        self.registry.read().await.get(id).cloned()
    }

    pub async fn create_product(&self, product: Product) -> Result<Product, RegistryError> {
        self.registry.write().await.create(product)
    }

    pub async fn update_product(
        &self,
        id: i64,
        product: Product,
    ) -> Result<Product, RegistryError> {
        self.registry.write().await.update(id, product)
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), RegistryError> {
        self.registry.write().await.delete(id).map(|_| ())
    }

    pub async fn count(&self) -> usize {
        self.registry.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let service = ProductService::new(ProductRegistry::seeded());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create_product(Product::new(format!("Item {:02}", i), 10.0))
                        .await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 20);
        assert_eq!(service.count().await, 36);
    }

    #[tokio::test]
    async fn test_service_shares_state_across_clones() {
        let service = ProductService::new(ProductRegistry::new());
        let other = service.clone();

        let created = service
            .create_product(Product::new("Widgets", 100.0))
            .await
            .unwrap();
        let fetched = other.get_product(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, created);

        other.delete_product(created.id.unwrap()).await.unwrap();
        assert!(service.get_product(created.id.unwrap()).await.is_err());
    }
}
