//! 产品注册表
//!
//! 内存中的产品集合，保持插入顺序，所有查找都是线性扫描。
//! 注册表本身不做同步，并发访问由 [`super::service::ProductService`] 负责。

use tracing::info;
use validator::Validate;

use super::{
    model::{Product, MAX_PRODUCT_ID},
    seed::seed_products,
};
use crate::core::error::CoreError;

/// 注册表错误类型
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("The product {0} does not exist")]
    NotFound(i64),
    #[error("A product with id {0} already exists")]
    DuplicateId(i64),
    #[error("No free product id left (maximum is {})", MAX_PRODUCT_ID)]
    IdsExhausted,
    #[error(transparent)]
    Invalid(#[from] validator::ValidationErrors),
}

impl From<RegistryError> for CoreError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(_) => CoreError::NotFound(err.to_string()),
            RegistryError::DuplicateId(_) | RegistryError::IdsExhausted => {
                CoreError::Conflict(err.to_string())
            }
            RegistryError::Invalid(errors) => errors.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductRegistry {
    products: Vec<Product>,
    next_id: i64,
}

impl Default for ProductRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// 以给定记录初始化，记录不经过校验
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .filter_map(|p| p.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { products, next_id }
    }

    /// 载入启动示例数据
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 按价格闭区间过滤，保持插入顺序
    pub fn list(&self, min_price: Option<f64>, max_price: Option<f64>) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.price_within(min_price, max_price))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: i64) -> Result<&Product, RegistryError> {
        self.products
            .iter()
            .find(|p| p.id == Some(id))
            .ok_or(RegistryError::NotFound(id))
    }

    /// 从计数器开始找第一个未占用的 id，不超过 [`MAX_PRODUCT_ID`]
    fn allocate_id(&self) -> Result<i64, RegistryError> {
        let mut id = self.next_id.max(1);
        while self.products.iter().any(|p| p.id == Some(id)) {
            id = id.checked_add(1).ok_or(RegistryError::IdsExhausted)?;
        }
        if id > MAX_PRODUCT_ID {
            return Err(RegistryError::IdsExhausted);
        }
        Ok(id)
    }

    /// 校验并追加记录
    ///
    /// 未提供 id 时分配下一个递增 id；提供的 id 已被占用时拒绝。
    pub fn create(&mut self, mut product: Product) -> Result<Product, RegistryError> {
        product.validate()?;

        let id = match product.id {
            Some(id) => {
                if self.products.iter().any(|p| p.id == Some(id)) {
                    return Err(RegistryError::DuplicateId(id));
                }
                id
            }
            None => self.allocate_id()?,
        };
        self.next_id = self.next_id.max(id.saturating_add(1));
        product.id = Some(id);

        self.products.push(product.clone());
        info!("产品已创建: id={}, name={}", id, product.name);
        Ok(product)
    }

    /// 校验后就地更新 name、price、expiration，其余字段保持不变
    ///
    /// 请求体中的 id 被忽略，以路径中的 id 为准。
    pub fn update(&mut self, id: i64, mut product: Product) -> Result<Product, RegistryError> {
        product.id = None;
        product.validate()?;

        let stored = self
            .products
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or(RegistryError::NotFound(id))?;

        stored.name = product.name;
        stored.price = product.price;
        stored.expiration = product.expiration;

        info!("产品已更新: id={}", id);
        Ok(stored.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<Product, RegistryError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == Some(id))
            .ok_or(RegistryError::NotFound(id))?;

        let removed = self.products.remove(index);
        info!("产品已删除: id={}", id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widgets() -> Product {
        Product::new("Widgets", 100.0).with_expiration("2025-06-01")
    }

    #[test]
    fn test_seeded_registry() {
        let registry = ProductRegistry::seeded();
        assert_eq!(registry.len(), 16);
        assert_eq!(registry.get(0).unwrap().name, "Papitas");
        assert_eq!(
            registry.get(15).unwrap().extra.get("brand"),
            Some(&json!("SoundMaster"))
        );
        assert_eq!(registry.get(6).unwrap().extra.get("size"), Some(&json!("M")));
    }

    #[test]
    fn test_create_assigns_next_id() {
        let mut registry = ProductRegistry::seeded();
        let created = registry.create(widgets()).unwrap();
        assert_eq!(created.id, Some(16));

        let second = registry.create(Product::new("Gadgets", 5.0)).unwrap();
        assert_eq!(second.id, Some(17));
    }

    #[test]
    fn test_create_then_get_round_trips_declared_fields() {
        let mut registry = ProductRegistry::new();
        let created = registry.create(widgets().with_id(42)).unwrap();
        let fetched = registry.get(42).unwrap();

        assert_eq!(fetched, &created);
        assert_eq!(fetched.name, "Widgets");
        assert_eq!(fetched.price, 100.0);
        assert_eq!(fetched.expiration.as_deref(), Some("2025-06-01"));

        // 计数器越过客户端提供的 id
        let next = registry.create(Product::new("Gadgets", 5.0)).unwrap();
        assert_eq!(next.id, Some(43));
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let mut registry = ProductRegistry::seeded();
        let result = registry.create(widgets().with_id(3));
        assert!(matches!(result, Err(RegistryError::DuplicateId(3))));
        assert_eq!(registry.len(), 16);
    }

    #[test]
    fn test_create_rejects_ids_near_integer_limit() {
        let mut registry = ProductRegistry::seeded();
        for id in [i64::MAX, i64::MAX - 1] {
            assert!(matches!(
                registry.create(widgets().with_id(id)),
                Err(RegistryError::Invalid(_))
            ));
        }
        assert_eq!(registry.len(), 16);

        let next = registry.create(widgets()).unwrap();
        assert_eq!(next.id, Some(16));
    }

    #[test]
    fn test_create_stops_at_max_id() {
        let mut registry = ProductRegistry::new();
        let top = registry.create(widgets().with_id(MAX_PRODUCT_ID)).unwrap();
        assert_eq!(top.id, Some(MAX_PRODUCT_ID));

        assert!(matches!(
            registry.create(widgets()),
            Err(RegistryError::IdsExhausted)
        ));
        assert_eq!(registry.len(), 1);

        // 低于计数器的空闲 id 仍可由客户端指定
        assert!(registry.create(widgets().with_id(7)).is_ok());
    }

    #[test]
    fn test_allocation_never_reuses_stored_ids() {
        let mut registry = ProductRegistry::with_products(vec![
            Product::new("Alpha", 1.0).with_id(1),
            Product::new("Bravo", 1.0).with_id(i64::MAX),
        ]);
        // 计数器饱和，不会回绕到已有的 id
        assert!(matches!(
            registry.create(widgets()),
            Err(RegistryError::IdsExhausted)
        ));

        let mut registry = ProductRegistry::new();
        registry.create(widgets().with_id(2)).unwrap();
        let mut registry = ProductRegistry::with_products(registry.list(None, None));
        let a = registry.create(widgets()).unwrap();
        let b = registry.create(widgets()).unwrap();
        assert_eq!((a.id, b.id), (Some(3), Some(4)));
    }

    #[test]
    fn test_create_rejects_invalid_products() {
        let mut registry = ProductRegistry::new();
        for product in [
            Product::new("abc", 10.0),
            Product::new("a".repeat(51), 10.0),
            Product::new("poison", 10.0),
            Product::new("cheap", 200_000.0),
            Product::new("Yacht", 6_000_000.0),
        ] {
            assert!(matches!(
                registry.create(product),
                Err(RegistryError::Invalid(_))
            ));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_list_filters_inclusive_and_keeps_order() {
        let registry = ProductRegistry::seeded();
        let products = registry.list(Some(50.0), Some(300.0));
        let ids: Vec<i64> = products.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 8, 9, 10, 11, 12, 14, 15]);

        assert_eq!(registry.list(None, None).len(), 16);
        assert_eq!(registry.list(Some(25_000.0), None).len(), 2);
        assert!(registry.list(Some(40_000.0), None).is_empty());
    }

    #[test]
    fn test_update_overwrites_declared_fields_only() {
        let mut registry = ProductRegistry::seeded();
        let update = Product::new("Binos XL", 2500.0).with_id(99);
        let updated = registry.update(3, update).unwrap();

        assert_eq!(updated.id, Some(3));
        assert_eq!(updated.name, "Binos XL");
        assert_eq!(updated.price, 2500.0);
        assert_eq!(updated.expiration, None);
        assert_eq!(updated.extra.get("brand"), Some(&json!("Binos Inc.")));
        assert_eq!(registry.get(3).unwrap(), &updated);
        assert!(registry.get(99).is_err());
    }

    #[test]
    fn test_update_missing_id_leaves_registry_unchanged() {
        let mut registry = ProductRegistry::seeded();
        let before = registry.list(None, None);
        let result = registry.update(500, widgets());
        assert!(matches!(result, Err(RegistryError::NotFound(500))));
        assert_eq!(registry.list(None, None), before);
    }

    #[test]
    fn test_invalid_update_is_not_applied() {
        let mut registry = ProductRegistry::seeded();
        let before = registry.get(4).unwrap().clone();
        for product in [
            Product::new("poison", 10.0),
            Product::new("abc", 10.0),
            Product::new("a".repeat(51), 10.0),
            Product::new("cheap", 200_000.0),
        ] {
            assert!(matches!(
                registry.update(4, product),
                Err(RegistryError::Invalid(_))
            ));
        }
        assert_eq!(registry.get(4).unwrap(), &before);
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let mut registry = ProductRegistry::seeded();
        let removed = registry.delete(5).unwrap();
        assert_eq!(removed.name, "Laptop");
        assert!(matches!(registry.get(5), Err(RegistryError::NotFound(5))));
        assert!(matches!(registry.delete(5), Err(RegistryError::NotFound(5))));
        assert_eq!(registry.len(), 15);
    }

    #[test]
    fn test_registry_error_maps_to_core_error() {
        let err: CoreError = RegistryError::NotFound(7).into();
        assert!(matches!(err, CoreError::NotFound(_)));
        let err: CoreError = RegistryError::DuplicateId(7).into();
        assert!(matches!(err, CoreError::Conflict(_)));
        let err: CoreError = RegistryError::IdsExhausted.into();
        assert!(matches!(err, CoreError::Conflict(_)));
    }
}
