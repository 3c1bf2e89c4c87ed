//! 应用层

pub mod products;
pub mod users;
pub mod web;

use products::ProductService;

/// 处理器共享的应用状态
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}
