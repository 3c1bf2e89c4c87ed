//! 产品管理：数据模型、注册表、业务服务与处理器

pub mod handler;
pub mod model;
pub mod registry;
pub mod seed;
pub mod service;

pub use model::Product;
pub use registry::{ProductRegistry, RegistryError};
pub use service::ProductService;
