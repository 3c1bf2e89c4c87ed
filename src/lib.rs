//! # Product API
//!
//! 基于 Axum 的产品 REST API 演示：
//! - 内存中的产品注册表，支持按价格过滤的列表、查询、创建、更新、删除
//! - 产品模式校验（名称长度、禁用名称、价格上限、"cheap" 跨字段规则）
//! - 固定的测试用户列表和 hello 页面
//! - 图片目录的静态文件服务

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod routes;

pub use app::AppState;
pub use routes::build_router;
