//! 产品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::{debug, warn};
use validator::Validate;

use super::model::Product;
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

/// 列表查询参数，两个边界都是可选的闭区间端点
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListProductsQuery {
    #[validate(range(min = 10.0, max = 5000000.0, message = "min_price must be between 10 and 5000000"))]
    pub min_price: Option<f64>,
    #[validate(range(min = 10.0, max = 5000000.0, message = "max_price must be between 10 and 5000000"))]
    pub max_price: Option<f64>,
}

/// 查询单个产品的路径参数
#[derive(Debug, Deserialize, Validate)]
pub struct ProductIdPath {
    #[validate(range(min = 1, max = 5000, message = "id must be between 1 and 5000"))]
    pub id: i64,
}

/// 更新、删除的路径参数（无上限）
#[derive(Debug, Deserialize, Validate)]
pub struct MutationIdPath {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: i64,
}

fn log_rejection(op: &str, err: CoreError) -> CoreError {
    match &err {
        CoreError::Validation { message, .. } => debug!("{} 校验失败: {}", op, message),
        other => warn!("{} 失败: {}", op, other),
    }
    err
}

/// 获取产品列表（支持价格过滤）
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let Query(query) = query?;
    query.validate()?;
    let products = state
        .product_service
        .list_products(query.min_price, query.max_price)
        .await;
    debug!("返回 {} 个产品", products.len());
    Ok(Json(products))
}

/// 获取特定产品
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<ProductIdPath>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(path) = path?;
    path.validate()?;
    let product = state
        .product_service
        .get_product(path.id)
        .await
        .map_err(|e| log_rejection("查询产品", e.into()))?;
    Ok(Json(product))
}

/// 创建新产品
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), CoreError> {
    let Json(payload) = payload.map_err(|e| log_rejection("创建产品", e.into()))?;
    let product = state
        .product_service
        .create_product(payload)
        .await
        .map_err(|e| log_rejection("创建产品", e.into()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "The product was created successfully",
            product,
        )),
    ))
}

/// 更新产品
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<MutationIdPath>, PathRejection>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let Path(path) = path?;
    path.validate()?;
    let Json(payload) = payload.map_err(|e| log_rejection("更新产品", e.into()))?;
    let product = state
        .product_service
        .update_product(path.id, payload)
        .await
        .map_err(|e| log_rejection("更新产品", e.into()))?;

    Ok(Json(ApiResponse::success(
        "The product was updated successfully",
        product,
    )))
}

/// 删除产品，成功时返回 204 且无响应体
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<MutationIdPath>, PathRejection>,
) -> Result<StatusCode, CoreError> {
    let Path(path) = path?;
    path.validate()?;
    state
        .product_service
        .delete_product(path.id)
        .await
        .map_err(|e| log_rejection("删除产品", e.into()))?;
    Ok(StatusCode::NO_CONTENT)
}
