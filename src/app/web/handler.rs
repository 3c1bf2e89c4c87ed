//! 通用页面处理器

use axum::response::{Html, Json};

/// 简单问候处理器
pub async fn hello_handler() -> Html<&'static str> {
    Html("<h1>Hello World</h1>")
}

/// API 信息
pub async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "title": "Product API",
        "summary": "Product REST API with Axum and Rust",
        "description": "This is a demonstration of a REST API using Rust",
        "version": env!("CARGO_PKG_VERSION"),
        "contact": {
            "name": "Jorge I. Meza",
            "url": "https://co.linkedin.com/in/jimezam",
            "email": "jimezam@autonoma.edu.co"
        },
        "tags": {
            "web": "Endpoints of example",
            "products": "Product handling endpoints"
        },
        "endpoints": {
            "GET /hello": "Shows an HTML hello world",
            "GET /products": "Returns all products stored, filtered by min_price / max_price",
            "GET /products/:id": "Returns data of one specific product",
            "POST /products": "Creates a new product",
            "PUT /products/:id": "Updates the data of specific product",
            "DELETE /products/:id": "Removes specific product",
            "GET /users/": "Returns the test users"
        },
        "example": {
            "id": 1,
            "name": "Platanitos",
            "price": 5000,
            "expiration": "2025-04-04"
        }
    }))
}
