//! 路由装配

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::app::{products, users, web, AppState};
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::{Config, CorsConfig};

/// 构建跨域层，无法解析的来源会被忽略
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("忽略无效的 CORS 来源: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
}

/// API 路由（不含中间件与静态文件）
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(web::handler::api_info))
        .route("/hello", get(web::handler::hello_handler))
        .route(
            "/products",
            get(products::handler::list_products).post(products::handler::create_product),
        )
        .route(
            "/products/:id",
            get(products::handler::get_product)
                .put(products::handler::update_product)
                .delete(products::handler::delete_product),
        )
        .route("/users", get(users::handler::list_users))
        .route("/users/", get(users::handler::list_users))
}

/// 构建完整应用
pub fn build_router(state: AppState, config: &Config) -> Router {
    api_routes()
        .nest_service(
            &config.static_files.mount_path,
            ServeDir::new(&config.static_files.images_dir),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors))
        .layer(TimeoutLayer::new(config.http.timeout()))
        .with_state(state)
}
