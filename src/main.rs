use product_api::app::products::{ProductRegistry, ProductService};
use product_api::infrastructure::{config::load_config, logger::Logger};
use product_api::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = load_config()?;

    // 初始化日志
    Logger::init(&config.logging.level);

    match &source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    if !config.static_files.images_dir.is_dir() {
        warn!(
            "图片目录不存在: {}，{} 下的请求将返回 404",
            config.static_files.images_dir.display(),
            config.static_files.mount_path
        );
    }

    let registry = ProductRegistry::seeded();
    info!("✅ 已初始化 {} 个示例产品", registry.len());

    let state = AppState::new(ProductService::new(registry));
    let app = build_router(state, &config);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 Product API 运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /hello          - Hello World 页面");
    info!("   GET    /products       - 获取产品列表 (min_price, max_price)");
    info!("   POST   /products       - 创建新产品");
    info!("   GET    /products/:id   - 获取特定产品");
    info!("   PUT    /products/:id   - 更新产品");
    info!("   DELETE /products/:id   - 删除产品");
    info!("   GET    /users/         - 测试用户列表");
    info!(
        "   GET    {}/*        - 静态图片",
        config.static_files.mount_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到停止信号，正在关闭服务器...");
}
