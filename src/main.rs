use product_catalog::{
    bootstrap, build_router, infrastructure::logger::Logger, AppState, Config, ProductService,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // 初始化日志
    Logger::init(&config.logging.level);

    info!("Starting product catalog server...");

    // 初始化存储
    let repository = bootstrap::open_repository(&config).await.map_err(|e| {
        error!("Failed to open product store: {}", e);
        e
    })?;
    bootstrap::init_store(repository.as_ref()).await?;

    let state = AppState::new(ProductService::new(repository));
    let app = build_router(state, &config.server);

    let listener = TcpListener::bind((config.server.bind_address.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product catalog server running on http://{}", addr);
    info!("📖 Available endpoints:");
    info!("   GET    /              - Welcome message");
    info!("   GET    /products      - List products");
    info!("   GET    /product/:id   - Get product by ID");
    info!("   POST   /product       - Create product");
    info!("   PUT    /product/:id   - Update product");
    info!("   DELETE /product/:id   - Delete product");

    axum::serve(listener, app).await?;

    Ok(())
}
