//! # 产品目录服务
//!
//! 基于 Axum + SQLx 的产品 CRUD 服务，按层组织：
//! - `app`：产品模型、校验结构、数据访问、服务与处理器
//! - `core`：错误处理、提取器、响应结构、中间件
//! - `infrastructure`：配置、数据库连接池、日志
//! - `bootstrap`：启动时建表与示例数据

pub mod app;
pub mod bootstrap;
pub mod core;
pub mod infrastructure;

use axum::{error_handling::HandleErrorLayer, middleware, Router};
use std::time::Duration;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::{handle_middleware_error, request_logging_middleware};

pub use app::product::handler::AppState;
pub use app::product::service::ProductService;
pub use infrastructure::config::{Config, ServerConfig};

/// 组装产品路由与中间件
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    with_middleware(app::product::routes().with_state(state), server)
}

/// 为路由加上追踪、请求日志、超时与 CORS 中间件
///
/// 请求日志中间件位于超时之外，超时产生的 408 响应同样带有请求 ID。
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(Duration::from_secs(server.timeout_seconds)))
            .layer(cors),
    )
}
