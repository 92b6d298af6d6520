//! 产品目录应用：模型、校验结构、数据访问、服务与处理器

pub mod handler;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod repository;
pub mod schema;
pub mod service;

use axum::{routing::get, Router};

use handler::AppState;

/// 产品相关路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::welcome))
        .route("/products", get(handler::list_products))
        .route("/product", axum::routing::post(handler::create_product))
        .route(
            "/product/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
