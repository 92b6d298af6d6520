//! 产品处理器

use axum::{extract::State, http::StatusCode, response::Json};

use super::{schema::ProductSchema, service::ProductService};
use crate::core::{
    error::AppError,
    extract::{JsonBody, PathParam},
    response::MessageResponse,
};

pub const WELCOME_MESSAGE: &str = "Welcome to the product catalog server";

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSchema>>, AppError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ProductSchema>, AppError> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductSchema>,
) -> Result<(StatusCode, Json<ProductSchema>), AppError> {
    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<ProductSchema>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_service.update_product(id, payload).await?;
    Ok(Json(MessageResponse::success("Product updated successfully")))
}

pub async fn delete_product(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_service.delete_product(id).await?;
    Ok(Json(MessageResponse::success("Product deleted successfully")))
}
