//! 产品业务服务

use std::sync::Arc;
use tracing::{debug, info};

use super::model::Product;
use super::repository::ProductRepository;
use super::schema::ProductSchema;
use crate::core::error::AppError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_products(&self) -> Result<Vec<ProductSchema>, AppError> {
        let products = self.repository.list_all().await?;
        Ok(products.into_iter().map(ProductSchema::from).collect())
    }

    pub async fn get_product(&self, id: i32) -> Result<ProductSchema, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .map(ProductSchema::from)
            .ok_or_else(|| not_found(id))
    }

    /// 创建成功后原样返回请求内容
    pub async fn create_product(&self, payload: ProductSchema) -> Result<ProductSchema, AppError> {
        let record: Product = payload.clone().into();
        self.repository.create(&record).await?;
        info!("Created product: {} ({})", payload.name, payload.id);
        Ok(payload)
    }

    /// 路径中的 id 为准，请求体中的 id 被忽略
    pub async fn update_product(&self, id: i32, payload: ProductSchema) -> Result<(), AppError> {
        if payload.id != id {
            debug!("Ignoring body id {} for update of product {}", payload.id, id);
        }

        let record = payload.into_record(id);
        if !self.repository.update(id, &record).await? {
            return Err(not_found(id));
        }

        info!("Updated product: {}", id);
        Ok(())
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        info!("Deleted product: {}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}
