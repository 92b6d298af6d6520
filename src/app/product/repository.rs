//! 产品数据访问层
//!
//! [`ProductRepository`] 是服务层唯一依赖的存储接口。每个操作都在一次独立的
//! 存储会话中完成：PostgreSQL 实现从连接池借出一个连接，操作结束（包括出错）
//! 时随 drop 归还；内存实现只在单个操作期间持有锁。

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::model::Product;

/// 数据访问层错误
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// 主键冲突
    #[error("product {0} already exists")]
    Conflict(i32),
    /// 存储不可用（连接失败、超时等）
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Unavailable(err.to_string())
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 表不存在时创建
    async fn ensure_schema(&self) -> RepoResult<()>;

    /// 当前行数
    async fn count(&self) -> RepoResult<i64>;

    /// 返回全部产品，顺序不作保证
    async fn list_all(&self) -> RepoResult<Vec<Product>>;

    /// 按 id 查询，不存在时返回 `None`
    async fn get_by_id(&self, id: i32) -> RepoResult<Option<Product>>;

    /// 插入新行，id 已存在时返回 [`RepoError::Conflict`]
    async fn create(&self, product: &Product) -> RepoResult<()>;

    /// 覆盖 `id` 所在行的其余字段，`product.id` 被忽略；行不存在时返回 `false`
    async fn update(&self, id: i32, product: &Product) -> RepoResult<bool>;

    /// 删除 `id` 所在行；行不存在时返回 `false`
    async fn delete(&self, id: i32) -> RepoResult<bool>;
}

/// 进程内存储，用于测试和 `memory` 后端
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    rows: Arc<RwLock<BTreeMap<i32, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn ensure_schema(&self) -> RepoResult<()> {
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.rows.read().await.len() as i64)
    }

    async fn list_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> RepoResult<Option<Product>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn create(&self, product: &Product) -> RepoResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&product.id) {
            return Err(RepoError::Conflict(product.id));
        }
        rows.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, id: i32, product: &Product) -> RepoResult<bool> {
        match self.rows.write().await.get_mut(&id) {
            Some(row) => {
                row.overwrite_with(product);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> RepoResult<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}
