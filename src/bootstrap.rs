//! 启动流程：打开存储、建表、首次启动时写入示例数据

use std::sync::Arc;
use tracing::{info, warn};

use crate::app::product::model::Product;
use crate::app::product::repository::{InMemoryProductRepository, ProductRepository, RepoError};
use crate::infrastructure::config::{Config, StorageBackend};

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[cfg(feature = "database")]
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
    #[cfg(not(feature = "database"))]
    #[error("storage backend `{0:?}` is not available in this build")]
    BackendUnavailable(StorageBackend),
    #[error(transparent)]
    Store(#[from] RepoError),
}

/// 示例数据
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "14-inch display, 8GB RAM, 512GB SSD", 75000.0, 10),
        Product::new(2, "Smartphone", "6.5-inch AMOLED, 128GB storage", 35000.0, 25),
        Product::new(3, "Headphones", "Noise-cancelling over-ear headphones", 8000.0, 40),
        Product::new(4, "Smartwatch", "Water-resistant with heart rate monitor", 12000.0, 18),
    ]
}

/// 按配置打开存储后端
pub async fn open_repository(
    config: &Config,
) -> Result<Arc<dyn ProductRepository>, BootstrapError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory product store");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
        #[cfg(feature = "database")]
        StorageBackend::Postgres => {
            use crate::app::product::postgres::PgProductRepository;
            use crate::infrastructure::database::DatabaseManager;

            let db = DatabaseManager::new(&config.database).await?;
            Ok(Arc::new(PgProductRepository::new(db)))
        }
        #[cfg(not(feature = "database"))]
        backend @ StorageBackend::Postgres => Err(BootstrapError::BackendUnavailable(backend)),
    }
}

/// 建表并在表为空时写入示例数据，返回写入的行数
pub async fn init_store(repository: &dyn ProductRepository) -> Result<usize, BootstrapError> {
    repository.ensure_schema().await?;

    let count = repository.count().await?;
    if count > 0 {
        info!("Store already contains {} products, skipping seed", count);
        return Ok(0);
    }

    info!("Seeding store with example products...");
    let mut inserted = 0;
    for product in seed_products() {
        match repository.create(&product).await {
            Ok(()) => inserted += 1,
            // 另一个实例同时在写入示例数据
            Err(RepoError::Conflict(id)) => warn!("Seed product {} already exists, skipping", id),
            Err(err) => return Err(err.into()),
        }
    }

    info!("Seeded {} products", inserted);
    Ok(inserted)
}
