//! PostgreSQL 产品仓储
//!
//! 每个方法从连接池借出一个连接执行单条语句，语句自动提交，连接随 drop 归还。

use async_trait::async_trait;
use tracing::info;

use super::model::Product;
use super::repository::{ProductRepository, RepoError, RepoResult};
use crate::infrastructure::database::DatabaseManager;

#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseManager,
}

impl PgProductRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn ensure_schema(&self) -> RepoResult<()> {
        let mut conn = self.db.session().await?;

        // 在实际部署中应该使用迁移工具
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS product (
                id INTEGER PRIMARY KEY,
                name VARCHAR NOT NULL,
                description VARCHAR NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                quantity INTEGER NOT NULL
            )
            "#,
        )
        .execute(&mut *conn)
        .await?;

        info!("Table `product` is ready");
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        let mut conn = self.db.session().await?;

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count.0)
    }

    async fn list_all(&self) -> RepoResult<Vec<Product>> {
        let mut conn = self.db.session().await?;

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, quantity FROM product ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> RepoResult<Option<Product>> {
        let mut conn = self.db.session().await?;

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, quantity FROM product WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(product)
    }

    async fn create(&self, product: &Product) -> RepoResult<()> {
        let mut conn = self.db.session().await?;

        sqlx::query(
            "INSERT INTO product (id, name, description, price, quantity) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db_err) = &err {
                if db_err.is_unique_violation() {
                    return RepoError::Conflict(product.id);
                }
            }
            RepoError::from(err)
        })?;

        Ok(())
    }

    async fn update(&self, id: i32, product: &Product) -> RepoResult<bool> {
        let mut conn = self.db.session().await?;

        let result = sqlx::query(
            "UPDATE product SET name = $1, description = $2, price = $3, quantity = $4 WHERE id = $5",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> RepoResult<bool> {
        let mut conn = self.db.session().await?;

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
