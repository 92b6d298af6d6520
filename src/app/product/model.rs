//! 产品数据模型（存储表示）

/// `product` 表中的一行
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

impl Product {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// 用 `other` 覆盖除 id 以外的全部字段
    pub fn overwrite_with(&mut self, other: &Product) {
        self.name = other.name.clone();
        self.description = other.description.clone();
        self.price = other.price;
        self.quantity = other.quantity;
    }
}
