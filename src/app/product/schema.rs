//! 产品 API 结构（请求/响应的校验边界）
//!
//! 只做类型与必填字段校验：字段缺失或类型错误在反序列化阶段失败。

use serde::{Deserialize, Serialize};

use super::model::Product;

/// 请求与响应中的产品表示，所有字段必填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSchema {
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub id: i32,

    pub name: String,

    pub description: String,

    pub price: f64,

    #[serde(deserialize_with = "whole_number::deserialize")]
    pub quantity: i32,
}

impl ProductSchema {
    /// 转换为存储记录，id 以 `id` 参数为准
    pub fn into_record(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl From<Product> for ProductSchema {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

impl From<ProductSchema> for Product {
    fn from(schema: ProductSchema) -> Self {
        let id = schema.id;
        schema.into_record(id)
    }
}

/// 整数字段：接受 JSON 整数，以及小数部分为零的浮点数（如 `10.0`）
mod whole_number {
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WholeNumberVisitor)
    }

    struct WholeNumberVisitor;

    impl<'de> Visitor<'de> for WholeNumberVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a whole number within the i32 range")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
                Ok(v as i32)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<ProductSchema, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn accepts_complete_payload() {
        let schema = parse(json!({
            "id": 1,
            "name": "Laptop",
            "description": "14-inch display",
            "price": 75000,
            "quantity": 10
        }))
        .unwrap();

        assert_eq!(schema.price, 75000.0);
        assert_eq!(schema.quantity, 10);
    }

    #[test]
    fn ignores_unknown_fields() {
        let schema = parse(json!({
            "id": 2,
            "name": "Smartphone",
            "description": "AMOLED",
            "price": 35000.5,
            "quantity": 25,
            "color": "black"
        }))
        .unwrap();

        assert_eq!(schema.id, 2);
    }

    #[test]
    fn rejects_missing_field() {
        let err = parse(json!({
            "id": 1,
            "name": "Laptop",
            "price": 75000,
            "quantity": 10
        }))
        .unwrap_err();

        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse(json!({
            "id": 1, "name": "Laptop", "description": "x", "price": "cheap", "quantity": 10
        }))
        .is_err());
        assert!(parse(json!({
            "id": 1.5, "name": "Laptop", "description": "x", "price": 1.0, "quantity": 10
        }))
        .is_err());
        assert!(parse(json!({
            "id": 1, "name": "Laptop", "description": "x", "price": 1.0, "quantity": 2.5
        }))
        .is_err());
        assert!(parse(json!({
            "id": "1", "name": "Laptop", "description": "x", "price": 1.0, "quantity": 1
        }))
        .is_err());
        assert!(parse(json!({
            "id": 1, "name": 7, "description": "x", "price": 1.0, "quantity": 1
        }))
        .is_err());
    }

    #[test]
    fn accepts_whole_number_floats_for_integers() {
        let schema = parse(json!({
            "id": 1.0, "name": "Laptop", "description": "x", "price": 1.0, "quantity": 10.0
        }))
        .unwrap();

        assert_eq!(schema.id, 1);
        assert_eq!(schema.quantity, 10);
    }

    #[test]
    fn rejects_integers_out_of_range() {
        assert!(parse(json!({
            "id": 3_000_000_000u64, "name": "Laptop", "description": "x", "price": 1.0, "quantity": 1
        }))
        .is_err());
        assert!(parse(json!({
            "id": 1, "name": "Laptop", "description": "x", "price": 1.0, "quantity": -3e10
        }))
        .is_err());
    }

    #[test]
    fn empty_text_is_accepted() {
        let schema = parse(json!({
            "id": 1, "name": "", "description": "", "price": 1.0, "quantity": 1
        }))
        .unwrap();

        assert_eq!(schema.name, "");
        assert_eq!(schema.description, "");
    }

    #[test]
    fn negative_price_is_not_rejected() {
        let schema = parse(json!({
            "id": 1, "name": "Refund", "description": "x", "price": -5.0, "quantity": -1
        }))
        .unwrap();

        assert_eq!(schema.price, -5.0);
        assert_eq!(schema.quantity, -1);
    }

    #[test]
    fn record_id_comes_from_argument() {
        let schema = parse(json!({
            "id": 42, "name": "Headphones", "description": "x", "price": 8000, "quantity": 40
        }))
        .unwrap();

        let record = schema.into_record(3);
        assert_eq!(record.id, 3);
        assert_eq!(record.name, "Headphones");
    }
}
