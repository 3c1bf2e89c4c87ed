//! 产品数据模型与校验规则

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

/// 价格上限
pub const MAX_PRICE: f64 = 5_000_000.0;
/// 名为 "cheap" 的产品允许的最高价格
pub const CHEAP_MAX_PRICE: f64 = 100_000.0;
/// 省略价格时的默认值
pub const DEFAULT_PRICE: f64 = 1000.0;
/// 产品 id 上限，与按 id 查询的路径参数范围一致
pub const MAX_PRODUCT_ID: i64 = 5000;

fn default_price() -> f64 {
    DEFAULT_PRICE
}

/// 产品记录
///
/// 模式是开放的：未声明的字段（如 `brand`、`rating`、`size`、`image`）
/// 保存在 `extra` 中，读取时原样返回。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_cheap_price"))]
pub struct Product {
    #[serde(default)]
    #[validate(range(min = 1, max = 5000, message = "Product id must be between 1 and 5000"))]
    pub id: Option<i64>,

    #[validate(
        length(min = 4, max = 50, message = "Name must be between 4 and 50 characters"),
        custom(function = "validate_no_poison")
    )]
    pub name: String,

    #[serde(default = "default_price")]
    #[validate(range(max = 5000000.0, message = "Price must not exceed 5000000"))]
    pub price: f64,

    #[serde(default)]
    pub expiration: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            expiration: None,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }

    /// 附加一个未声明字段
    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    /// 价格是否落在闭区间内，缺省的边界视为无界
    pub fn price_within(&self, min_price: Option<f64>, max_price: Option<f64>) -> bool {
        min_price.map_or(true, |min| self.price >= min)
            && max_price.map_or(true, |max| self.price <= max)
    }
}

fn validate_no_poison(name: &str) -> Result<(), ValidationError> {
    if name == "poison" {
        let mut err = ValidationError::new("poison");
        err.message = Some("Poison should not be sold as a product".into());
        return Err(err);
    }
    Ok(())
}

fn validate_cheap_price(product: &Product) -> Result<(), ValidationError> {
    if product.name == "cheap" && product.price > CHEAP_MAX_PRICE {
        let mut err = ValidationError::new("cheap_price");
        err.message = Some("A product with that price cannot be named cheap".into());
        return Err(err);
    }
    Ok(())
}
