//! 启动时载入的示例产品

use serde_json::{json, Value};

use super::model::Product;

/// (id, name, price, expiration, brand, rating, size)
type SeedRow = (
    i64,
    &'static str,
    f64,
    Option<&'static str>,
    &'static str,
    Option<f64>,
    Option<&'static str>,
);

const SEED: [SeedRow; 16] = [
    (0, "Papitas", 30000.0, Some("2025-01-01"), "margarita", None, None),
    (1, "Gomitas", 25000.0, Some("2025-01-01"), "trululu", None, None),
    (2, "Juguitos", 300.0, Some("2025-02-02"), "valle", None, None),
    (3, "Binos", 2000.0, None, "Binos Inc.", Some(4.5), None),
    (4, "Smartphone", 800.0, None, "TechMaster", Some(4.0), None),
    (5, "Laptop", 1200.0, None, "ElectroTech", Some(4.8), None),
    (6, "Camiseta", 25.0, None, "FashionTees", Some(4.2), Some("M")),
    (7, "Pantalón", 40.0, None, "UrbanWear", Some(4.3), Some("L")),
    (8, "Vestido", 50.0, None, "ChicStyle", Some(4.6), Some("S")),
    (9, "Zapatos de hombre", 80.0, None, "FootMaster", Some(4.4), Some("42")),
    (10, "Zapatos de mujer", 70.0, None, "FashionFeet", Some(4.7), Some("38")),
    (11, "Tablet", 300.0, None, "TabTech", Some(4.5), None),
    (12, "Reloj inteligente", 150.0, None, "SmartTime", Some(4.2), None),
    (13, "Gafas de sol", 35.0, None, "SunShades", Some(4.6), None),
    (14, "Bolso", 60.0, None, "BagIt", Some(4.3), None),
    (15, "Auriculares inalámbricos", 90.0, None, "SoundMaster", Some(4.8), None),
];

/// 构造示例产品列表
///
/// 前三条记录没有 `rating`/`size` 字段，其余记录的 `size` 可能为 null，
/// 与原始数据保持一致。
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, price, expiration, brand, rating, size)| {
            let mut product = Product::new(name, price)
                .with_id(id)
                .with_extra("image", Value::Null)
                .with_extra("brand", json!(brand));
            product.expiration = expiration.map(str::to_string);
            if let Some(rating) = rating {
                product = product
                    .with_extra("rating", json!(rating))
                    .with_extra("size", json!(size));
            }
            product
        })
        .collect()
}
