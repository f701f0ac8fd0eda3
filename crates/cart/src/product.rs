use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// Catalog product snapshot as supplied by the inventory collection.
///
/// Read-only to this crate. `in_stock` may be negative when upstream stock
/// drifts; anything `<= 0` counts as out of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sku: String,
    /// Price in smallest currency unit (e.g., cents).
    #[serde(default)]
    pub price: u64,
    pub in_stock: i64,
}

impl Product {
    /// Minimal product carrying only what stock checks read.
    pub fn with_stock(id: impl Into<ProductId>, in_stock: i64) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            sku: String::new(),
            price: 0,
            in_stock,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.in_stock <= 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_stock_are_out_of_stock() {
        assert!(Product::with_stock("1", 0).is_out_of_stock());
        assert!(Product::with_stock("1", -3).is_out_of_stock());
        assert!(!Product::with_stock("1", 1).is_out_of_stock());
    }

    #[test]
    fn deserializes_store_payload() {
        let product: Product = serde_json::from_str(
            r#"{"id":"1","title":"Mug","sku":"MUG-01","price":1299,"inStock":5}"#,
        )
        .unwrap();
        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.in_stock, 5);
        assert_eq!(product.price, 1299);
    }

    #[test]
    fn descriptive_fields_are_optional() {
        let product: Product = serde_json::from_str(r#"{"id":"7","inStock":0}"#).unwrap();
        assert_eq!(product, Product::with_stock("7", 0));
    }
}
