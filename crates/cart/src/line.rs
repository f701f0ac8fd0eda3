use serde::{Deserialize, Serialize};

use storefront_core::{CartLineId, Entity};

use crate::product::Product;

/// Cart line: product snapshot + quantity held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    pub fn new(id: impl Into<CartLineId>, product: Product, quantity: i64) -> Self {
        Self {
            id: id.into(),
            product,
            quantity,
        }
    }

    /// Line total in smallest currency unit. Non-positive quantities count as zero.
    pub fn total(&self) -> u64 {
        let quantity = u64::try_from(self.quantity).unwrap_or(0);
        self.product.price.saturating_mul(quantity)
    }
}

impl Entity for CartLine {
    type Id = CartLineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
