//! Stock availability checks for proposed cart changes.
//!
//! Both checks are pure predicates over borrowed inputs: no IO, no logging, no
//! shared state. A valid result is only a snapshot check; whatever commits the
//! stock decrement must still do so atomically.

use serde::Serialize;
use thiserror::Error;

use storefront_core::{CartLineId, find_by_id};

use crate::line::CartLine;
use crate::product::Product;

/// Why a cart change was rejected.
///
/// `Display` renders the exact user-facing message; callers surface it verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("This product is out of stock and cannot be added to the cart.")]
    OutOfStock,

    #[error("Quantity to add must be at least 1.")]
    NonPositiveQuantity { requested: i64 },

    #[error("Cannot add more of this product. Only {available} items in stock.")]
    InsufficientStockForAdd { available: i64 },

    #[error("Cannot add more of this product. Only {in_stock} items in stock.")]
    InsufficientStockForUpdate { in_stock: i64 },

    #[error("Item not found in cart.")]
    LineNotFound { line_id: CartLineId },
}

/// Pass/fail outcome of a stock check.
///
/// Only built from a check outcome, so `message` is `None` exactly when
/// `is_valid` is true and an invalid result always carries its `StockError`.
/// Serializes to the `{"isValid": .., "message": ..}` shape the storefront reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    message: Option<String>,
    #[serde(skip)]
    rejection: Option<StockError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
            rejection: None,
        }
    }

    pub fn invalid(reason: StockError) -> Self {
        Self {
            is_valid: false,
            message: Some(reason.to_string()),
            rejection: Some(reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// User-facing rejection message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Typed reason behind an invalid result.
    pub fn rejection(&self) -> Option<&StockError> {
        self.rejection.as_ref()
    }

    pub fn into_result(self) -> Result<(), StockError> {
        match self.rejection {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }
}

impl From<Result<(), StockError>> for ValidationResult {
    fn from(value: Result<(), StockError>) -> Self {
        match value {
            Ok(()) => Self::valid(),
            Err(reason) => Self::invalid(reason),
        }
    }
}

/// Decide whether `quantity_to_add` units of `product` may be added to `cart`.
///
/// Checks run in order and the first failure wins: out of stock, non-positive
/// request, then the projected line quantity against `product.in_stock`.
/// Only the first line holding the product is considered.
pub fn validate_add_to_cart(
    cart: &[CartLine],
    product: &Product,
    quantity_to_add: i64,
) -> ValidationResult {
    check_add(cart, product, quantity_to_add).into()
}

/// [`validate_add_to_cart`] with the default quantity of one unit.
pub fn validate_add_one(cart: &[CartLine], product: &Product) -> ValidationResult {
    validate_add_to_cart(cart, product, 1)
}

/// Decide whether line `line_id` may be set to `new_quantity`.
///
/// A non-positive quantity is a removal request and always passes, even for
/// out-of-stock products; removing the line is the caller's job.
pub fn validate_quantity_update(
    cart: &[CartLine],
    line_id: &CartLineId,
    new_quantity: i64,
) -> ValidationResult {
    check_update(cart, line_id, new_quantity).into()
}

fn check_add(cart: &[CartLine], product: &Product, quantity_to_add: i64) -> Result<(), StockError> {
    if product.is_out_of_stock() {
        return Err(StockError::OutOfStock);
    }
    if quantity_to_add <= 0 {
        return Err(StockError::NonPositiveQuantity {
            requested: quantity_to_add,
        });
    }

    match cart.iter().find(|line| line.product.id == product.id) {
        Some(existing) => {
            let projected = existing.quantity.saturating_add(quantity_to_add);
            if projected > product.in_stock {
                // Clamped: a line can already exceed stock if stock dropped after carting.
                let available = product.in_stock.saturating_sub(existing.quantity).max(0);
                return Err(StockError::InsufficientStockForAdd { available });
            }
        }
        None => {
            if quantity_to_add > product.in_stock {
                return Err(StockError::InsufficientStockForAdd {
                    available: product.in_stock,
                });
            }
        }
    }

    Ok(())
}

fn check_update(cart: &[CartLine], line_id: &CartLineId, new_quantity: i64) -> Result<(), StockError> {
    let line = find_by_id(cart, line_id).ok_or_else(|| StockError::LineNotFound {
        line_id: line_id.clone(),
    })?;

    if new_quantity <= 0 {
        return Ok(());
    }
    if new_quantity > line.product.in_stock {
        return Err(StockError::InsufficientStockForUpdate {
            in_stock: line.product.in_stock,
        });
    }

    Ok(())
}
