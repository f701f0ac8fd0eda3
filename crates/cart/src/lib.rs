//! Cart domain module.
//!
//! Stock-availability checks for cart and POS line changes, plus the in-memory
//! cart that runs them before mutating. Pure domain logic (no IO, no HTTP, no
//! storage).

pub mod cart;
pub mod line;
pub mod product;
pub mod stock;

pub use cart::Cart;
pub use line::CartLine;
pub use product::Product;
pub use stock::{
    StockError, ValidationResult, validate_add_one, validate_add_to_cart,
    validate_quantity_update,
};
