use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use storefront_core::{CartLineId, DomainError, DomainResult, find_by_id, position_by_id};

use crate::line::CartLine;
use crate::product::Product;
use crate::stock::{StockError, validate_add_to_cart, validate_quantity_update};

impl From<StockError> for DomainError {
    fn from(value: StockError) -> Self {
        match value {
            StockError::LineNotFound { line_id } => DomainError::not_found(format!("cart line {line_id}")),
            other => DomainError::validation(other.to_string()),
        }
    }
}

/// In-memory shopping cart / POS basket.
///
/// Holds at most one line per product: `add` merges into the existing line.
/// Every mutation is pre-checked against the product snapshot it carries.
///
/// Serializes as its array of lines; deserializing goes through [`Cart::from_lines`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored lines.
    ///
    /// Every line must hold at least one unit. Rejects repeated line ids and
    /// repeated products, since stock checks only see the first line for a product.
    pub fn from_lines(lines: Vec<CartLine>) -> DomainResult<Self> {
        let mut line_ids = HashSet::new();
        let mut product_ids = HashSet::new();
        for line in &lines {
            if line.quantity < 1 {
                return Err(DomainError::invariant(format!(
                    "cart line {} has quantity {}",
                    line.id, line.quantity
                )));
            }
            if !line_ids.insert(&line.id) {
                return Err(DomainError::invariant(format!("duplicate cart line {}", line.id)));
            }
            if !product_ids.insert(&line.product.id) {
                return Err(DomainError::invariant(format!(
                    "product {} appears on more than one line",
                    line.product.id
                )));
            }
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, line_id: &CartLineId) -> Option<&CartLine> {
        find_by_id(&self.lines, line_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` units of `product`, returning the id of the line holding it.
    ///
    /// The line's product snapshot is refreshed to `product`.
    pub fn add(&mut self, product: &Product, quantity: i64) -> DomainResult<CartLineId> {
        validate_add_to_cart(&self.lines, product, quantity)
            .into_result()
            .inspect_err(|reason| {
                info!(product_id = %product.id, quantity, %reason, "add to cart rejected");
            })?;

        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            line.product = product.clone();
            debug!(line_id = %line.id, product_id = %product.id, quantity = line.quantity, "cart line merged");
            return Ok(line.id.clone());
        }

        let line = CartLine::new(CartLineId::generate(), product.clone(), quantity);
        let line_id = line.id.clone();
        debug!(line_id = %line_id, product_id = %product.id, quantity, "cart line added");
        self.lines.push(line);
        Ok(line_id)
    }

    /// Set a line's quantity; zero or below removes the line.
    pub fn set_quantity(&mut self, line_id: &CartLineId, quantity: i64) -> DomainResult<()> {
        validate_quantity_update(&self.lines, line_id, quantity)
            .into_result()
            .inspect_err(|reason| {
                info!(line_id = %line_id, quantity, %reason, "quantity update rejected");
            })?;

        if quantity <= 0 {
            self.remove(line_id)?;
            return Ok(());
        }

        if let Some(index) = position_by_id(&self.lines, line_id) {
            let line = &mut self.lines[index];
            line.quantity = quantity;
            debug!(line_id = %line_id, quantity, "cart line quantity set");
        }
        Ok(())
    }

    pub fn remove(&mut self, line_id: &CartLineId) -> DomainResult<CartLine> {
        let index = position_by_id(&self.lines, line_id)
            .ok_or_else(|| DomainError::not_found(format!("cart line {line_id}")))?;
        let line = self.lines.remove(index);
        debug!(line_id = %line_id, product_id = %line.product.id, "cart line removed");
        Ok(line)
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of line totals in smallest currency unit.
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.total()))
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = DomainError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
