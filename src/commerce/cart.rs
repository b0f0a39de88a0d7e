//! Shopping cart of product lines.

use super::product::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("Product {name} is not in the cart")]
    ProductNotInCart { name: String },

    #[error("Quantity of {name} would overflow ({current} + {added})")]
    QuantityOverflow {
        name: String,
        current: u32,
        added: u32,
    },
}

/// One product and how many of it are in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

impl fmt::Display for CartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} - ${}",
            self.quantity,
            self.product.name,
            self.subtotal()
        )
    }
}

/// Result of [`ShoppingCart::checkout`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<String>,
    pub total: f64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Total: ${}", self.total)?;
        write!(f, "Checkout completed")
    }
}

/// Ordered product lines. Each product appears on at most one line and no
/// line has quantity zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCart {
    items: Vec<CartLine>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity of `product` currently in the cart.
    pub fn quantity_of(&self, product: &Product) -> u32 {
        self.items
            .iter()
            .find(|line| line.product == *product)
            .map_or(0, |line| line.quantity)
    }

    /// Add `quantity` of `product`, merging into an existing line.
    /// A quantity of zero changes nothing. Returns the quantity now on the
    /// line; a merge that would overflow leaves the line untouched.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<u32, CartError> {
        if quantity == 0 {
            return Ok(self.quantity_of(product));
        }

        let total = match self.items.iter_mut().find(|line| line.product == *product) {
            Some(line) => {
                let current = line.quantity;
                line.quantity =
                    current
                        .checked_add(quantity)
                        .ok_or_else(|| CartError::QuantityOverflow {
                            name: product.name.clone(),
                            current,
                            added: quantity,
                        })?;
                line.quantity
            }
            None => {
                self.items.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
                quantity
            }
        };
        debug!(product = %product.name, quantity, total, "added to cart");
        Ok(total)
    }

    /// Remove `quantity` of `product`. Removing at least the current quantity
    /// deletes the line. Returns the quantity left on the line.
    pub fn remove_product(&mut self, product: &Product, quantity: u32) -> Result<u32, CartError> {
        let index = self
            .items
            .iter()
            .position(|line| line.product == *product)
            .ok_or_else(|| CartError::ProductNotInCart {
                name: product.name.clone(),
            })?;

        let line = &mut self.items[index];
        let remaining = if quantity >= line.quantity {
            self.items.remove(index);
            0
        } else {
            line.quantity -= quantity;
            line.quantity
        };

        debug!(product = %product.name, quantity, remaining, "removed from cart");
        Ok(remaining)
    }

    /// One rendered line per cart entry, e.g. `2 x Laptop - $2000`.
    pub fn view_cart(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// Sum of quantity × price over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLine::subtotal).sum()
    }

    /// Summarise the cart. The cart itself is left as is.
    pub fn checkout(&self) -> Receipt {
        let receipt = Receipt {
            lines: self.view_cart(),
            total: self.total(),
        };
        info!(lines = receipt.lines.len(), total = receipt.total, "checkout completed");
        receipt
    }
}
