//! Catalogue product record.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// A named item with a unit price.
///
/// Two products are equal when their names match and their prices have the
/// same bit pattern, so a NaN-priced product still equals itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Log and return the product description.
    pub fn view_product(&self) -> String {
        let description = self.to_string();
        info!(product = %self.name, "{description}");
        description
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price.to_bits() == other.price.to_bits()
    }
}

impl Eq for Product {}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The product {} has a price of {}", self.name, self.price)
    }
}
