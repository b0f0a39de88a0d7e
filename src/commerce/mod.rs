//! Product and shopping cart records.

mod cart;
mod product;

pub use cart::{CartError, CartLine, Receipt, ShoppingCart};
pub use product::Product;
