//! Domain types for the product catalog.

pub mod product;

pub use product::{DeletedProduct, Product, ProductId, ProductInput};
