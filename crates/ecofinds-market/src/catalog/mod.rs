//! Product catalog module.
//!
//! Contains listings, categories, the listing form and the in-memory store.

mod category;
mod product;
pub mod seed;
mod store;

pub use category::{Category, CategoryFilter};
pub use product::{Product, ProductDraft, ProductPatch, ValidDraft, MAX_PRICE_RUPEES};
pub use store::Catalog;
