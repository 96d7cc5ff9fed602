//! Shopping cart module.
//!
//! Contains the cart, its lines, and the tax/total calculation.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::{CartTotals, TAX_RATE_PERCENT};
