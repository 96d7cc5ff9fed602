//! Marketplace domain for EcoFinds, a second-hand goods prototype.
//!
//! - **Catalog**: listings, categories, search/category filtering
//! - **Cart**: lines merged by product, 8% tax, checkout
//! - **Ledger**: append-only purchase history and its aggregates
//!
//! Everything is in memory. Money is exact until it is displayed.
//!
//! # Example
//!
//! ```
//! use ecofinds_market::prelude::*;
//!
//! let catalog = Catalog::seeded();
//! let mut cart = Cart::new();
//! let mut ledger = Ledger::new();
//!
//! let jacket = catalog.get(&ProductId::new("1")).unwrap();
//! cart.add(jacket);
//! cart.add(jacket);
//! assert_eq!(cart.totals().subtotal.display(), "\u{20b9}14,100");
//!
//! let purchase = cart.checkout(&mut ledger, date::today()).unwrap();
//! assert_eq!(purchase.item_count(), 2);
//! assert!(cart.is_empty());
//! ```

pub mod date;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod ledger;

pub use error::MarketError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::date;
    pub use crate::error::MarketError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, CategoryFilter, Product, ProductDraft, ProductPatch,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartTotals, TAX_RATE_PERCENT};

    // Ledger
    pub use crate::ledger::{Ledger, LedgerSummary, Purchase, PurchaseStatus};
}
