//! Cart and cart line types.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::error::MarketError;
use crate::ids::ProductId;
use crate::ledger::{Ledger, Purchase};
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A product in the cart with its quantity.
///
/// The quantity is never zero: lowering it to zero removes the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product as it was when added.
    pub product: Product,
    /// Number of units, at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// The current session's pending selection, unique by product ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line when the product is already in the cart.
    /// Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = existing.quantity, "cart quantity incremented");
            return existing.quantity;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        debug!(product_id = %product.id, "added to cart");
        1
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns whether a line
    /// was changed or removed; `false` when the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id).is_some();
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| &i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                debug!(product_id = %product_id, quantity, "cart quantity set");
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns the removed line, if there was one.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|i| &i.product.id == product_id)?;
        debug!(product_id = %product_id, "removed from cart");
        Some(self.items.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in the order they were added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Subtotal, tax and total for the current lines.
    pub fn totals(&self) -> CartTotals {
        CartTotals::for_items(&self.items)
    }

    /// Move every line into a new purchase on the ledger.
    ///
    /// The cart is emptied and the purchase recorded under the same exclusive
    /// borrow, so no reader sees one without the other. Fails without touching
    /// either side when the cart is empty.
    pub fn checkout<'l>(
        &mut self,
        ledger: &'l mut Ledger,
        purchase_date: NaiveDate,
    ) -> Result<&'l Purchase, MarketError> {
        if self.is_empty() {
            return Err(MarketError::EmptyCart);
        }

        let items = std::mem::take(&mut self.items);
        info!(lines = items.len(), "checking out cart");
        Ok(ledger.record(items, purchase_date))
    }
}
