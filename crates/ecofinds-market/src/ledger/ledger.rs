//! Append-only purchase history.

use crate::cart::CartItem;
use crate::ids::PurchaseId;
use crate::ledger::Purchase;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Aggregates shown on the purchase history screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LedgerSummary {
    /// Number of purchases.
    pub order_count: usize,
    /// Σ quantity over every purchased line.
    pub item_count: u64,
    /// Σ total amount over every purchase.
    pub total_spent: Money,
}

/// Completed purchases, newest first.
///
/// There is no way to change or remove a recorded purchase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    purchases: Vec<Purchase>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checkout of the given lines.
    pub fn record(&mut self, items: Vec<CartItem>, purchase_date: NaiveDate) -> &Purchase {
        let purchase = Purchase::from_items(items, purchase_date);
        info!(
            purchase_id = %purchase.id,
            items = purchase.item_count(),
            total = %purchase.total_amount,
            "purchase recorded"
        );
        self.purchases.insert(0, purchase);
        &self.purchases[0]
    }

    /// All purchases, newest first.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// Look up a purchase by ID.
    pub fn get(&self, id: &PurchaseId) -> Option<&Purchase> {
        self.purchases.iter().find(|p| &p.id == id)
    }

    /// Number of purchases.
    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    /// Check if nothing has been purchased yet.
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    /// Units bought across every purchase.
    pub fn item_count(&self) -> u64 {
        self.purchases.iter().map(Purchase::item_count).sum()
    }

    /// Amount spent across every purchase.
    pub fn total_spent(&self) -> Money {
        self.purchases.iter().map(|p| p.total_amount).sum()
    }

    /// Recompute the history aggregates.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            order_count: self.len(),
            item_count: self.item_count(),
            total_spent: self.total_spent(),
        }
    }
}
