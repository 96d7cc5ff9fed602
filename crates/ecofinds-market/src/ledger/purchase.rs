//! Completed purchases.

use crate::cart::{CartItem, CartTotals};
use crate::ids::PurchaseId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a purchase. Every recorded purchase is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PurchaseStatus {
    #[default]
    Completed,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of a checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Unique purchase identifier.
    pub id: PurchaseId,
    /// The cart lines as they were at checkout.
    pub items: Vec<CartItem>,
    /// Σ price × quantity at checkout.
    pub subtotal: Money,
    /// Tax charged.
    pub tax: Money,
    /// Amount paid, tax included.
    pub total_amount: Money,
    /// Date of the checkout.
    pub purchase_date: NaiveDate,
    /// Purchase status.
    pub status: PurchaseStatus,
}

impl Purchase {
    /// Snapshot the given cart lines into a new purchase.
    pub fn from_items(items: Vec<CartItem>, purchase_date: NaiveDate) -> Self {
        let totals = CartTotals::for_items(&items);
        Self {
            id: PurchaseId::generate(),
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total_amount: totals.total,
            purchase_date,
            status: PurchaseStatus::Completed,
        }
    }

    /// Total units bought in this purchase.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
