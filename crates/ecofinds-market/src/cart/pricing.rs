//! Cart pricing calculations.

use crate::cart::CartItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax applied to every order, in percent.
pub const TAX_RATE_PERCENT: u32 = 8;

/// Pricing breakdown for a set of cart lines.
///
/// Amounts are exact; round only when displaying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Σ price × quantity.
    pub subtotal: Money,
    /// Subtotal × 8%.
    pub tax: Money,
    /// Subtotal + tax.
    pub total: Money,
}

impl CartTotals {
    /// Compute totals for the given lines.
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal: Money = items.iter().map(CartItem::line_total).sum();
        Self::from_subtotal(subtotal)
    }

    /// Compute tax and total from a subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let tax = subtotal.percentage(TAX_RATE_PERCENT);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_subtotal() {
        let totals = CartTotals::from_subtotal(Money::from_major(250));
        assert_eq!(totals.tax, Money::from_major(20));
        assert_eq!(totals.total, Money::from_major(270));
    }

    #[test]
    fn test_tax_keeps_fractions() {
        let totals = CartTotals::from_subtotal(Money::from_minor(2075)); // 20.75
        assert_eq!(totals.tax, Money::from_minor(166)); // 1.66
        let totals = CartTotals::from_subtotal(Money::from_minor(1)); // 0.01
        assert_eq!(totals.total.display(), "\u{20b9}0.01");
        assert!(!totals.tax.is_zero());
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(CartTotals::for_items(&[]), CartTotals::default());
    }
}
