//! Money type for representing monetary values.
//!
//! Amounts are exact decimals in a single currency (Indian rupee). Nothing is
//! rounded while computing; rounding happens only in [`Money::display`].
//! Arithmetic saturates at the limits of [`Decimal`] instead of panicking.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

/// Currency glyph used for every rendered amount.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// Decimal places shown when an amount has a fractional part.
const DISPLAY_PLACES: u32 = 2;

/// A monetary value in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a value from an exact decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a value from a whole number of rupees.
    ///
    /// ```
    /// use ecofinds_market::money::Money;
    /// assert_eq!(Money::from_major(7050).display(), "\u{20b9}7,050");
    /// ```
    pub fn from_major(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// Create a value from paise (hundredths of a rupee).
    pub fn from_minor(paise: i64) -> Self {
        Self(Decimal::new(paise, 2))
    }

    /// Parse user input such as `"49.99"`. Surrounding whitespace is ignored.
    ///
    /// Returns `None` when the text is not a plain decimal number.
    pub fn parse(input: &str) -> Option<Self> {
        Decimal::from_str(input.trim()).ok().map(Self)
    }

    /// Zero rupees.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Calculate a whole-number percentage of this amount, exactly.
    pub fn percentage(&self, percent: u32) -> Money {
        Money(self.0.saturating_mul(Decimal::from(percent)) / Decimal::ONE_HUNDRED)
    }

    /// Format for display, e.g. `₹7,050` or `₹21.60`.
    ///
    /// Rounds half away from zero to two places, groups thousands with commas
    /// and drops the fractional part when it is zero.
    pub fn display(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let abs = rounded.abs();
        let whole = group_thousands(&abs.trunc().normalize().to_string());
        let paise = (abs.fract() * Decimal::ONE_HUNDRED).to_u32().unwrap_or(0);

        if paise == 0 {
            format!("{sign}{CURRENCY_SYMBOL}{whole}")
        } else {
            format!("{sign}{CURRENCY_SYMBOL}{whole}.{paise:02}")
        }
    }
}

/// Insert a comma between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_whole_amounts() {
        assert_eq!(Money::from_major(0).display(), "\u{20b9}0");
        assert_eq!(Money::from_major(999).display(), "\u{20b9}999");
        assert_eq!(Money::from_major(7050).display(), "\u{20b9}7,050");
        assert_eq!(Money::from_major(1_234_567).display(), "\u{20b9}1,234,567");
    }

    #[test]
    fn test_money_display_fractions() {
        assert_eq!(Money::from_minor(2160).display(), "\u{20b9}21.60");
        assert_eq!(Money::from_minor(105).display(), "\u{20b9}1.05");
        assert_eq!(Money::from_minor(704_050).display(), "\u{20b9}7,040.50");
    }

    #[test]
    fn test_money_display_rounds_half_away_from_zero() {
        let m = Money::new(Decimal::new(12345, 3)); // 12.345
        assert_eq!(m.display(), "\u{20b9}12.35");
        let m = Money::new(Decimal::new(99999, 4)); // 9.9999
        assert_eq!(m.display(), "\u{20b9}10");
    }

    #[test]
    fn test_money_parse() {
        assert_eq!(Money::parse("49.99"), Some(Money::from_minor(4999)));
        assert_eq!(Money::parse("  120 "), Some(Money::from_major(120)));
        assert_eq!(Money::parse("-5"), Some(Money::from_major(-5)));
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse(""), None);
    }

    #[test]
    fn test_money_percentage_is_exact() {
        let tax = Money::from_minor(1).percentage(8);
        assert_eq!(tax.amount(), Decimal::new(8, 4)); // 0.0008
        assert_eq!(Money::from_major(250).percentage(8), Money::from_major(20));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_major(100);
        let b = Money::from_major(50);
        assert_eq!(a + b, Money::from_major(150));
        assert_eq!(a - b, Money::from_major(50));
        assert_eq!(a * 3, Money::from_major(300));
        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total, Money::from_major(200));
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.times(u32::MAX), huge);
        assert_eq!(huge + Money::from_major(1), huge);
        assert_eq!(Money::new(Decimal::MIN) - Money::from_major(1), Money::new(Decimal::MIN));
        assert_eq!(huge.percentage(8), Money::new(Decimal::MAX / Decimal::ONE_HUNDRED));
        let total: Money = [huge, huge, huge].iter().sum();
        assert_eq!(total, huge);
    }

    #[test]
    fn test_money_sign_checks() {
        assert!(Money::from_major(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money::zero().is_zero());
        assert!(!Money::from_major(-3).is_positive());
    }
}
