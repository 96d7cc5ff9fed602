//! Marketplace error types.
//!
//! The `Display` text of every variant is the message shown to the user.

use crate::money::Money;
use thiserror::Error;

/// Errors that can occur in catalog, cart and ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// A required listing field was left blank.
    #[error("Please fill in all fields")]
    MissingField(&'static str),

    /// The price is not a number or not greater than zero.
    #[error("Please enter a valid price")]
    InvalidPrice(String),

    /// The price is above the listing ceiling.
    #[error("Price cannot exceed {0}")]
    PriceTooHigh(Money),

    /// Checkout was attempted with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Unknown category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl MarketError {
    /// Check if this is a form validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MarketError::MissingField(_)
                | MarketError::InvalidPrice(_)
                | MarketError::PriceTooHigh(_)
        )
    }
}
