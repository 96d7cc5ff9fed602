//! Purchase history module.

mod ledger;
mod purchase;

pub use ledger::{Ledger, LedgerSummary};
pub use purchase::{Purchase, PurchaseStatus};
