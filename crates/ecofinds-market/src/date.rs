//! Calendar dates for listings and purchases.

use chrono::{Local, NaiveDate};

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date in long form, e.g. `January 15, 2024`.
pub fn display_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
