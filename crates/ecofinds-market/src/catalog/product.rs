//! Product listings and the forms that create or edit them.

use crate::catalog::Category;
use crate::error::MarketError;
use crate::ids::{ProductId, UserId};
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A listing in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Category the listing belongs to.
    pub category: Category,
    /// Asking price, always positive.
    pub price: Money,
    /// Image URL.
    pub image_url: String,
    /// ID of the user who listed the item.
    pub seller_id: UserId,
    /// Seller name at the time of listing (denormalized for display).
    pub seller_name: String,
    /// Date the listing was created.
    pub created_at: NaiveDate,
}

impl Product {
    /// Check if the given user listed this product.
    pub fn is_listed_by(&self, user_id: &UserId) -> bool {
        &self.seller_id == user_id
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// An empty needle matches everything.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// Apply a patch. The caller has already validated it.
    pub(crate) fn apply(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

/// The listing form as filled in by a seller.
///
/// Fields hold raw input; [`ProductDraft::validate`] turns them into typed
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    /// Price exactly as typed, e.g. `"49.99"`.
    pub price: String,
    /// Optional image URL; a placeholder is used when absent or blank.
    pub image_url: Option<String>,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: Money,
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Start a draft with the required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: Some(category),
            price: price.into(),
            image_url: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Pre-fill a draft from an existing listing, for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            category: Some(product.category),
            price: product.price.amount().normalize().to_string(),
            image_url: Some(product.image_url.clone()),
        }
    }

    /// Check that every required field is present and the price is positive.
    pub fn validate(&self) -> Result<ValidDraft, MarketError> {
        let title = required(&self.title, "title")?;
        let description = required(&self.description, "description")?;
        let category = self.category.ok_or(MarketError::MissingField("category"))?;
        let raw_price = required(&self.price, "price")?;

        let price = Money::parse(&raw_price)
            .filter(Money::is_positive)
            .ok_or(MarketError::InvalidPrice(raw_price))?;
        check_price_ceiling(price)?;

        let image_url = self
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(ValidDraft {
            title,
            description,
            category,
            price,
            image_url,
        })
    }

    /// Turn a validated edit form into a patch for an existing listing.
    pub fn into_patch(self) -> Result<ProductPatch, MarketError> {
        let valid = self.validate()?;
        Ok(ProductPatch {
            title: Some(valid.title),
            description: Some(valid.description),
            category: Some(valid.category),
            price: Some(valid.price),
            image_url: valid.image_url,
        })
    }
}

/// Highest accepted listing price, in rupees. Keeps cart lines, tax and
/// ledger sums well inside [`rust_decimal::Decimal`]'s range.
pub const MAX_PRICE_RUPEES: i64 = 1_000_000_000;

fn check_price_ceiling(price: Money) -> Result<(), MarketError> {
    let max = Money::from_major(MAX_PRICE_RUPEES);
    if price > max {
        Err(MarketError::PriceTooHigh(max))
    } else {
        Ok(())
    }
}

fn required(value: &str, field: &'static str) -> Result<String, MarketError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(MarketError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Partial update for a listing. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Money>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Reject a patch whose price is not positive or above the ceiling.
    pub fn validate(&self) -> Result<(), MarketError> {
        match self.price {
            Some(price) if !price.is_positive() => {
                Err(MarketError::InvalidPrice(price.amount().to_string()))
            }
            Some(price) => check_price_ceiling(price),
            None => Ok(()),
        }
    }
}
