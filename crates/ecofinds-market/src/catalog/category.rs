//! Listing categories.

use crate::error::MarketError;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a listing can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Electronics,
    Furniture,
    Accessories,
    Books,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
}

impl Category {
    /// Every category, in the order the listing form offers them.
    pub const ALL: [Category; 7] = [
        Category::Clothing,
        Category::Electronics,
        Category::Furniture,
        Category::Accessories,
        Category::Books,
        Category::HomeAndGarden,
        Category::Sports,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Accessories => "Accessories",
            Category::Books => "Books",
            Category::HomeAndGarden => "Home & Garden",
            Category::Sports => "Sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MarketError::UnknownCategory(wanted.to_string()))
    }
}

/// Category selector used by the product feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only listings in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// Label shown in the category picker.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// The picker options: `All` followed by every category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
