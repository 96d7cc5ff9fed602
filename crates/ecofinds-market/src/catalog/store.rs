//! In-memory catalog of listings.

use crate::catalog::seed::{seed_products, PLACEHOLDER_IMAGES};
use crate::catalog::{CategoryFilter, Product, ProductDraft, ProductPatch};
use crate::error::MarketError;
use crate::ids::{ProductId, UserId};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The full set of listings, newest first.
///
/// Ownership is not enforced here: any caller may update or delete any id.
/// The front end only offers those actions on the user's own listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the sample listings.
    pub fn seeded() -> Self {
        Self::from_products(seed_products())
    }

    /// Create a catalog from existing listings, kept in the given order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All listings in catalog order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if there are no listings.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a listing by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Listings whose title or description contains `search`
    /// (case-insensitive) and whose category passes `category`.
    pub fn filter(&self, search: &str, category: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_text(search) && category.matches(p))
            .collect()
    }

    /// Listings created by the given seller.
    pub fn by_seller(&self, seller_id: &UserId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_listed_by(seller_id))
            .collect()
    }

    /// Validate a draft and list it at the top of the catalog.
    ///
    /// The catalog is left untouched when validation fails.
    pub fn create(
        &mut self,
        draft: &ProductDraft,
        owner_id: &UserId,
        owner_name: &str,
        listed_on: NaiveDate,
    ) -> Result<&Product, MarketError> {
        let valid = draft.validate()?;
        let image_url = valid.image_url.unwrap_or_else(random_placeholder);

        let product = Product {
            id: ProductId::generate(),
            title: valid.title,
            description: valid.description,
            category: valid.category,
            price: valid.price,
            image_url,
            seller_id: owner_id.clone(),
            seller_name: owner_name.to_string(),
            created_at: listed_on,
        };

        info!(
            product_id = %product.id,
            seller_id = %owner_id,
            category = %product.category,
            price = %product.price,
            "listing created"
        );

        self.products.insert(0, product);
        Ok(&self.products[0])
    }

    /// Merge a patch into a listing.
    ///
    /// Returns `Ok(false)` when no listing has this ID.
    pub fn update(&mut self, id: &ProductId, patch: ProductPatch) -> Result<bool, MarketError> {
        patch.validate()?;

        match self.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.apply(patch);
                info!(product_id = %id, "listing updated");
                Ok(true)
            }
            None => {
                debug!(product_id = %id, "update skipped, listing not found");
                Ok(false)
            }
        }
    }

    /// Remove a listing. Returns the removed listing, if there was one.
    pub fn delete(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id);
        match index {
            Some(index) => {
                let removed = self.products.remove(index);
                info!(product_id = %id, "listing deleted");
                Some(removed)
            }
            None => {
                debug!(product_id = %id, "delete skipped, listing not found");
                None
            }
        }
    }
}

fn random_placeholder() -> String {
    PLACEHOLDER_IMAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PLACEHOLDER_IMAGES[0])
        .to_string()
}
