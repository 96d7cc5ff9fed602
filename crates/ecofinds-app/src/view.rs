//! Read-only snapshots handed to the front end.
//!
//! A [`View`] borrows from the application state, so a renderer can read
//! everything it needs but cannot change anything. Changes go through
//! [`crate::Command`].

use crate::screen::ScreenKind;
use ecofinds_market::cart::{CartItem, CartTotals};
use ecofinds_market::catalog::{CategoryFilter, Product, ProductDraft};
use ecofinds_market::ledger::{LedgerSummary, Purchase};
use ecofinds_session::{UploadStatus, User};

/// What the active screen shows.
#[derive(Debug)]
pub enum View<'a> {
    Login,
    Feed(FeedView<'a>),
    AddProduct(ListingFormView<'a>),
    MyListings(MyListingsView<'a>),
    ProductDetail(ProductDetailView<'a>),
    Dashboard(DashboardView<'a>),
    Cart(CartView<'a>),
    Purchases(PurchasesView<'a>),
    /// Nothing to render, e.g. the dashboard with nobody logged in.
    Empty,
}

impl View<'_> {
    /// Screen this view belongs to. `None` for [`View::Empty`].
    pub fn kind(&self) -> Option<ScreenKind> {
        let kind = match self {
            View::Login => ScreenKind::Login,
            View::Feed(_) => ScreenKind::Feed,
            View::AddProduct(_) => ScreenKind::AddProduct,
            View::MyListings(_) => ScreenKind::MyListings,
            View::ProductDetail(_) => ScreenKind::ProductDetail,
            View::Dashboard(_) => ScreenKind::Dashboard,
            View::Cart(_) => ScreenKind::Cart,
            View::Purchases(_) => ScreenKind::Purchases,
            View::Empty => return None,
        };
        Some(kind)
    }
}

/// The product feed.
#[derive(Debug)]
pub struct FeedView<'a> {
    pub user: Option<&'a User>,
    /// Listings that pass the current search and category filter.
    pub products: Vec<&'a Product>,
    pub search: &'a str,
    pub category: CategoryFilter,
    /// Units in the cart, for the cart badge.
    pub cart_count: u64,
}

/// The add/edit listing form.
#[derive(Debug)]
pub struct ListingFormView<'a> {
    /// Listing being edited, if any.
    pub editing: Option<&'a Product>,
    /// Initial form contents.
    pub draft: ProductDraft,
}

impl ListingFormView<'_> {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

/// The logged-in user's own listings.
#[derive(Debug)]
pub struct MyListingsView<'a> {
    pub listings: Vec<&'a Product>,
}

#[derive(Debug)]
pub struct ProductDetailView<'a> {
    pub product: &'a Product,
    /// Units of this product already in the cart.
    pub in_cart: u32,
}

#[derive(Debug)]
pub struct DashboardView<'a> {
    pub user: &'a User,
    pub upload: &'a UploadStatus,
}

#[derive(Debug)]
pub struct CartView<'a> {
    pub items: &'a [CartItem],
    pub totals: CartTotals,
    pub item_count: u64,
}

#[derive(Debug)]
pub struct PurchasesView<'a> {
    /// Newest first.
    pub purchases: &'a [Purchase],
    pub summary: LedgerSummary,
}
