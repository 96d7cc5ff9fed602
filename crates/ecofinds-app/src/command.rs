//! Commands accepted by [`crate::AppState::dispatch`].

use crate::screen::ScreenKind;
use ecofinds_market::catalog::{CategoryFilter, ProductDraft};
use ecofinds_market::ids::ProductId;
use ecofinds_session::ProfilePatch;

/// A user action that changes application state.
///
/// The profile picture upload is not here: it spans an await and goes
/// through [`crate::AppState::begin_photo_upload`] and
/// [`crate::AppState::finish_photo_upload`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Session
    Login { email: String, password: String },
    Signup { email: String, password: String, username: String },
    Logout,
    UpdateProfile(ProfilePatch),

    // Navigation
    Navigate(ScreenKind),
    Back,
    SelectProduct(ProductId),

    // Feed
    SetSearch(String),
    SetCategory(CategoryFilter),

    // Cart
    AddToCart(ProductId),
    SetQuantity { product_id: ProductId, quantity: i64 },
    RemoveFromCart(ProductId),
    Checkout,

    // Listings
    EditListing(ProductId),
    SubmitListing(ProductDraft),
    DeleteListing(ProductId),
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Signup { .. } => "signup",
            Command::Logout => "logout",
            Command::UpdateProfile(_) => "update_profile",
            Command::Navigate(_) => "navigate",
            Command::Back => "back",
            Command::SelectProduct(_) => "select_product",
            Command::SetSearch(_) => "set_search",
            Command::SetCategory(_) => "set_category",
            Command::AddToCart(_) => "add_to_cart",
            Command::SetQuantity { .. } => "set_quantity",
            Command::RemoveFromCart(_) => "remove_from_cart",
            Command::Checkout => "checkout",
            Command::EditListing(_) => "edit_listing",
            Command::SubmitListing(_) => "submit_listing",
            Command::DeleteListing(_) => "delete_listing",
        }
    }
}
