//! Screens and the single-pointer router.
//!
//! Exactly one screen is active. Screens that need data carry it in their
//! variant, so a product detail screen cannot exist without its product.
//! There is no history stack: every screen has a fixed back target.

use crate::error::AppError;
use ecofinds_market::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The eight screens, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenKind {
    Login,
    Feed,
    AddProduct,
    MyListings,
    ProductDetail,
    Dashboard,
    Cart,
    Purchases,
}

impl ScreenKind {
    /// Every screen kind.
    pub const ALL: [ScreenKind; 8] = [
        ScreenKind::Login,
        ScreenKind::Feed,
        ScreenKind::AddProduct,
        ScreenKind::MyListings,
        ScreenKind::ProductDetail,
        ScreenKind::Dashboard,
        ScreenKind::Cart,
        ScreenKind::Purchases,
    ];

    /// Wire name, e.g. `"add-product"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Login => "login",
            ScreenKind::Feed => "feed",
            ScreenKind::AddProduct => "add-product",
            ScreenKind::MyListings => "my-listings",
            ScreenKind::ProductDetail => "product-detail",
            ScreenKind::Dashboard => "dashboard",
            ScreenKind::Cart => "cart",
            ScreenKind::Purchases => "purchases",
        }
    }

    /// Where "back" leads from this screen.
    pub fn back_target(&self) -> ScreenKind {
        match self {
            ScreenKind::Login => ScreenKind::Login,
            _ => ScreenKind::Feed,
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ScreenKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| AppError::UnknownScreen(wanted.to_string()))
    }
}

/// The active screen and the data it renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Login,
    Feed,
    /// The listing form. `editing` holds the listing being changed; `None`
    /// creates a new one.
    AddProduct { editing: Option<Product> },
    MyListings,
    ProductDetail(Product),
    Dashboard,
    Cart,
    Purchases,
}

impl Screen {
    /// The payload-free tag of this screen.
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Login => ScreenKind::Login,
            Screen::Feed => ScreenKind::Feed,
            Screen::AddProduct { .. } => ScreenKind::AddProduct,
            Screen::MyListings => ScreenKind::MyListings,
            Screen::ProductDetail(_) => ScreenKind::ProductDetail,
            Screen::Dashboard => ScreenKind::Dashboard,
            Screen::Cart => ScreenKind::Cart,
            Screen::Purchases => ScreenKind::Purchases,
        }
    }

    /// Build a screen that needs no payload.
    ///
    /// `AddProduct` opens an empty form. Returns `None` for `ProductDetail`,
    /// which cannot be shown without a product.
    pub fn from_kind(kind: ScreenKind) -> Option<Screen> {
        match kind {
            ScreenKind::Login => Some(Screen::Login),
            ScreenKind::Feed => Some(Screen::Feed),
            ScreenKind::AddProduct => Some(Screen::AddProduct { editing: None }),
            ScreenKind::MyListings => Some(Screen::MyListings),
            ScreenKind::ProductDetail => None,
            ScreenKind::Dashboard => Some(Screen::Dashboard),
            ScreenKind::Cart => Some(Screen::Cart),
            ScreenKind::Purchases => Some(Screen::Purchases),
        }
    }
}

/// Holds the single active screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Router {
    current: Screen,
}

impl Router {
    /// Start on the login screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active screen.
    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Tag of the active screen.
    pub fn kind(&self) -> ScreenKind {
        self.current.kind()
    }

    /// Switch to a screen.
    pub fn navigate(&mut self, screen: Screen) {
        debug!(from = %self.current.kind(), to = %screen.kind(), "navigate");
        self.current = screen;
    }

    /// Switch to a screen by tag.
    ///
    /// Refuses `ProductDetail`, which needs a product, and stays put.
    /// Returns whether the router moved.
    pub fn navigate_kind(&mut self, kind: ScreenKind) -> bool {
        match Screen::from_kind(kind) {
            Some(screen) => {
                self.navigate(screen);
                true
            }
            None => {
                debug!(to = %kind, "navigation refused, no product selected");
                false
            }
        }
    }

    /// Go to the active screen's fixed back target.
    pub fn back(&mut self) {
        let target = self.kind().back_target();
        if target != self.kind() {
            self.navigate_kind(target);
        }
    }
}
