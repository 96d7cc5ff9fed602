//! The application state container.
//!
//! [`AppState`] owns every store. Front ends read it through [`AppState::view`]
//! and change it through [`AppState::dispatch`] or the typed methods behind
//! it. Each command logs what it changed, queues a notice for the user and
//! moves the router where the flow continues.

use crate::command::Command;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::notice::{Notice, Notices};
use crate::screen::{Router, Screen, ScreenKind};
use crate::view::{
    CartView, DashboardView, FeedView, ListingFormView, MyListingsView, ProductDetailView,
    PurchasesView, View,
};
use ecofinds_market::cart::Cart;
use ecofinds_market::catalog::{Catalog, CategoryFilter, ProductDraft};
use ecofinds_market::date;
use ecofinds_market::ids::{ProductId, PurchaseId};
use ecofinds_market::ledger::Ledger;
use ecofinds_session::{
    ImageCandidate, ImageRead, ProfileImage, ProfilePatch, Session, UploadError, UploadStatus,
    MAX_PROFILE_IMAGE_BYTES,
};
use tracing::{debug, info, warn};

/// Search text and category picked on the feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedFilter {
    pub search: String,
    pub category: CategoryFilter,
}

/// Everything the marketplace holds for the process lifetime.
#[derive(Debug)]
pub struct AppState {
    catalog: Catalog,
    cart: Cart,
    ledger: Ledger,
    session: Session,
    router: Router,
    feed: FeedFilter,
    upload: UploadStatus,
    notices: Notices,
    max_image_bytes: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(Catalog::seeded())
    }
}

impl AppState {
    /// Build the state described by a configuration.
    pub fn new(config: &AppConfig) -> Self {
        let catalog = if config.store.seed_catalog {
            Catalog::seeded()
        } else {
            Catalog::new()
        };
        info!(listings = catalog.len(), "marketplace ready");

        Self {
            max_image_bytes: config.upload.max_image_bytes,
            ..Self::with_catalog(catalog)
        }
    }

    /// Start logged out, on the login screen, with the given listings.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            ledger: Ledger::new(),
            session: Session::new(),
            router: Router::new(),
            feed: FeedFilter::default(),
            upload: UploadStatus::Idle,
            notices: Notices::default(),
            max_image_bytes: MAX_PROFILE_IMAGE_BYTES,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn screen(&self) -> &Screen {
        self.router.current()
    }

    pub fn feed_filter(&self) -> &FeedFilter {
        &self.feed
    }

    pub fn upload_status(&self) -> &UploadStatus {
        &self.upload
    }

    /// Notices not yet shown.
    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Take every pending notice, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Snapshot of the active screen.
    pub fn view(&self) -> View<'_> {
        match self.router.current() {
            Screen::Login => View::Login,
            Screen::Feed => View::Feed(FeedView {
                user: self.session.current(),
                products: self.catalog.filter(&self.feed.search, self.feed.category),
                search: &self.feed.search,
                category: self.feed.category,
                cart_count: self.cart.item_count(),
            }),
            Screen::AddProduct { editing } => View::AddProduct(ListingFormView {
                editing: editing.as_ref(),
                draft: editing
                    .as_ref()
                    .map(ProductDraft::from_product)
                    .unwrap_or_default(),
            }),
            Screen::MyListings => View::MyListings(MyListingsView {
                listings: self
                    .session
                    .current()
                    .map(|user| self.catalog.by_seller(&user.id))
                    .unwrap_or_default(),
            }),
            Screen::ProductDetail(product) => View::ProductDetail(ProductDetailView {
                product,
                in_cart: self.cart.get(&product.id).map_or(0, |item| item.quantity),
            }),
            Screen::Dashboard => match self.session.current() {
                Some(user) => View::Dashboard(DashboardView {
                    user,
                    upload: &self.upload,
                }),
                None => View::Empty,
            },
            Screen::Cart => View::Cart(CartView {
                items: self.cart.items(),
                totals: self.cart.totals(),
                item_count: self.cart.item_count(),
            }),
            Screen::Purchases => View::Purchases(PurchasesView {
                purchases: self.ledger.purchases(),
                summary: self.ledger.summary(),
            }),
        }
    }

    /// Apply a command.
    ///
    /// Returns whether it succeeded. Failures have already been queued as
    /// error notices.
    pub fn dispatch(&mut self, command: Command) -> bool {
        debug!(command = command.name(), screen = %self.router.kind(), "dispatch");
        match command {
            Command::Login { email, password } => {
                self.login(&email, &password);
                true
            }
            Command::Signup {
                email,
                password,
                username,
            } => {
                self.signup(&email, &password, &username);
                true
            }
            Command::Logout => {
                self.logout();
                true
            }
            Command::UpdateProfile(patch) => self.update_profile(patch).is_ok(),
            Command::Navigate(kind) => self.navigate(kind),
            Command::Back => {
                self.back();
                true
            }
            Command::SelectProduct(id) => self.select_product(&id),
            Command::SetSearch(text) => {
                self.set_search(text);
                true
            }
            Command::SetCategory(filter) => {
                self.set_category(filter);
                true
            }
            Command::AddToCart(id) => self.add_to_cart(&id).is_some(),
            Command::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(&product_id, quantity),
            Command::RemoveFromCart(id) => self.remove_from_cart(&id),
            Command::Checkout => self.checkout().is_ok(),
            Command::EditListing(id) => self.edit_listing(&id),
            Command::SubmitListing(draft) => self.submit_listing(draft).is_ok(),
            Command::DeleteListing(id) => self.delete_listing(&id),
        }
    }

    // === Session ===

    /// Mock login; always succeeds and opens the feed.
    pub fn login(&mut self, email: &str, password: &str) {
        self.session.login(email, password);
        self.router.navigate(Screen::Feed);
    }

    /// Mock signup; always succeeds and opens the dashboard to finish the
    /// profile.
    pub fn signup(&mut self, email: &str, password: &str, username: &str) {
        self.session.signup(email, password, username);
        self.router.navigate(Screen::Dashboard);
    }

    /// Drop the user and the cart, then return to login.
    ///
    /// Listings and purchase history stay.
    pub fn logout(&mut self) {
        self.session.logout();
        self.cart.clear();
        self.feed = FeedFilter::default();
        self.upload = UploadStatus::Idle;
        self.router.navigate(Screen::Login);
    }

    /// Merge profile edits into the current user.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Result<(), AppError> {
        let result = self.session.update_profile(patch).map(|_| ());
        self.report(result.map_err(AppError::from))?;
        self.notices.push(Notice::success("Profile updated successfully!"));
        Ok(())
    }

    // === Profile picture ===

    /// Validate a picked file and start reading it.
    ///
    /// The upload is marked busy until [`AppState::finish_photo_upload`]
    /// receives the read's outcome.
    pub fn begin_photo_upload(&mut self, candidate: ImageCandidate) -> Result<ImageRead, AppError> {
        let result = self.start_read(candidate);
        self.report(result)
    }

    fn start_read(&mut self, candidate: ImageCandidate) -> Result<ImageRead, AppError> {
        self.session.require()?;
        if self.upload.is_busy() {
            return Err(UploadError::Busy.into());
        }
        let read = candidate.validate(self.max_image_bytes)?;
        info!(file = read.file_name(), "profile image upload started");
        self.upload = UploadStatus::Reading {
            file_name: read.file_name().to_string(),
        };
        Ok(read)
    }

    /// Apply the outcome of a profile image read and clear the busy state.
    pub fn finish_photo_upload(
        &mut self,
        outcome: Result<ProfileImage, UploadError>,
    ) -> Result<(), AppError> {
        self.upload = UploadStatus::Idle;
        let result = outcome.map_err(AppError::from).and_then(|image| {
            self.session
                .set_profile_image(image)
                .map(|_| ())
                .map_err(AppError::from)
        });
        self.report(result)?;
        info!("profile image updated");
        self.notices
            .push(Notice::success("Profile picture updated successfully!"));
        Ok(())
    }

    /// Validate, read and apply a profile picture in one go.
    pub async fn upload_photo(&mut self, candidate: ImageCandidate) -> Result<(), AppError> {
        let read = self.begin_photo_upload(candidate)?;
        let outcome = read.run().await;
        self.finish_photo_upload(outcome)
    }

    // === Navigation ===

    /// Switch screens by name. Refuses the product detail screen, which
    /// needs [`AppState::select_product`].
    pub fn navigate(&mut self, kind: ScreenKind) -> bool {
        self.router.navigate_kind(kind)
    }

    /// Go to the active screen's fixed back target.
    pub fn back(&mut self) {
        self.router.back();
    }

    /// Open the detail screen for a listing. No-op for an unknown ID.
    pub fn select_product(&mut self, id: &ProductId) -> bool {
        match self.catalog.get(id) {
            Some(product) => {
                self.router.navigate(Screen::ProductDetail(product.clone()));
                true
            }
            None => false,
        }
    }

    // === Feed ===

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.feed.search = text.into();
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.feed.category = filter;
    }

    // === Cart ===

    /// Add one unit of a listing. Returns the line's new quantity, or `None`
    /// when the listing does not exist.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Option<u32> {
        let product = self.catalog.get(id)?;
        let quantity = self.cart.add(product);
        self.notices
            .push(Notice::success(format!("{} added to cart!", product.title)));
        Some(quantity)
    }

    /// Overwrite a cart line's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }
        self.cart.set_quantity(id, quantity)
    }

    /// Remove a cart line. No-op when it is not in the cart.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        match self.cart.remove(id) {
            Some(item) => {
                self.notices.push(Notice::success(format!(
                    "{} removed from cart",
                    item.product.title
                )));
                true
            }
            None => false,
        }
    }

    /// Turn the cart into a purchase and show the purchase history.
    pub fn checkout(&mut self) -> Result<PurchaseId, AppError> {
        let result = self
            .cart
            .checkout(&mut self.ledger, date::today())
            .map(|purchase| purchase.id.clone())
            .map_err(AppError::from);
        let id = self.report(result)?;
        self.notices
            .push(Notice::success("Purchase completed successfully!"));
        self.router.navigate(Screen::Purchases);
        Ok(id)
    }

    // === Listings ===

    /// Open the listing form pre-filled with an existing listing.
    pub fn edit_listing(&mut self, id: &ProductId) -> bool {
        match self.catalog.get(id) {
            Some(product) => {
                self.router.navigate(Screen::AddProduct {
                    editing: Some(product.clone()),
                });
                true
            }
            None => false,
        }
    }

    /// Save the listing form.
    ///
    /// Creates a new listing, or updates the one being edited. New listings
    /// return to the feed; edits return to My Listings.
    pub fn submit_listing(&mut self, draft: ProductDraft) -> Result<ProductId, AppError> {
        let result = self.save_listing(draft);
        let (id, edited) = self.report(result)?;
        if edited {
            self.router.navigate(Screen::MyListings);
        } else {
            self.router.navigate(Screen::Feed);
        }
        Ok(id)
    }

    fn save_listing(&mut self, draft: ProductDraft) -> Result<(ProductId, bool), AppError> {
        let user = self.session.require()?;

        let editing = match self.router.current() {
            Screen::AddProduct { editing: Some(product) } => Some(product.id.clone()),
            _ => None,
        };

        match editing {
            Some(id) => {
                let patch = draft.into_patch()?;
                if self.catalog.update(&id, patch)? {
                    self.notices
                        .push(Notice::success("Listing updated successfully!"));
                }
                Ok((id, true))
            }
            None => {
                let product = self
                    .catalog
                    .create(&draft, &user.id, &user.username, date::today())?;
                let id = product.id.clone();
                self.notices
                    .push(Notice::success("Product listed successfully!"));
                Ok((id, false))
            }
        }
    }

    /// Remove a listing. No-op for an unknown ID.
    pub fn delete_listing(&mut self, id: &ProductId) -> bool {
        match self.catalog.delete(id) {
            Some(product) => {
                self.notices.push(Notice::success(format!(
                    "{} deleted successfully",
                    product.title
                )));
                true
            }
            None => false,
        }
    }

    /// Queue a failed command's message for the user.
    fn report<T>(&mut self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(err) = &result {
            if err.is_validation() {
                debug!(error = %err, screen = %self.router.kind(), "command rejected");
            } else {
                warn!(error = %err, screen = %self.router.kind(), "command failed");
            }
            self.notices.push(Notice::error(err.to_string()));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use ecofinds_market::catalog::Category;
    use ecofinds_market::money::Money;
    use ecofinds_market::MarketError;

    fn logged_in() -> AppState {
        let mut app = AppState::default();
        app.login("jane@example.com", "secret");
        app.drain_notices();
        app
    }

    fn messages(app: &mut AppState) -> Vec<String> {
        app.drain_notices().into_iter().map(|n| n.message).collect()
    }

    #[test]
    fn test_starts_on_login() {
        let app = AppState::default();
        assert!(matches!(app.view(), View::Login));
        assert_eq!(app.catalog().len(), 25);
    }

    #[test]
    fn test_config_can_skip_seed() {
        let mut config = AppConfig::default();
        config.store.seed_catalog = false;
        config.upload.max_image_bytes = 10;

        let app = AppState::new(&config);
        assert!(app.catalog().is_empty());
        assert_eq!(app.max_image_bytes, 10);
    }

    #[test]
    fn test_login_and_signup_targets() {
        let mut app = AppState::default();
        app.dispatch(Command::Login {
            email: "a@b.c".into(),
            password: "x".into(),
        });
        assert_eq!(app.router().kind(), ScreenKind::Feed);

        app.dispatch(Command::Logout);
        assert_eq!(app.router().kind(), ScreenKind::Login);

        app.dispatch(Command::Signup {
            email: "a@b.c".into(),
            password: "x".into(),
            username: "abc".into(),
        });
        assert_eq!(app.router().kind(), ScreenKind::Dashboard);
    }

    #[test]
    fn test_feed_view_filters() {
        let mut app = logged_in();
        app.dispatch(Command::SetSearch("LEATHER".into()));
        app.dispatch(Command::SetCategory(CategoryFilter::Only(Category::Clothing)));

        let View::Feed(feed) = app.view() else {
            panic!("expected feed");
        };
        assert_eq!(feed.search, "LEATHER");
        assert!(!feed.products.is_empty());
        assert!(feed
            .products
            .iter()
            .all(|p| p.category == Category::Clothing));
    }

    #[test]
    fn test_add_to_cart_notice_and_badge() {
        let mut app = logged_in();
        let id = ProductId::new("1");
        assert_eq!(app.add_to_cart(&id), Some(1));
        assert_eq!(app.add_to_cart(&id), Some(2));

        assert_eq!(
            messages(&mut app),
            vec![
                "Vintage Leather Jacket added to cart!",
                "Vintage Leather Jacket added to cart!"
            ]
        );
        let View::Feed(feed) = app.view() else {
            panic!("expected feed");
        };
        assert_eq!(feed.cart_count, 2);
    }

    #[test]
    fn test_add_unknown_product_is_silent() {
        let mut app = logged_in();
        assert!(!app.dispatch(Command::AddToCart(ProductId::new("missing"))));
        assert!(app.cart().is_empty());
        assert!(app.notices().is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_with_notice() {
        let mut app = logged_in();
        let id = ProductId::new("3");
        app.add_to_cart(&id);
        app.drain_notices();

        assert!(app.dispatch(Command::SetQuantity {
            product_id: id.clone(),
            quantity: 0
        }));
        assert!(app.cart().is_empty());
        assert_eq!(messages(&mut app), vec!["Wooden Coffee Table removed from cart"]);
    }

    #[test]
    fn test_checkout_moves_to_purchases() {
        let mut app = logged_in();
        app.add_to_cart(&ProductId::new("1"));
        app.navigate(ScreenKind::Cart);
        app.drain_notices();

        let id = app.checkout().unwrap();
        assert!(app.ledger().get(&id).is_some());
        assert!(app.cart().is_empty());
        assert_eq!(app.router().kind(), ScreenKind::Purchases);
        assert_eq!(messages(&mut app), vec!["Purchase completed successfully!"]);
    }

    #[test]
    fn test_empty_checkout_reports_error() {
        let mut app = logged_in();
        app.navigate(ScreenKind::Cart);

        let err = app.checkout().unwrap_err();
        assert!(matches!(err, AppError::Market(MarketError::EmptyCart)));
        assert!(app.ledger().is_empty());
        assert_eq!(app.router().kind(), ScreenKind::Cart);

        let notices = app.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Your cart is empty");
    }

    #[test]
    fn test_create_listing_returns_to_feed() {
        let mut app = logged_in();
        app.navigate(ScreenKind::AddProduct);

        let draft = ProductDraft::new("Bike Helmet", "Barely used", Category::Sports, "45");
        let id = app.submit_listing(draft).unwrap();

        let product = app.catalog().get(&id).unwrap();
        assert_eq!(product.seller_name, "jane");
        assert_eq!(product.price, Money::from_major(45));
        assert_eq!(app.catalog().list()[0].id, id);
        assert_eq!(app.router().kind(), ScreenKind::Feed);
        assert_eq!(messages(&mut app), vec!["Product listed successfully!"]);
    }

    #[test]
    fn test_invalid_listing_stays_on_form() {
        let mut app = logged_in();
        app.navigate(ScreenKind::AddProduct);

        let draft = ProductDraft::new("Bike Helmet", "Barely used", Category::Sports, "-5");
        assert!(!app.dispatch(Command::SubmitListing(draft)));
        assert_eq!(app.catalog().len(), 25);
        assert_eq!(app.router().kind(), ScreenKind::AddProduct);
        assert_eq!(messages(&mut app), vec!["Please enter a valid price"]);
    }

    #[test]
    fn test_listing_requires_login() {
        let mut app = AppState::default();
        let draft = ProductDraft::new("Lamp", "Works", Category::HomeAndGarden, "10");
        let err = app.submit_listing(draft).unwrap_err();
        assert_eq!(err.to_string(), "Please log in first");
        assert_eq!(app.catalog().len(), 25);
    }

    #[test]
    fn test_edit_listing_round_trip() {
        let mut app = logged_in();
        let draft = ProductDraft::new("Desk", "Oak desk", Category::Furniture, "120");
        let id = app.submit_listing(draft).unwrap();
        app.drain_notices();

        assert!(app.edit_listing(&id));
        let View::AddProduct(form) = app.view() else {
            panic!("expected listing form");
        };
        assert!(form.is_editing());
        assert_eq!(form.draft.price, "120");

        let mut draft = form.draft;
        draft.price = "99.50".to_string();
        app.submit_listing(draft).unwrap();

        assert_eq!(app.catalog().get(&id).unwrap().price, Money::from_minor(9950));
        assert_eq!(app.catalog().len(), 26);
        assert_eq!(app.router().kind(), ScreenKind::MyListings);
        assert_eq!(messages(&mut app), vec!["Listing updated successfully!"]);
    }

    #[test]
    fn test_my_listings_shows_own_products() {
        let mut app = logged_in();
        let draft = ProductDraft::new("Desk", "Oak desk", Category::Furniture, "120");
        app.submit_listing(draft).unwrap();
        app.navigate(ScreenKind::MyListings);

        let View::MyListings(view) = app.view() else {
            panic!("expected my listings");
        };
        assert_eq!(view.listings.len(), 1);
        assert_eq!(view.listings[0].title, "Desk");
    }

    #[test]
    fn test_delete_listing() {
        let mut app = logged_in();
        assert!(app.dispatch(Command::DeleteListing(ProductId::new("12"))));
        assert_eq!(app.catalog().len(), 24);
        assert_eq!(messages(&mut app), vec!["Wireless Headphones deleted successfully"]);

        assert!(!app.dispatch(Command::DeleteListing(ProductId::new("12"))));
        assert_eq!(app.catalog().len(), 24);
        assert!(app.notices().is_empty());
    }

    #[test]
    fn test_select_product_opens_detail() {
        let mut app = logged_in();
        assert!(!app.dispatch(Command::Navigate(ScreenKind::ProductDetail)));
        assert_eq!(app.router().kind(), ScreenKind::Feed);

        assert!(app.dispatch(Command::SelectProduct(ProductId::new("5"))));
        app.add_to_cart(&ProductId::new("5"));
        let View::ProductDetail(detail) = app.view() else {
            panic!("expected detail");
        };
        assert_eq!(detail.product.id.as_str(), "5");
        assert_eq!(detail.in_cart, 1);

        app.dispatch(Command::Back);
        assert_eq!(app.router().kind(), ScreenKind::Feed);
    }

    #[test]
    fn test_dashboard_without_user_is_empty() {
        let mut app = AppState::default();
        app.navigate(ScreenKind::Dashboard);
        assert!(matches!(app.view(), View::Empty));
        assert_eq!(app.view().kind(), None);
    }

    #[test]
    fn test_update_profile() {
        let mut app = AppState::default();
        assert!(!app.dispatch(Command::UpdateProfile(ProfilePatch::default().phone("1"))));
        assert_eq!(messages(&mut app), vec!["Please log in first"]);

        app.signup("new@example.com", "pw", "newbie");
        assert!(app.dispatch(Command::UpdateProfile(
            ProfilePatch::default().full_name("New Bee")
        )));
        let View::Dashboard(dashboard) = app.view() else {
            panic!("expected dashboard");
        };
        assert_eq!(dashboard.user.full_name, "New Bee");
        assert_eq!(messages(&mut app), vec!["Profile updated successfully!"]);
    }

    #[test]
    fn test_photo_upload_busy_state() {
        let mut app = logged_in();
        app.navigate(ScreenKind::Dashboard);

        let read = app
            .begin_photo_upload(ImageCandidate::new("/tmp/me.png", "image/png", 10))
            .unwrap();
        assert_eq!(
            app.upload_status(),
            &UploadStatus::Reading {
                file_name: "me.png".to_string()
            }
        );

        let err = app
            .begin_photo_upload(ImageCandidate::new("/tmp/again.png", "image/png", 10))
            .unwrap_err();
        assert!(matches!(err, AppError::Upload(UploadError::Busy)));
        drop(read);

        let image = ProfileImage::from_bytes("image/png", &[1, 2]);
        app.finish_photo_upload(Ok(image.clone())).unwrap();
        assert!(!app.upload_status().is_busy());
        assert_eq!(app.session().current().unwrap().profile_image, Some(image));
    }

    #[test]
    fn test_photo_upload_rejections_do_not_go_busy() {
        let mut app = logged_in();
        let err = app
            .begin_photo_upload(ImageCandidate::new("/tmp/notes.txt", "text/plain", 10))
            .unwrap_err();
        assert!(matches!(err, AppError::Upload(UploadError::NotAnImage(_))));
        assert!(!app.upload_status().is_busy());
        assert_eq!(messages(&mut app), vec!["Please select a valid image file"]);
    }

    #[test]
    fn test_photo_read_failure_resets_busy() {
        let mut app = logged_in();
        let _read = app
            .begin_photo_upload(ImageCandidate::new("/tmp/me.png", "image/png", 10))
            .unwrap();

        let err = app
            .finish_photo_upload(Err(UploadError::Read("disk gone".into())))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to upload image");
        assert!(!app.upload_status().is_busy());
        assert!(app.session().current().unwrap().profile_image.is_none());
    }

    #[test]
    fn test_logout_keeps_catalog_and_ledger() {
        let mut app = logged_in();
        app.add_to_cart(&ProductId::new("1"));
        app.checkout().unwrap();
        app.add_to_cart(&ProductId::new("2"));
        app.dispatch(Command::DeleteListing(ProductId::new("3")));

        app.logout();
        assert!(app.session().current().is_none());
        assert!(app.cart().is_empty());
        assert_eq!(app.ledger().len(), 1);
        assert_eq!(app.catalog().len(), 24);
        assert_eq!(app.router().kind(), ScreenKind::Login);
    }
}
