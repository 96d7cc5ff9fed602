//! End-to-end flows through `AppState`.

use ecofinds_app::view::View;
use ecofinds_app::{AppState, Command, NoticeLevel, ScreenKind};
use ecofinds_market::cart::CartTotals;
use ecofinds_market::catalog::{Catalog, Category, Product, ProductDraft, MAX_PRICE_RUPEES};
use ecofinds_market::ids::{ProductId, UserId};
use ecofinds_market::money::Money;
use ecofinds_session::{ImageCandidate, MAX_PROFILE_IMAGE_BYTES};
use proptest::prelude::*;
use std::io::Write;

fn listing(id: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Item {id}"),
        description: "Used".to_string(),
        category: Category::Books,
        price: Money::from_major(price),
        image_url: String::new(),
        seller_id: UserId::new("9"),
        seller_name: "Seller".to_string(),
        created_at: ecofinds_market::date::today(),
    }
}

fn app_with(products: Vec<Product>) -> AppState {
    let mut app = AppState::with_catalog(Catalog::from_products(products));
    app.dispatch(Command::Login {
        email: "buyer@example.com".into(),
        password: "pw".into(),
    });
    app.drain_notices();
    app
}

#[test]
fn checkout_scenario_totals() {
    let mut app = app_with(vec![listing("a", 100), listing("b", 50)]);
    let a = ProductId::new("a");
    let b = ProductId::new("b");

    app.dispatch(Command::AddToCart(a.clone()));
    app.dispatch(Command::AddToCart(a));
    app.dispatch(Command::AddToCart(b));
    app.dispatch(Command::Navigate(ScreenKind::Cart));

    let View::Cart(cart) = app.view() else {
        panic!("expected cart view");
    };
    assert_eq!(cart.items.len(), 2);
    assert_eq!(
        cart.totals,
        CartTotals {
            subtotal: Money::from_major(250),
            tax: Money::from_major(20),
            total: Money::from_major(270),
        }
    );
    assert_eq!(cart.totals.total.display(), "\u{20b9}270");

    assert!(app.dispatch(Command::Checkout));
    let View::Purchases(history) = app.view() else {
        panic!("expected purchase history");
    };
    assert_eq!(history.purchases.len(), 1);
    assert_eq!(history.purchases[0].total_amount, Money::from_major(270));
    assert_eq!(history.summary.order_count, 1);
    assert_eq!(history.summary.item_count, 3);
    assert_eq!(history.summary.total_spent, Money::from_major(270));
    assert!(app.cart().is_empty());
}

#[test]
fn oversized_price_is_rejected_at_the_form() {
    let mut app = app_with(vec![listing("a", 10)]);
    app.dispatch(Command::Navigate(ScreenKind::AddProduct));

    let draft = ProductDraft::new(
        "Gold Bar",
        "Very heavy",
        Category::Accessories,
        "10000000000000000000000000000",
    );
    assert!(!app.dispatch(Command::SubmitListing(draft)));
    assert_eq!(app.catalog().len(), 1);

    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "Price cannot exceed \u{20b9}1,000,000,000");
}

#[test]
fn most_expensive_cart_renders_and_checks_out() {
    let mut app = app_with(vec![listing("a", MAX_PRICE_RUPEES)]);
    let a = ProductId::new("a");
    app.dispatch(Command::AddToCart(a.clone()));
    app.dispatch(Command::SetQuantity {
        product_id: a,
        quantity: i64::MAX,
    });
    app.dispatch(Command::Navigate(ScreenKind::Cart));

    let subtotal = Money::from_major(MAX_PRICE_RUPEES).times(u32::MAX);
    let expected = subtotal + subtotal.percentage(8);
    let View::Cart(cart) = app.view() else {
        panic!("expected cart view");
    };
    assert_eq!(cart.totals.total, expected);

    assert!(app.dispatch(Command::Checkout));
    assert_eq!(app.ledger().summary().total_spent, expected);
}

#[test]
fn empty_checkout_leaves_ledger_alone() {
    let mut app = app_with(vec![listing("a", 10)]);
    app.dispatch(Command::Navigate(ScreenKind::Cart));

    assert!(!app.dispatch(Command::Checkout));
    assert!(app.ledger().is_empty());

    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "Your cart is empty");
}

#[test]
fn logout_then_login_keeps_catalog_and_history() {
    let mut app = AppState::default();
    app.dispatch(Command::Login {
        email: "jane@example.com".into(),
        password: "pw".into(),
    });
    app.dispatch(Command::SubmitListing(ProductDraft::new(
        "Tent",
        "Two person tent",
        Category::Sports,
        "60",
    )));
    app.dispatch(Command::AddToCart(ProductId::new("1")));
    app.dispatch(Command::Checkout);
    app.dispatch(Command::AddToCart(ProductId::new("2")));
    assert_eq!(app.cart().len(), 1);

    app.dispatch(Command::Logout);
    assert_eq!(app.router().kind(), ScreenKind::Login);
    assert!(app.session().current().is_none());
    assert!(app.cart().is_empty());

    app.dispatch(Command::Login {
        email: "jane@example.com".into(),
        password: "pw".into(),
    });
    assert_eq!(app.catalog().len(), 26);
    assert_eq!(app.ledger().len(), 1);
    assert!(app.cart().is_empty());
}

#[test]
fn deleting_unknown_listing_is_a_silent_noop() {
    let mut app = AppState::default();
    let before = app.catalog().len();

    assert!(!app.dispatch(Command::DeleteListing(ProductId::new("does-not-exist"))));
    assert_eq!(app.catalog().len(), before);
    assert!(app.notices().is_empty());
}

#[test]
fn set_quantity_zero_shrinks_cart_by_one() {
    let mut app = app_with(vec![listing("a", 10), listing("b", 20)]);
    app.dispatch(Command::AddToCart(ProductId::new("a")));
    app.dispatch(Command::AddToCart(ProductId::new("b")));

    app.dispatch(Command::SetQuantity {
        product_id: ProductId::new("a"),
        quantity: 0,
    });
    assert_eq!(app.cart().len(), 1);
    assert!(app.cart().get(&ProductId::new("b")).is_some());
}

#[test]
fn signup_lands_on_dashboard_to_finish_profile() {
    let mut app = AppState::default();
    app.dispatch(Command::Signup {
        email: "new@example.com".into(),
        password: "pw".into(),
        username: "newbie".into(),
    });

    let View::Dashboard(dashboard) = app.view() else {
        panic!("expected dashboard");
    };
    assert_eq!(dashboard.user.username, "newbie");
    assert!(!dashboard.user.is_profile_complete());
}

#[tokio::test]
async fn profile_picture_upload_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".gif").tempfile().unwrap();
    file.write_all(b"GIF89a").unwrap();

    let mut app = app_with(Vec::new());
    app.dispatch(Command::Navigate(ScreenKind::Dashboard));

    let candidate = ImageCandidate::from_path(file.path()).await.unwrap();
    app.upload_photo(candidate).await.unwrap();

    let user = app.session().current().unwrap();
    let image = user.profile_image.as_ref().unwrap();
    assert!(image.as_data_url().starts_with("data:image/gif;base64,"));
    assert!(!app.upload_status().is_busy());

    let notices = app.drain_notices();
    assert_eq!(notices[0].message, "Profile picture updated successfully!");
}

#[tokio::test]
async fn oversized_picture_is_rejected_before_reading() {
    let mut app = app_with(Vec::new());
    let candidate = ImageCandidate::new("/nowhere/huge.png", "image/png", MAX_PROFILE_IMAGE_BYTES + 1);

    let err = app.upload_photo(candidate).await.unwrap_err();
    assert_eq!(err.to_string(), "Image size must be less than 5MB");
    assert!(!app.upload_status().is_busy());
}

proptest! {
    #[test]
    fn checkout_records_exactly_the_cart_total(
        picks in prop::collection::vec((0usize..4, 1i64..5), 1..10)
    ) {
        let products: Vec<Product> = (0..4).map(|n| listing(&n.to_string(), 10 * (n as i64 + 1))).collect();
        let mut app = app_with(products);
        for (index, quantity) in &picks {
            let id = ProductId::new(index.to_string());
            app.dispatch(Command::AddToCart(id.clone()));
            app.dispatch(Command::SetQuantity { product_id: id, quantity: *quantity });
        }
        let expected = app.cart().totals().total;

        prop_assert!(app.dispatch(Command::Checkout));
        prop_assert_eq!(app.ledger().len(), 1);
        prop_assert_eq!(app.ledger().purchases()[0].total_amount, expected);
        prop_assert!(app.cart().is_empty());
    }
}
