//! Screen rendering and input.
//!
//! Each screen prints its [`View`] and asks for the next action. Nothing here
//! touches application state; choices come back as [`UiAction`]s.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Password, Select};
use ecofinds_app::view::{
    CartView, DashboardView, FeedView, ListingFormView, MyListingsView, ProductDetailView,
    PurchasesView,
};
use ecofinds_app::{Command, ScreenKind, View};
use ecofinds_market::cart::TAX_RATE_PERCENT;
use ecofinds_market::catalog::{Category, CategoryFilter, Product, ProductDraft};
use ecofinds_market::date;
use ecofinds_market::ids::ProductId;
use ecofinds_session::{ProfilePatch, UploadStatus};

use crate::context::Context;
use crate::output::{format_bytes, status_badge};

/// What the user asked for.
#[derive(Debug)]
pub enum UiAction {
    /// Apply a command to the application state.
    Command(Command),
    /// Apply several commands in order.
    Batch(Vec<Command>),
    /// Read a file and set it as the profile picture.
    UploadPhoto(PathBuf),
    /// Leave the application.
    Quit,
}

impl From<Command> for UiAction {
    fn from(command: Command) -> Self {
        UiAction::Command(command)
    }
}

/// Render a view and prompt for the next action.
pub fn show(view: &View<'_>, ctx: &Context) -> Result<UiAction> {
    match view {
        View::Login => login(ctx),
        View::Feed(feed) => feed_screen(feed, ctx),
        View::AddProduct(form) => listing_form(form, ctx),
        View::MyListings(listings) => my_listings(listings, ctx),
        View::ProductDetail(detail) => product_detail(detail, ctx),
        View::Dashboard(dashboard) => dashboard_screen(dashboard, ctx),
        View::Cart(cart) => cart_screen(cart, ctx),
        View::Purchases(history) => purchases(history, ctx),
        View::Empty => {
            ctx.output.warn("Nothing to show here");
            Ok(Command::Back.into())
        }
    }
}

fn choose<T: Copy>(prompt: &str, options: &[(&str, T)]) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[index].1)
}

fn pick_product(prompt: &str, products: &[&Product]) -> Result<Option<ProductId>> {
    if products.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = products
        .iter()
        .map(|p| format!("{} ({})", p.title, p.price.display()))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(products[index].id.clone()))
}

fn text(prompt: &str, initial: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn product_row(product: &Product) -> String {
    format!(
        "{}  {}  {}",
        style(&product.title).bold(),
        style(product.price.display()).green(),
        style(product.category).dim()
    )
}

// === Login ===

#[derive(Clone, Copy)]
enum LoginChoice {
    Login,
    Signup,
    Quit,
}

fn login(ctx: &Context) -> Result<UiAction> {
    ctx.output.header("Welcome to EcoFinds");
    ctx.output.info("Sustainable second-hand marketplace");

    let choice = choose(
        "Choose",
        &[
            ("Log in", LoginChoice::Login),
            ("Sign up", LoginChoice::Signup),
            ("Quit", LoginChoice::Quit),
        ],
    )?;

    let action = match choice {
        LoginChoice::Login => {
            let email: String = Input::new().with_prompt("Email").interact_text()?;
            let password = Password::new().with_prompt("Password").interact()?;
            Command::Login { email, password }.into()
        }
        LoginChoice::Signup => {
            let email: String = Input::new().with_prompt("Email").interact_text()?;
            let username: String = Input::new().with_prompt("Username").interact_text()?;
            let password = Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()?;
            Command::Signup {
                email,
                password,
                username,
            }
            .into()
        }
        LoginChoice::Quit => UiAction::Quit,
    };
    Ok(action)
}

// === Feed ===

#[derive(Clone, Copy)]
enum FeedChoice {
    View,
    AddToCart,
    Search,
    Category,
    ClearFilters,
    Go(ScreenKind),
    Logout,
    Quit,
}

fn feed_screen(feed: &FeedView<'_>, ctx: &Context) -> Result<UiAction> {
    ctx.output.header("EcoFinds");
    if let Some(user) = feed.user {
        ctx.output.info(&format!("Hi, {}", user.display_name()));
    }
    if !feed.search.is_empty() || feed.category != CategoryFilter::All {
        ctx.output.kv("Search", if feed.search.is_empty() { "-" } else { feed.search });
        ctx.output.kv("Category", feed.category.label());
    }

    if feed.products.is_empty() {
        ctx.output.info("No products found. Try adjusting your search or filters.");
    }
    for product in &feed.products {
        ctx.output.list_item(&product_row(product));
    }

    let cart_label = format!("Cart ({})", feed.cart_count);
    let choice = choose(
        "What next?",
        &[
            ("View a product", FeedChoice::View),
            ("Add to cart", FeedChoice::AddToCart),
            ("Search", FeedChoice::Search),
            ("Filter by category", FeedChoice::Category),
            ("Clear filters", FeedChoice::ClearFilters),
            (cart_label.as_str(), FeedChoice::Go(ScreenKind::Cart)),
            ("Sell an item", FeedChoice::Go(ScreenKind::AddProduct)),
            ("My listings", FeedChoice::Go(ScreenKind::MyListings)),
            ("Previous purchases", FeedChoice::Go(ScreenKind::Purchases)),
            ("Profile", FeedChoice::Go(ScreenKind::Dashboard)),
            ("Log out", FeedChoice::Logout),
            ("Quit", FeedChoice::Quit),
        ],
    )?;

    let action = match choice {
        FeedChoice::View => match pick_product("Which product?", &feed.products)? {
            Some(id) => Command::SelectProduct(id).into(),
            None => Command::Navigate(ScreenKind::Feed).into(),
        },
        FeedChoice::AddToCart => match pick_product("Add which product?", &feed.products)? {
            Some(id) => Command::AddToCart(id).into(),
            None => Command::Navigate(ScreenKind::Feed).into(),
        },
        FeedChoice::Search => Command::SetSearch(text("Search products", feed.search)?).into(),
        FeedChoice::Category => {
            let options = CategoryFilter::options();
            let labels: Vec<&str> = options.iter().map(CategoryFilter::label).collect();
            let current = options.iter().position(|o| *o == feed.category).unwrap_or(0);
            let index = Select::new()
                .with_prompt("Category")
                .items(&labels)
                .default(current)
                .interact()?;
            Command::SetCategory(options[index]).into()
        }
        FeedChoice::ClearFilters => UiAction::Batch(vec![
            Command::SetSearch(String::new()),
            Command::SetCategory(CategoryFilter::All),
        ]),
        FeedChoice::Go(kind) => Command::Navigate(kind).into(),
        FeedChoice::Logout => Command::Logout.into(),
        FeedChoice::Quit => UiAction::Quit,
    };
    Ok(action)
}

// === Listing form ===

fn listing_form(form: &ListingFormView<'_>, ctx: &Context) -> Result<UiAction> {
    let title = if form.is_editing() {
        "Edit listing"
    } else {
        "List an item"
    };
    ctx.output.header(title);

    let proceed = Confirm::new()
        .with_prompt("Fill in the form now?")
        .default(true)
        .interact()?;
    if !proceed {
        return Ok(Command::Back.into());
    }

    let draft = &form.draft;
    let title = text("Title", &draft.title)?;
    let description = text("Description", &draft.description)?;

    let categories: Vec<&str> = Category::ALL.iter().map(Category::display_name).collect();
    let current = draft
        .category
        .and_then(|c| Category::ALL.iter().position(|o| *o == c))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(current)
        .interact()?;

    let price = text("Price (\u{20b9})", &draft.price)?;
    let image_url = text(
        "Image URL (blank for a placeholder)",
        draft.image_url.as_deref().unwrap_or_default(),
    )?;

    Ok(Command::SubmitListing(ProductDraft {
        title,
        description,
        category: Some(Category::ALL[index]),
        price,
        image_url: Some(image_url),
    })
    .into())
}

// === My listings ===

#[derive(Clone, Copy)]
enum ListingsChoice {
    Edit,
    Delete,
    AddNew,
    Back,
}

fn my_listings(view: &MyListingsView<'_>, ctx: &Context) -> Result<UiAction> {
    ctx.output.header(&format!("My Listings ({})", view.listings.len()));
    if view.listings.is_empty() {
        ctx.output.info("You haven't listed anything yet");
    }
    for product in &view.listings {
        ctx.output.list_item(&format!(
            "{}  {}",
            product_row(product),
            style(format!("listed {}", date::display_long(product.created_at))).dim()
        ));
    }

    let choice = choose(
        "What next?",
        &[
            ("Edit a listing", ListingsChoice::Edit),
            ("Delete a listing", ListingsChoice::Delete),
            ("Add new listing", ListingsChoice::AddNew),
            ("Back", ListingsChoice::Back),
        ],
    )?;

    let action = match choice {
        ListingsChoice::Edit => match pick_product("Edit which listing?", &view.listings)? {
            Some(id) => Command::EditListing(id).into(),
            None => Command::Navigate(ScreenKind::MyListings).into(),
        },
        ListingsChoice::Delete => match pick_product("Delete which listing?", &view.listings)? {
            Some(id) => {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this listing?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    Command::DeleteListing(id).into()
                } else {
                    Command::Navigate(ScreenKind::MyListings).into()
                }
            }
            None => Command::Navigate(ScreenKind::MyListings).into(),
        },
        ListingsChoice::AddNew => Command::Navigate(ScreenKind::AddProduct).into(),
        ListingsChoice::Back => Command::Back.into(),
    };
    Ok(action)
}

// === Product detail ===

fn product_detail(view: &ProductDetailView<'_>, ctx: &Context) -> Result<UiAction> {
    let product = view.product;
    ctx.output.header(&product.title);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Category", product.category.display_name());
    ctx.output.kv("Seller", &product.seller_name);
    ctx.output.kv("Listed", &date::display_long(product.created_at));
    ctx.output.kv("Image", &product.image_url);
    println!("\n  {}\n", product.description);
    if view.in_cart > 0 {
        ctx.output.info(&format!("{} in your cart", view.in_cart));
    }

    let add = choose("What next?", &[("Add to cart", true), ("Back", false)])?;
    if add {
        Ok(Command::AddToCart(product.id.clone()).into())
    } else {
        Ok(Command::Back.into())
    }
}

// === Dashboard ===

#[derive(Clone, Copy)]
enum DashboardChoice {
    Edit,
    Photo,
    Back,
}

fn dashboard_screen(view: &DashboardView<'_>, ctx: &Context) -> Result<UiAction> {
    let user = view.user;
    ctx.output.header("My Profile");
    ctx.output.kv("Full name", &user.full_name);
    ctx.output.kv("Username", &user.username);
    ctx.output.kv("Email", &user.email);
    ctx.output.kv("Phone", &user.phone);
    ctx.output.kv("Address", &user.address);
    match &user.profile_image {
        Some(image) => ctx.output.kv(
            "Picture",
            &format!("{} ({})", image.mime_type(), format_bytes(image.encoded_len() as u64)),
        ),
        None => ctx.output.kv("Picture", "none"),
    }
    if !user.is_profile_complete() {
        ctx.output.warn("Complete your profile so buyers can reach you");
    }

    let mut options = vec![("Edit profile", DashboardChoice::Edit)];
    match view.upload {
        UploadStatus::Idle => options.push(("Change profile picture", DashboardChoice::Photo)),
        UploadStatus::Reading { file_name } => {
            ctx.output.info(&format!("Uploading {}...", file_name));
        }
    }
    options.push(("Back", DashboardChoice::Back));

    let action = match choose("What next?", &options)? {
        DashboardChoice::Edit => {
            let patch = ProfilePatch::default()
                .full_name(text("Full name", &user.full_name)?)
                .username(text("Username", &user.username)?)
                .email(text("Email", &user.email)?)
                .phone(text("Phone", &user.phone)?)
                .address(text("Address", &user.address)?);
            Command::UpdateProfile(patch).into()
        }
        DashboardChoice::Photo => {
            let path: String = Input::new()
                .with_prompt("Image file path")
                .interact_text()?;
            UiAction::UploadPhoto(ctx.resolve_path(&path))
        }
        DashboardChoice::Back => Command::Back.into(),
    };
    Ok(action)
}

// === Cart ===

#[derive(Clone, Copy)]
enum CartChoice {
    Quantity,
    Remove,
    Checkout,
    Back,
}

fn cart_screen(view: &CartView<'_>, ctx: &Context) -> Result<UiAction> {
    ctx.output.header(&format!("Shopping Cart ({} items)", view.item_count));
    if view.items.is_empty() {
        ctx.output.info("Your cart is empty");
        choose("What next?", &[("Start shopping", ())])?;
        return Ok(Command::Back.into());
    }

    for item in view.items {
        ctx.output.list_item(&format!(
            "{} × {}  {}",
            product_row(&item.product),
            item.quantity,
            style(item.line_total().display()).bold()
        ));
    }
    println!();
    ctx.output.kv("Subtotal", &view.totals.subtotal.display());
    ctx.output.kv(&format!("Tax ({}%)", TAX_RATE_PERCENT), &view.totals.tax.display());
    ctx.output.kv("Total", &view.totals.total.display());

    let choice = choose(
        "What next?",
        &[
            ("Checkout", CartChoice::Checkout),
            ("Change quantity", CartChoice::Quantity),
            ("Remove an item", CartChoice::Remove),
            ("Continue shopping", CartChoice::Back),
        ],
    )?;

    let products: Vec<&Product> = view.items.iter().map(|i| &i.product).collect();
    let action = match choice {
        CartChoice::Checkout => Command::Checkout.into(),
        CartChoice::Quantity => match pick_product("Which item?", &products)? {
            Some(product_id) => {
                let quantity: i64 = Input::new()
                    .with_prompt("New quantity (0 removes)")
                    .interact_text()?;
                Command::SetQuantity {
                    product_id,
                    quantity,
                }
                .into()
            }
            None => Command::Navigate(ScreenKind::Cart).into(),
        },
        CartChoice::Remove => match pick_product("Remove which item?", &products)? {
            Some(id) => Command::RemoveFromCart(id).into(),
            None => Command::Navigate(ScreenKind::Cart).into(),
        },
        CartChoice::Back => Command::Back.into(),
    };
    Ok(action)
}

// === Purchases ===

fn purchases(view: &PurchasesView<'_>, ctx: &Context) -> Result<UiAction> {
    ctx.output.header("Previous Purchases");
    ctx.output.kv("Total orders", &view.summary.order_count.to_string());
    ctx.output.kv("Items purchased", &view.summary.item_count.to_string());
    ctx.output.kv("Total spent", &view.summary.total_spent.display());

    if view.purchases.is_empty() {
        ctx.output.info("No purchases yet");
    }
    for purchase in view.purchases {
        println!(
            "\n  {} {}  {}  {}",
            style("Order").bold(),
            style(&purchase.id).bold(),
            date::display_long(purchase.purchase_date),
            status_badge(purchase.status.as_str())
        );
        for item in &purchase.items {
            ctx.output.list_item(&format!(
                "{} × {}  {}",
                item.product.title,
                item.quantity,
                item.line_total().display()
            ));
        }
        ctx.output.kv("Total", &purchase.total_amount.display());
    }

    choose("What next?", &[("Back", ())])?;
    Ok(Command::Back.into())
}
