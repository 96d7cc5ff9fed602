//! EcoFinds application layer.
//!
//! Owns the marketplace stores and the screen router behind a single
//! [`AppState`]. A front end renders [`AppState::view`] and sends
//! [`Command`]s back; notices queued by each command are drained and shown
//! as toasts.
//!
//! # Example
//!
//! ```
//! use ecofinds_app::{AppState, Command, ScreenKind};
//! use ecofinds_market::ids::ProductId;
//!
//! let mut app = AppState::default();
//! app.dispatch(Command::Login {
//!     email: "jane@example.com".into(),
//!     password: "anything".into(),
//! });
//! app.dispatch(Command::AddToCart(ProductId::new("1")));
//! app.dispatch(Command::Checkout);
//!
//! assert_eq!(app.router().kind(), ScreenKind::Purchases);
//! assert_eq!(app.ledger().len(), 1);
//! ```

mod app;
mod command;
pub mod config;
mod error;
pub mod logging;
mod notice;
mod screen;
pub mod view;

pub use app::{AppState, FeedFilter};
pub use command::Command;
pub use config::AppConfig;
pub use error::AppError;
pub use notice::{Notice, NoticeLevel, Notices};
pub use screen::{Router, Screen, ScreenKind};
pub use view::View;
