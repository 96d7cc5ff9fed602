//! CLI command implementations.

pub mod catalog;
pub mod run;

use clap::Args;

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Log in with this email right away.
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only listings whose title or description contains this text.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only listings in this category (e.g. "Books", "Home & Garden").
    #[arg(short = 'C', long, default_value = "All")]
    pub category: String,
}
