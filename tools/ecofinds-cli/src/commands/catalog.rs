//! Print the listings.

use anyhow::{Context as _, Result};
use ecofinds_market::catalog::CategoryFilter;
use ecofinds_market::date;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let filter: CategoryFilter = args
        .category
        .parse()
        .with_context(|| format!("Invalid --category '{}'", args.category))?;

    let state = ctx.app_state();
    let products = state.catalog().filter(&args.search, filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Listings ({}, {} found)",
        filter.label(),
        products.len()
    ));

    if products.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }

    let widths = [4, 28, 12, 14, 16, 18];
    ctx.output
        .table_row(&["ID", "TITLE", "PRICE", "CATEGORY", "SELLER", "LISTED"], &widths);
    for product in products {
        let price = product.price.display();
        let listed = date::display_long(product.created_at);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.title,
                &price,
                product.category.display_name(),
                &product.seller_name,
                &listed,
            ],
            &widths,
        );
    }

    Ok(())
}
