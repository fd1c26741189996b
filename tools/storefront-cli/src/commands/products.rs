//! Catalog browsing commands.

use anyhow::{bail, Result};
use serde::Serialize;
use storefront_commerce::catalog::{
    distinct_categories, featured, CatalogState, CategoryFilter, Product, FEATURED_PRODUCT_COUNT,
};

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let products = load_catalog(ctx).await?;

    let listed: Vec<&Product> = if args.featured {
        featured(&products, FEATURED_PRODUCT_COUNT).iter().collect()
    } else {
        CategoryFilter::parse(&args.category).apply(&products)
    };

    if ctx.output.is_json() {
        ctx.output.json(&listed);
        return Ok(());
    }

    let title = if args.featured {
        "Featured Products".to_string()
    } else {
        match CategoryFilter::parse(&args.category) {
            CategoryFilter::All => "All Products".to_string(),
            _ => format!("Products in {}", args.category.trim()),
        }
    };
    ctx.output.header(&title);

    if listed.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE", "RATING"], &WIDTHS);
    for product in &listed {
        let id = product.id.to_string();
        let price = product.price.display();
        let rating = format!("{:.1} ({})", product.rating.rate, product.rating.count);
        ctx.output.table_row(&[&id, &product.title, &product.category, &price, &rating], &WIDTHS);
    }
    ctx.output.info(&format!("{} product(s)", listed.len()));

    Ok(())
}

const WIDTHS: [usize; 5] = [4, 40, 20, 10, 12];

#[derive(Serialize)]
struct CategoryCount<'a> {
    name: &'a str,
    products: usize,
}

/// Run the categories command.
pub async fn run_categories(ctx: &Context) -> Result<()> {
    let products = load_catalog(ctx).await?;

    let categories: Vec<CategoryCount<'_>> = distinct_categories(&products)
        .into_iter()
        .map(|name| CategoryCount {
            name,
            products: products.iter().filter(|p| p.category == name).count(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(&format!("{} ({})", category.name, category.products));
    }

    Ok(())
}

/// Fetch the catalog behind a spinner, failing with the display message.
pub async fn load_catalog(ctx: &Context) -> Result<Vec<Product>> {
    let catalog = ctx.catalog()?;
    ctx.output.debug(&format!("Catalog: {}", catalog.url()));

    let spinner = ctx.output.spinner("Loading products...");
    let state = catalog.load().await;
    spinner.finish_and_clear();

    match state {
        CatalogState::Loaded(products) => Ok(products),
        CatalogState::Failed(message) => bail!("{}", message),
        CatalogState::Loading => bail!("Catalog is still loading"),
    }
}
