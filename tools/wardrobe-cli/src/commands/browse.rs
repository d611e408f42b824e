//! Catalog browsing.

use anyhow::Result;
use serde::Serialize;
use wardrobe_commerce::catalog::{Category, CategoryFilter, StockStatus};
use wardrobe_commerce::search::{filter_catalog, CategoryCounts};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{stock_badge, truncate};

#[derive(Serialize)]
struct ProductRow {
    id: String,
    name: String,
    category: Category,
    price: String,
    original_price: Option<String>,
    stock: u32,
    status: StockStatus,
}

#[derive(Serialize)]
struct BrowseResult {
    query: String,
    category: String,
    hide_out_of_stock: bool,
    products: Vec<ProductRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<CategoryCounts>,
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let threshold = store.settings().low_stock_threshold;

    let mut query = store.catalog_query(&args.query, args.category);
    if args.hide_out_of_stock {
        query = query.hide_out_of_stock(true);
    }
    let visible = filter_catalog(store.products(), &query);

    let rows: Vec<ProductRow> = visible
        .iter()
        .map(|p| ProductRow {
            id: p.id.to_string(),
            name: p.name.clone(),
            category: p.category,
            price: p.price.display(),
            original_price: p.original_price.map(|m| m.display()),
            stock: p.stock,
            status: p.stock_status(threshold),
        })
        .collect();

    let result = BrowseResult {
        query: query.text.clone(),
        category: query.category.as_str().to_string(),
        hide_out_of_stock: query.hide_out_of_stock,
        products: rows,
        counts: args.counts.then(|| store.category_counts()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    let title = match args.category {
        CategoryFilter::All => "All Products".to_string(),
        CategoryFilter::Only(category) => category.display_name().to_string(),
    };
    ctx.output.header(&format!("{} ({})", title, result.products.len()));

    if result.products.is_empty() {
        ctx.output.info("No products match.");
    } else {
        let widths = [4, 28, 18, 12, 14];
        ctx.output
            .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);
        for row in &result.products {
            let price = match &row.original_price {
                Some(original) => format!("{} (was {})", row.price, original),
                None => row.price.clone(),
            };
            let name = truncate(&row.name, 28);
            let stock = format!("{} {}", row.stock, stock_badge(row.status));
            ctx.output.table_row(
                &[
                    row.id.as_str(),
                    name.as_str(),
                    row.category.display_name(),
                    price.as_str(),
                    stock.as_str(),
                ],
                &widths,
            );
        }
    }

    if let Some(counts) = &result.counts {
        ctx.output.header("Categories");
        ctx.output.kv("All", &counts.all.to_string());
        for (category, count) in &counts.by_category {
            ctx.output.kv(category.display_name(), &count.to_string());
        }
    }

    Ok(())
}
