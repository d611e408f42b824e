//! Inventory report.

use anyhow::{Context as _, Result};
use serde::Serialize;
use wardrobe_commerce::catalog::{DiscountStats, InventoryReport};

use super::InventoryArgs;
use crate::context::Context;
use crate::output::{stock_badge, truncate};

#[derive(Serialize)]
struct InventoryOutput {
    threshold: u32,
    report: InventoryReport,
    discounts: DiscountStats,
}

/// Run the inventory command.
pub fn run(args: InventoryArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let threshold = args
        .threshold
        .unwrap_or(store.settings().low_stock_threshold);

    let report = InventoryReport::from_products(
        store.products(),
        threshold,
        store.settings().enable_low_stock_alerts,
    )
    .context("Failed to build inventory report")?;
    let discounts = store.discount_stats();

    if ctx.output.is_json() {
        ctx.output.json(&InventoryOutput {
            threshold,
            report,
            discounts,
        });
        return Ok(());
    }

    ctx.output.header("Inventory");
    ctx.output.kv("Products", &report.total_products.to_string());
    ctx.output.kv("Stock value", &report.total_value.display());
    ctx.output.kv("Low stock", &report.low_stock_count.to_string());
    ctx.output.kv("Out of stock", &report.out_of_stock_count.to_string());
    ctx.output.kv("Threshold", &threshold.to_string());

    ctx.output.header("Stock levels");
    let widths = [4, 28, 6, 14];
    ctx.output.table_row(&["ID", "NAME", "STOCK", "STATUS"], &widths);
    for product in store.products() {
        let name = truncate(&product.name, 28);
        let stock = product.stock.to_string();
        let badge = stock_badge(product.stock_status(threshold));
        ctx.output.table_row(
            &[product.id.as_str(), name.as_str(), stock.as_str(), badge.as_str()],
            &widths,
        );
    }

    if !report.alerts.is_empty() {
        ctx.output.header("Low stock alerts");
        for alert in &report.alerts {
            ctx.output
                .warn(&format!("{} has only {} left", alert.name, alert.stock));
        }
    }

    ctx.output.header("Markdowns");
    ctx.output.kv(
        "Discounted products",
        &discounts.discounted_products.to_string(),
    );
    ctx.output.kv("Total markdown", &discounts.total_markdown.display());
    ctx.output.kv(
        "Average discount",
        &format!("{:.1}%", discounts.average_percentage),
    );

    if report.needs_attention() {
        ctx.output.warn("Some products need restocking.");
    } else {
        ctx.output.success("Stock levels look healthy.");
    }

    Ok(())
}
