//! Scripted shopping session.
//!
//! Signs in, fills the cart, quotes checkout, optionally previews a
//! discount code, places the order, and shows what happened to stock.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use wardrobe_commerce::cart::{CheckoutQuote, DiscountPreview};
use wardrobe_commerce::catalog::CategoryFilter;
use wardrobe_commerce::checkout::Order;
use wardrobe_commerce::ids::ProductId;
use wardrobe_store::Storefront;

use super::DemoArgs;
use crate::context::Context;

const STEPS: usize = 5;

#[derive(Serialize)]
struct DemoSummary {
    shopper: String,
    quote: CheckoutQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount_preview: Option<DiscountPreview>,
    order: Order,
    stock_after: Vec<(String, u32)>,
}

/// Run the demo command.
pub fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    if args.quantity == 0 {
        bail!("Quantity must be at least 1");
    }
    let mut store = ctx.storefront()?;

    ctx.output.header("Wardrobe demo session");

    ctx.output.step(1, STEPS, &format!("Signing in as {}", args.email));
    let shopper = store
        .sign_in(&args.email, "demo")
        .context("Sign-in failed")?
        .name
        .clone();
    ctx.output.success(&format!("Welcome, {}", shopper));

    ctx.output.step(2, STEPS, "Filling the cart");
    let ids = pick_products(&store, &args.product);
    if ids.is_empty() {
        bail!("No products in stock to add");
    }
    for id in &ids {
        let line = store
            .add_to_cart(id, args.quantity)
            .with_context(|| format!("Could not add product {}", id))?;
        ctx.output.debug(&format!("{} x{} in cart", id, line));
    }
    for item in store.cart().items() {
        ctx.output
            .list_item(&format!("{} x{} @ {}", item.name, item.quantity, item.price));
    }

    ctx.output.step(3, STEPS, "Quoting checkout");
    let quote = store.checkout_quote()?;
    ctx.output.kv("Subtotal", &quote.subtotal.display());
    ctx.output
        .kv(&format!("Tax ({}%)", quote.tax_rate), &quote.tax_total.display());
    ctx.output.kv("Total", &quote.grand_total.display());

    ctx.output.step(4, STEPS, "Checking discount code");
    let discount_preview = match &args.code {
        Some(code) => match store.preview_discount_code(code) {
            Ok(preview) => {
                ctx.output.success(&format!(
                    "{} would save {} ({:.1}%)",
                    preview.code,
                    preview.discount_amount,
                    preview.discount_percentage()
                ));
                Some(preview)
            }
            Err(e) => {
                ctx.output.warn(&format!("Code not applied: {}", e));
                None
            }
        },
        None => {
            ctx.output.info("No code given, skipping.");
            None
        }
    };

    ctx.output.step(5, STEPS, "Placing the order");
    store.begin_checkout().context("Could not open checkout")?;
    let order = store.place_order().context("Order failed")?.clone();
    ctx.output.success(&format!(
        "Order {} placed: {} item(s), {} [{}]",
        order.id,
        order.item_count(),
        order.total,
        order.status.display_name()
    ));

    let stock_after: Vec<(String, u32)> = ids
        .iter()
        .filter_map(|id| store.product(id))
        .map(|p| (p.name.clone(), p.stock))
        .collect();
    for (name, stock) in &stock_after {
        ctx.output.kv(name, &format!("{} left", stock));
    }

    if ctx.output.is_json() {
        ctx.output.json(&DemoSummary {
            shopper,
            quote,
            discount_preview,
            order,
            stock_after,
        });
    }

    Ok(())
}

/// The requested products, or the first two visible ones with stock.
fn pick_products(store: &Storefront, requested: &[String]) -> Vec<ProductId> {
    if !requested.is_empty() {
        return requested.iter().map(|id| ProductId::new(id.as_str())).collect();
    }
    store
        .browse("", CategoryFilter::All)
        .into_iter()
        .filter(|p| p.stock > 0)
        .take(2)
        .map(|p| p.id.clone())
        .collect()
}
