//! Discount code listing and checks.

use anyhow::{bail, Result};
use chrono::Utc;
use serde::Serialize;
use wardrobe_commerce::cart::DiscountCode;
use wardrobe_commerce::money::Money;

use super::CodesArgs;
use crate::context::Context;
use crate::output::active_badge;

#[derive(Serialize)]
struct CodeCheck {
    code: String,
    value: String,
    active: bool,
    remaining_uses: u32,
    ends_at: String,
    /// Discount on the given subtotal, when the code applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    discount: Option<String>,
    /// Why the code does not apply to the given subtotal.
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<String>,
}

/// Run the codes command.
pub fn run(args: CodesArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let currency = store.settings().currency;

    let subtotal = match args.subtotal {
        Some(amount) if !amount.is_finite() || amount < 0.0 => {
            bail!("Subtotal must be a non-negative amount, got {}", amount)
        }
        Some(amount) => Some(Money::from_decimal(amount, currency)),
        None => None,
    };

    let now = Utc::now();
    let checks: Vec<CodeCheck> = store
        .discount_codes()
        .iter()
        .map(|code| check_code(code, subtotal, now))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&checks);
        return Ok(());
    }

    ctx.output.header(&format!("Discount codes ({})", checks.len()));
    if let Some(subtotal) = subtotal {
        ctx.output.kv("Subtotal", &subtotal.display());
    }

    if checks.is_empty() {
        ctx.output.info("No discount codes configured.");
        return Ok(());
    }

    for check in &checks {
        ctx.output.list_item(&format!(
            "{}  {} off  {}  {} uses left  until {}",
            check.code,
            check.value,
            active_badge(check.active),
            check.remaining_uses,
            check.ends_at
        ));
        if let Some(discount) = &check.discount {
            ctx.output.success(&format!("{} saves {}", check.code, discount));
        }
        if let Some(reason) = &check.rejected {
            ctx.output.warn(reason);
        }
    }

    Ok(())
}

fn check_code(
    code: &DiscountCode,
    subtotal: Option<Money>,
    now: chrono::DateTime<Utc>,
) -> CodeCheck {
    let (discount, rejected) = match subtotal {
        Some(total) => match code.check(now, total) {
            Ok(()) => (Some(code.amount_for(total).display()), None),
            Err(e) => (None, Some(e.to_string())),
        },
        None => (None, None),
    };

    CodeCheck {
        code: code.code.clone(),
        value: code.value.label(),
        active: code.is_active,
        remaining_uses: code.remaining_uses(),
        ends_at: code.ends_at.format("%Y-%m-%d").to_string(),
        discount,
        rejected,
    }
}
