//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StoreConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, json_file } => init_config(force, json_file, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("[store]");
    ctx.output.kv("store_name", &store.store_name);
    ctx.output.kv("currency", store.currency.code());
    ctx.output.kv("tax_rate", &format!("{}%", store.tax_rate));
    ctx.output
        .kv("low_stock_threshold", &store.low_stock_threshold.to_string());
    ctx.output.kv(
        "enable_low_stock_alerts",
        &store.enable_low_stock_alerts.to_string(),
    );
    ctx.output.kv(
        "enable_out_of_stock_hiding",
        &store.enable_out_of_stock_hiding.to_string(),
    );
    ctx.output
        .kv("maintenance_mode", &store.maintenance_mode.to_string());

    ctx.output.info("[admin]");
    ctx.output.kv("username", &ctx.config.admin.username);
    ctx.output.kv("password", "********");

    match &ctx.config.products {
        Some(products) => ctx.output.kv("products", &products.len().to_string()),
        None => ctx.output.kv("products", "sample catalog"),
    }
    if ctx.config.discount_codes.is_empty() {
        ctx.output.kv("discount_codes", "seeded codes");
    } else {
        for draft in &ctx.config.discount_codes {
            ctx.output.list_item(&draft.code);
        }
    }

    Ok(())
}

fn init_config(force: bool, json_file: bool, ctx: &Context) -> Result<()> {
    let name = if json_file { "wardrobe.json" } else { "wardrobe.toml" };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if json_file {
        StoreConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        let store_name = StoreConfig::default().store.store_name;
        std::fs::write(&config_path, generate_default_config(&store_name))?;
    }

    ctx.output
        .success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let problems = ctx.config.problems();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no config file found, defaults in use".to_string());
    }
    if ctx.config.admin.password == wardrobe_auth::DEFAULT_ADMIN_PASSWORD {
        warnings.push("admin.password is still the default".to_string());
    }
    if ctx.config.store.maintenance_mode {
        warnings.push("store.maintenance_mode is on".to_string());
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": problems.is_empty(),
            "errors": problems,
            "warnings": warnings,
        }));
    } else {
        for warning in &warnings {
            ctx.output.warn(warning);
        }
        for problem in &problems {
            ctx.output.error(problem);
        }
    }

    if !problems.is_empty() {
        bail!("Configuration has {} error(s)", problems.len());
    }
    ctx.output.success("Configuration is valid");
    Ok(())
}
