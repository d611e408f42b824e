//! CLI command implementations.

pub mod browse;
pub mod codes;
pub mod config;
pub mod demo;
pub mod inventory;

use clap::{Args, Subcommand};
use wardrobe_commerce::catalog::CategoryFilter;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Search text matched against name, description, category, tags and colors.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category slug (e.g. `hair-clips`) or `all`.
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    /// Hide products with no stock, overriding the configured setting.
    #[arg(long)]
    pub hide_out_of_stock: bool,

    /// Also print per-category counts.
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the inventory command.
#[derive(Args)]
pub struct InventoryArgs {
    /// Low-stock threshold, overriding the configured one.
    #[arg(short, long)]
    pub threshold: Option<u32>,
}

/// Arguments for the codes command.
#[derive(Args)]
pub struct CodesArgs {
    /// Check every code against this cart subtotal (major units).
    #[arg(short, long)]
    pub subtotal: Option<f64>,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Shopper email used to sign in.
    #[arg(long, default_value = "sister@example.com")]
    pub email: String,

    /// Discount code to preview at checkout.
    #[arg(long)]
    pub code: Option<String>,

    /// Units of each product to add.
    #[arg(short, long, default_value = "1")]
    pub quantity: u32,

    /// Products to add, by id. Defaults to the first two visible products.
    #[arg(short, long)]
    pub product: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Write wardrobe.json instead of wardrobe.toml.
        #[arg(long)]
        json_file: bool,
    },
    /// Validate the config file.
    Validate,
}
