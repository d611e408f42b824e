//! Wardrobe CLI - inspect and exercise the storefront from the terminal.
//!
//! Commands:
//! - `wardrobe browse` - Filter the catalog the way the storefront does
//! - `wardrobe inventory` - Stock levels, low-stock alerts and markdowns
//! - `wardrobe codes` - List discount codes and check them against a subtotal
//! - `wardrobe demo` - Run a scripted shopping session
//! - `wardrobe config` - Manage the store configuration file

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CodesArgs, ConfigArgs, DemoArgs, InventoryArgs};

/// Wardrobe CLI - browse, audit and demo the jewellery storefront
#[derive(Parser)]
#[command(name = "wardrobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter the catalog
    Browse(BrowseArgs),

    /// Show the inventory report
    Inventory(InventoryArgs),

    /// List and check discount codes
    Codes(CodesArgs),

    /// Run a scripted shopping session
    Demo(DemoArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "wardrobe_store=debug,wardrobe_cli=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Inventory(args) => commands::inventory::run(args, &ctx),
        Commands::Codes(args) => commands::codes::run(args, &ctx),
        Commands::Demo(args) => commands::demo::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
