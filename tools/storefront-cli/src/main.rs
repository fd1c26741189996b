//! Storefront CLI - browse the catalog, build an order and capture a
//! delivery address from the terminal.
//!
//! Commands:
//! - `storefront products` - List products, optionally by category
//! - `storefront categories` - List product categories
//! - `storefront order` - Build a cart and print the order summary
//! - `storefront locate` - Look up the address of a point
//! - `storefront address` - Capture a delivery address
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddressArgs, ConfigArgs, LocateArgs, OrderArgs, ProductsArgs};

/// Storefront CLI - shop the catalog from the terminal
#[derive(Parser)]
#[command(name = "storefront")]
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
    /// List products
    Products(ProductsArgs),

    /// List product categories
    Categories,

    /// Build a cart and show the order summary
    Order(OrderArgs),

    /// Look up the address at a position
    Locate(LocateArgs),

    /// Capture a delivery address
    Address(AddressArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging.level, cli.verbose, cli.json)?;
    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Using config: {}", path.display()));
    }

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Categories => commands::products::run_categories(&ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Locate(args) => commands::locate::run(args, &ctx).await,
        Commands::Address(args) => commands::address::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
