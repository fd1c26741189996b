//! CLI command implementations.

pub mod address;
pub mod config;
pub mod locate;
pub mod order;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category selector: "all", a category name, or a comma-separated list.
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Only the featured products shown on the home page.
    #[arg(short, long)]
    pub featured: bool,
}

/// Arguments for the order command.
///
/// Operations run in command-line order within each kind: adds, then
/// quantity updates, then removals, then clear.
#[derive(Args)]
pub struct OrderArgs {
    /// Add one of this product (repeatable).
    #[arg(short, long = "add", value_name = "ID")]
    pub add: Vec<u64>,

    /// Set a quantity, e.g. `--set 3=2`; zero or less removes the line.
    #[arg(short, long = "set", value_name = "ID=QTY", value_parser = parse_quantity)]
    pub set: Vec<(u64, i64)>,

    /// Remove a product line (repeatable).
    #[arg(short, long = "remove", value_name = "ID")]
    pub remove: Vec<u64>,

    /// Empty the cart after the other operations.
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the locate command.
#[derive(Args)]
pub struct LocateArgs {
    /// Latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,
}

/// Arguments for the address command.
#[derive(Args)]
pub struct AddressArgs {
    /// Pick this latitude on the map after mounting.
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Pick this longitude on the map after mounting.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Delivery address, overriding the looked-up one.
    #[arg(long)]
    pub address: Option<String>,

    /// Contact phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Notes for the driver.
    #[arg(long)]
    pub notes: Option<String>,

    /// Confirm without prompting.
    #[arg(short, long)]
    pub yes: bool,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

fn parse_quantity(s: &str) -> Result<(u64, i64), String> {
    let (id, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{}'", s))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid product id '{}'", id.trim()))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", quantity.trim()))?;
    Ok((id, quantity))
}
