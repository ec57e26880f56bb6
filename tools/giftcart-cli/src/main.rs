//! giftcart - terminal front-end for the gift-threshold cart engine.
//!
//! Commands:
//! - `giftcart catalog` - show the product catalog and gift promotion
//! - `giftcart simulate` - apply a sequence of cart operations and print the summary
//! - `giftcart shop` - interactive shopping session

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use commands::{CatalogArgs, ShopArgs, SimulateArgs};

/// giftcart - a shopping cart with a free-gift threshold
#[derive(Parser)]
#[command(name = "giftcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Store config file path (TOML); defaults to the built-in store
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product catalog and gift promotion
    Catalog(CatalogArgs),

    /// Apply a sequence of cart operations and print the resulting cart
    Simulate(SimulateArgs),

    /// Interactive shopping session
    Shop(ShopArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_target(false)
            .init();
    }

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load store config
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Simulate(args) => commands::simulate::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
