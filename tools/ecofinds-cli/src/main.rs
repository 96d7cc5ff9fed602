//! EcoFinds CLI - a terminal front end for the second-hand marketplace.
//!
//! Commands:
//! - `ecofinds run` - Browse, sell and buy interactively (default)
//! - `ecofinds catalog` - Print the listings

mod commands;
mod context;
mod output;
mod screens;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, RunArgs};

/// EcoFinds - buy and sell second-hand goods from the terminal
#[derive(Parser)]
#[command(name = "ecofinds")]
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

    /// Start with an empty catalog instead of the sample listings
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive marketplace
    Run(RunArgs),

    /// Print the listings
    Catalog(CatalogArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let flags = context::Flags {
        verbose: cli.verbose,
        no_seed: cli.no_seed,
    };
    let ctx = match context::Context::load(cli.config.as_deref(), flags, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = ecofinds_app::logging::init_tracing(&ctx.config.logging) {
        ctx.output.warn(&e.to_string());
    }

    // Execute command
    let result = match cli.command.unwrap_or_default() {
        Commands::Run(args) => commands::run::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run(RunArgs::default())
    }
}
