mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "emulsion", about = "Film stock emulation for still images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a film preset to an image
    Render(commands::render::RenderArgs),
    /// List the built-in presets
    Presets(commands::presets::PresetsArgs),
    /// Show one preset in detail, optionally exporting it to TOML
    Show(commands::show::ShowArgs),
    /// Estimate the performance cost of a preset
    Cost(commands::cost::CostArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Cost(args) => commands::cost::run(args),
    }
}
