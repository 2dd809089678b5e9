//! chromatch - statistical color transfer between images
//!
//! Recolors a target image so its color distribution matches a source
//! image, in the Lab and/or HSL color space.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use commands::{bench::BenchArgs, stats::StatsArgs, transfer::TransferArgs};

#[derive(Parser)]
#[command(name = "chromatch")]
#[command(author, version, about = "Statistical color transfer between images")]
#[command(long_about = "
Transfers the color statistics of a source image onto a target image.

Examples:
  chromatch transfer sunset.png beach.png --lab out_lab.png
  chromatch transfer sunset.png beach.png --lab a.png --hsl b.png -c 1.2
  chromatch transfer sunset.png beach.png --preset look.yaml
  chromatch stats beach.png --space hsl
  chromatch bench sunset.png beach.png -n 20
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor TARGET with the statistics of SOURCE
    #[command(visible_alias = "t")]
    Transfer(TransferArgs),

    /// Print per-channel mean and standard deviation
    #[command(visible_alias = "s")]
    Stats(StatsArgs),

    /// Time repeated merges of two images
    Bench(BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Transfer(args) => commands::transfer::run(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Bench(args) => commands::bench::run(args),
    }
}
