//! Bench command.
//!
//! Runs the full merge repeatedly and reports wall-clock timings.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use chromatch_color::{merge, Pipeline, TransferOptions};
use clap::Args;
use tracing::{debug, info};

use super::load_image;

/// Arguments for the `bench` command.
#[derive(Args)]
pub struct BenchArgs {
    /// Image whose colors are transferred
    pub source: PathBuf,

    /// Image to recolor
    pub target: PathBuf,

    /// Number of timed runs
    #[arg(short = 'n', long, default_value_t = 100)]
    pub runs: usize,

    /// Time a single pipeline (lab or hsl) instead of both
    #[arg(long)]
    pub only: Option<Pipeline>,

    /// Contrast ratio override
    #[arg(short, long)]
    pub contrast: Option<f64>,
}

/// Timing summary over all runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// Mean duration per run.
    pub mean: Duration,
    /// Fastest run.
    pub min: Duration,
    /// Slowest run.
    pub max: Duration,
}

impl Timings {
    /// Summarizes per-run durations; `None` if there are none.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let total: Duration = samples.iter().sum();
        Some(Self {
            mean: total / samples.len() as u32,
            min,
            max,
        })
    }
}

/// Run the bench command.
pub fn run(args: BenchArgs) -> Result<()> {
    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }

    let source = load_image(&args.source)?;
    let target = load_image(&args.target)?;
    let options = match args.only {
        Some(p) => TransferOptions::only(p),
        None => TransferOptions::default(),
    }
    .with_contrast(args.contrast);

    info!(runs = args.runs, ?options, "Benchmarking merge");

    let mut samples = Vec::with_capacity(args.runs);
    for i in 0..args.runs {
        let start = Instant::now();
        let output = merge(&source, &target, &options);
        let elapsed = start.elapsed();
        if i == 0 && output.has_failures() {
            for pipeline in Pipeline::ALL {
                if let Some(Err(e)) = output.get(pipeline) {
                    bail!("{pipeline} pipeline failed: {e}");
                }
            }
        }
        debug!(run = i, ms = elapsed.as_secs_f64() * 1000.0, "bench::run");
        samples.push(elapsed);
    }

    let Some(t) = Timings::from_samples(&samples) else {
        bail!("No samples recorded");
    };
    println!(
        "{} runs, {}x{} -> {}x{}",
        args.runs,
        source.width(),
        source.height(),
        target.width(),
        target.height()
    );
    println!(
        "mean {:.3} ms  min {:.3} ms  max {:.3} ms",
        t.mean.as_secs_f64() * 1000.0,
        t.min.as_secs_f64() * 1000.0,
        t.max.as_secs_f64() * 1000.0
    );
    Ok(())
}
