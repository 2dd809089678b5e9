//! Transfer command.
//!
//! Recolors the target with the source statistics through the selected
//! pipelines and writes one file per pipeline.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chromatch_color::{merge, Pipeline};
use clap::Args;
use tracing::{error, info};

use super::{load_image, save_image};
use crate::config::{load_preset, TransferPlan};

/// Arguments for the `transfer` command.
#[derive(Args)]
pub struct TransferArgs {
    /// Image whose colors are transferred
    pub source: PathBuf,

    /// Image to recolor
    pub target: PathBuf,

    /// Output of the Lab pipeline
    #[arg(long)]
    pub lab: Option<PathBuf>,

    /// Output of the HSL pipeline
    #[arg(long)]
    pub hsl: Option<PathBuf>,

    /// Contrast ratio used instead of source_std / target_std
    #[arg(short, long)]
    pub contrast: Option<f64>,

    /// YAML preset (lab, hsl, contrast); flags take precedence
    #[arg(long)]
    pub preset: Option<PathBuf>,
}

/// Run the transfer command.
pub fn run(args: TransferArgs) -> Result<()> {
    let preset = args.preset.as_deref().map(load_preset).transpose()?;
    let plan = TransferPlan::resolve(&args.target, args.lab, args.hsl, args.contrast, preset)?;

    let source = load_image(&args.source)?;
    let target = load_image(&args.target)?;
    info!(
        source = %args.source.display(),
        target = %args.target.display(),
        lab = plan.options.lab,
        hsl = plan.options.hsl,
        contrast = ?plan.options.contrast,
        "Transferring colors"
    );

    let output = merge(&source, &target, &plan.options);

    let mut failed = Vec::new();
    for (pipeline, slot) in Pipeline::ALL.into_iter().zip(output.into_slots()) {
        let (Some(result), Some(path)) = (slot, plan.output(pipeline)) else {
            continue;
        };
        match result {
            Ok(buffer) => {
                save_image(path, &buffer)?;
                println!("{pipeline}: {}", path.display());
            }
            Err(e) => {
                error!(%pipeline, error = %e, "Pipeline failed");
                eprintln!("{pipeline}: {e}");
                failed.push(pipeline.to_string());
            }
        }
    }

    if !failed.is_empty() {
        bail!("Pipeline(s) failed: {}", failed.join(", "));
    }
    Ok(())
}
