//! Stats command.
//!
//! Prints per-channel mean and standard deviation of an image in one color
//! space, decoded the way the matching pipeline decodes it.

use std::path::PathBuf;

use anyhow::Result;
use chromatch_color::{convert_chain, ChannelStats};
use chromatch_core::{codec, ColorSpaceTag};
use clap::Args;

use super::load_image;

/// Arguments for the `stats` command.
#[derive(Args)]
pub struct StatsArgs {
    /// Input image
    pub image: PathBuf,

    /// Color space: rgb, lms, lab or hsl
    #[arg(long, default_value = "lab")]
    pub space: ColorSpaceTag,
}

/// Run the stats command.
pub fn run(args: StatsArgs) -> Result<()> {
    let buffer = load_image(&args.image)?;
    let stats = compute(&buffer, args.space)?;

    println!(
        "{} ({}x{}) in {}",
        args.image.display(),
        buffer.width(),
        buffer.height(),
        args.space
    );
    print!("{}", format_table(&stats));
    Ok(())
}

/// Decodes and converts `buffer` into `space`, then takes its statistics.
pub fn compute(buffer: &chromatch_core::BgrBuffer, space: ColorSpaceTag) -> Result<ChannelStats> {
    // log-domain spaces use the compressed decode of the Lab pipeline
    let compress = matches!(space, ColorSpaceTag::Lms | ColorSpaceTag::Lab);
    let via: &[ColorSpaceTag] = match space {
        ColorSpaceTag::Lab => &[ColorSpaceTag::Lms],
        _ => &[],
    };
    let rgb = codec::decode(buffer, compress);
    let image = convert_chain(&rgb, via, space)?;
    Ok(ChannelStats::compute(&image)?)
}

/// Renders one line per channel.
pub fn format_table(stats: &ChannelStats) -> String {
    let mut out = format!("  {:<8} {:>12} {:>12}\n", "channel", "mean", "std");
    for (c, name) in stats.space.channel_names().iter().enumerate() {
        out.push_str(&format!(
            "  {:<8} {:>12.6} {:>12.6}\n",
            name, stats.mean[c], stats.std_dev[c]
        ));
    }
    out
}
