use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stms_data::UavScheduleLoader;

/// Validate a notified rate schedule file.
///
/// The TOML file should carry the notification tables:
/// - [base-rates]: residential and commercial rates in ₹ per sq ft per year
/// - [type-factors]: one usage multiplier per property type
/// - [location-factors]: the default multiplier plus a cities table
/// - [[depreciation-bands]]: min-age and percent, ascending by age
#[derive(Parser, Debug)]
#[command(name = "stms-schedule-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the TOML file containing the rate schedule
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Checking rate schedule: {}", args.file.display());

    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read: {}", args.file.display()))?;

    let schedule = UavScheduleLoader::parse(&input)
        .with_context(|| format!("Failed to load schedule: {}", args.file.display()))?;

    println!(
        "Schedule OK: base rates {}/{} per sq ft, {} listed cities, {} depreciation bands.",
        schedule.residential_base_rate,
        schedule.commercial_base_rate,
        schedule.location_factors.len(),
        schedule.depreciation_bands.len()
    );

    Ok(())
}
