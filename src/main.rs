//! Command-line entry point.
//!
//! Loads the two CSV tables, validates them, runs the assignment
//! engine, and writes the timestamped text report and contact sheet.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use matchmaker::loader::{self, EventDays};
use matchmaker::matching::Matchmaker;
use matchmaker::models::TimeslotGroups;
use matchmaker::{report, validation};

#[derive(Debug, Parser)]
#[command(
    name = "matchmaker",
    version,
    about = "Match delegates and staff to parliamentarian meetings"
)]
struct Args {
    /// Path to the attendee (delegate) CSV table.
    #[arg(long)]
    delegates: PathBuf,

    /// Path to the parliamentarian CSV table.
    #[arg(long)]
    parliamentarians: PathBuf,

    /// Event year the day labels resolve against.
    #[arg(long, default_value_t = 2025)]
    year: i32,

    /// Event day labels, matching the availability column headers.
    #[arg(long, value_delimiter = ',', default_values_t = [
        "Nov 24".to_string(),
        "Nov 25".to_string(),
        "Nov 26".to_string(),
        "Nov 27".to_string(),
    ])]
    dates: Vec<String>,

    /// RNG seed; omit to draw one (it is printed for reproduction).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the output report files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let days = EventDays::new(args.year, &args.dates)?;
    let mut candidates = loader::load_candidates(&args.delegates, &days)
        .with_context(|| format!("loading delegates from {}", args.delegates.display()))?;
    let mut owners = loader::load_owners(&args.parliamentarians).with_context(|| {
        format!(
            "loading parliamentarians from {}",
            args.parliamentarians.display()
        )
    })?;
    tracing::info!(
        candidates = candidates.len(),
        owners = owners.len(),
        "input tables loaded"
    );

    if let Err(errors) = validation::validate_input(&candidates, &owners, &days.dates()) {
        for error in &errors {
            tracing::error!("{}", error.message);
        }
        anyhow::bail!("input validation failed with {} error(s)", errors.len());
    }

    let mut engine = Matchmaker::new();
    if let Some(seed) = args.seed {
        engine = engine.with_seed(seed);
    }
    let quotas = engine.config().quotas;
    let outcome = engine.run(&mut owners, &mut candidates);
    tracing::info!(seed = outcome.seed, placements = outcome.placements, "run complete");

    let groups = TimeslotGroups::from_owners(&owners);
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let text_path = args.out_dir.join(format!("output_{stamp}.txt"));
    let csv_path = args.out_dir.join(format!("output_{stamp}.csv"));

    let text = report::text_report(&owners, &candidates, &groups, outcome.seed);
    fs::write(&text_path, text).with_context(|| format!("writing {}", text_path.display()))?;

    let rows = report::contact_sheet(&owners, &candidates, &groups, &quotas);
    let file = fs::File::create(&csv_path)
        .with_context(|| format!("creating {}", csv_path.display()))?;
    report::write_contact_csv(file, &rows)
        .with_context(|| format!("writing {}", csv_path.display()))?;

    tracing::info!(
        text = %text_path.display(),
        csv = %csv_path.display(),
        "reports written"
    );
    Ok(())
}
