//! Command-line entry point: scan, list, pick, plot.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use results_browser::browse::browse_record;
use results_browser::collection::ResultCollection;
use results_browser::session::{pick_record, print_listing};
use results_browser::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse training-result snapshots sorted by MSE", long_about = None)]
struct Args {
    /// Directories containing result .json files
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    dirs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    if args.dirs.is_empty() {
        return Err(Error::Usage.into());
    }

    let collection = ResultCollection::from_dirs(&args.dirs)?;
    let listing = collection.sorted_records();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    print_listing(&mut out, &listing)?;

    let Some(record) = pick_record(&mut input, &mut out, &listing)? else {
        return Ok(());
    };

    let display_dir = std::env::temp_dir().join(format!("results-browser-{}", std::process::id()));
    fs::create_dir_all(&display_dir)?;

    let outcome = browse_record(record, &display_dir, &mut input, &mut out);
    let cleanup = fs::remove_dir_all(&display_dir);

    outcome?;
    cleanup?;
    Ok(())
}
