//! # tweetdash - Main Entry Point
//!
//! Supports two operational modes:
//! - **Dashboard** (default): interactive TUI over the CSV file
//! - **Headless** (`--headless` / `--export FILE`): print or write the views and exit

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};

use tweetdash::cli::Args;
use tweetdash::dataset::DatasetLoader;
use tweetdash::domain::DatasetError;
use tweetdash::export::DashboardReport;
use tweetdash::tui::App;

// Exit codes (sysexits.h where one fits)
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATAERR: i32 = 65;
const EXIT_NOINPUT: i32 = 66;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DatasetError>() {
        Some(DatasetError::FileAccess { .. }) => EXIT_NOINPUT,
        Some(_) => EXIT_DATAERR,
        None => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = args.dashboard_config();

    // A failed load aborts the session: no partial dashboard
    let dataset = DatasetLoader::global().load(&config.data_path)?;

    if args.interactive() {
        info!("Starting dashboard for {}", config.data_path.display());
        return App::new(dataset, config).run();
    }

    let report = DashboardReport::build(&dataset, &config);

    if args.headless {
        report.write_text(io::stdout().lock()).context("Failed to write report")?;
    }

    if let Some(ref export_path) = args.export {
        let file = File::create(export_path)
            .with_context(|| format!("Failed to create {}", export_path.display()))?;
        report.write_json(BufWriter::new(file)).context("Failed to export report")?;

        if !args.quiet {
            eprintln!("saved: {}", export_path.display());
        }
    }

    Ok(())
}
