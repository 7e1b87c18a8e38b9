mod cli;
mod config;
mod consts;
mod error;
mod output;
mod pipeline;
mod sheet;
mod table;
mod utils;

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use config::Config;
use error::AppError;
use output::{RunSummary, print_summary, summary_json};
use sheet::{cleaned_filename, new_records_filename, read_latest, read_previous, table_to_xlsx};
use utils::{Timezone, parse_date};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = if cli.quiet || cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_input(path: &Path, read: fn(&Path) -> Result<table::Table, error::ParseError>) -> Result<table::Table, AppError> {
    read(path).map_err(|source| AppError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let stamp = match cli.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => timezone.today(),
    };

    let started = Instant::now();

    if !cli.quiet && !cli.json {
        eprintln!("Reading {}...", cli.latest.display());
    }
    let latest = parse_input(&cli.latest, read_latest)?;
    if !cli.quiet && !cli.json {
        eprintln!("Reading {}...", cli.previous.display());
    }
    let previous = parse_input(&cli.previous, read_previous)?;

    let outcome = pipeline::process(&latest, &previous, stamp)?;

    // Encode both workbooks before touching the filesystem so a failed
    // run leaves no partial outputs behind.
    let cleaned_bytes = table_to_xlsx(&outcome.cleaned)?;
    let new_bytes = table_to_xlsx(&outcome.new_records)?;

    let out_dir = cli.output_dir();
    fs::create_dir_all(&out_dir).map_err(|source| AppError::Output {
        path: out_dir.display().to_string(),
        source,
    })?;
    let cleaned_path = out_dir.join(cleaned_filename(outcome.stamp));
    let new_path = out_dir.join(new_records_filename(outcome.stamp));
    fs::write(&cleaned_path, &cleaned_bytes).map_err(|source| AppError::Output {
        path: cleaned_path.display().to_string(),
        source,
    })?;
    fs::write(&new_path, &new_bytes).map_err(|source| AppError::Output {
        path: new_path.display().to_string(),
        source,
    })?;

    let summary = RunSummary {
        date: outcome.stamp.format("%Y-%m-%d").to_string(),
        latest_rows: outcome.counts.total,
        dropped: outcome.counts.dropped,
        deduped: outcome.counts.deduped,
        cleaned_rows: outcome.cleaned.row_count(),
        previous_keys: outcome.previous_keys,
        new_rows: outcome.new_records.row_count(),
        cleaned_file: cleaned_path.display().to_string(),
        new_file: new_path.display().to_string(),
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    };

    if cli.json {
        println!("{}", summary_json(&summary));
    } else {
        if !cli.quiet {
            print_summary(&summary, cli.use_color());
        }
        println!(
            "Processing complete. 2 files written to {}",
            out_dir.display()
        );
    }

    Ok(())
}
