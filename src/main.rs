//! A CLI that renders a spending dashboard from a file of expense records.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use time::{Date, OffsetDateTime};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spendsight::{
    Error, TimeRange, analyze, import::load_expenses, parse_iso_date, report::render_summary,
};

/// Render a spending summary from a JSON or CSV file of expenses.
#[derive(Debug, Parser)]
#[command(name = "dashboard")]
struct Args {
    /// Path to the expense records (.json or .csv).
    expense_file: PathBuf,

    /// The time range to summarize: 7d, 30d, 90d, or 1y.
    #[arg(long, default_value = "30d", value_parser = parse_range)]
    range: TimeRange,

    /// The reference date to resolve windows against (YYYY-MM-DD).
    /// Defaults to today in UTC. Fixing this makes runs reproducible.
    #[arg(long, value_parser = parse_date)]
    date: Option<Date>,

    /// Print the summary as JSON instead of a text dashboard.
    #[arg(long)]
    json: bool,
}

fn parse_range(text: &str) -> Result<TimeRange, Error> {
    text.parse()
}

fn parse_date(text: &str) -> Result<Date, Error> {
    parse_iso_date(text)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Error> {
    let expenses = load_expenses(&args.expense_file)?;
    let now = args
        .date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let summary = analyze(&expenses, args.range, now);

    if args.json {
        serde_json::to_string_pretty(&summary)
            .map_err(|error| Error::JsonSerialization(error.to_string()))
    } else {
        Ok(render_summary(&summary))
    }
}
