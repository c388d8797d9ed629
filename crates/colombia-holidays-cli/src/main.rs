//! `festivos` CLI — check and list Colombian public holidays from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is today a holiday?
//! festivos check
//!
//! # Is a given date a holiday?
//! festivos check 2025-12-25
//!
//! # List the holidays of a year
//! festivos list --year 2025
//!
//! # Same, as JSON
//! festivos list --year 2025 --format json
//!
//! # Easter Sunday of a year
//! festivos easter --year 2026
//!
//! # Pin "today" instead of reading the system clock
//! festivos --today 2025-11-03 check
//!
//! # Walk through the library's main queries
//! festivos demo
//! ```

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colombia_holidays::{Clock, FixedClock, Holiday, SystemClock};
use serde::Serialize;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "festivos",
    version,
    about = "Colombian public holiday calendar (Ley Emiliani, Easter-relative, Sundays)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Treat DATE (YYYY-MM-DD) as today instead of reading the system clock
    #[arg(long, global = true, value_name = "DATE", value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a date is a holiday
    Check {
        /// Date to check (YYYY-MM-DD); defaults to today
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// List the official holidays of a year
    List {
        /// Year to list; defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the date of Easter Sunday
    Easter {
        /// Year to compute; defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Check today, Christmas 2025, and list the 2025 holidays
    Demo,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// JSON document written by `list --format json`.
#[derive(Serialize)]
struct YearListing<'a> {
    year: i32,
    holidays: &'a [Holiday],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    // If no subcommand was provided, print help and exit.
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Re-parse with --help to show usage (clap handles this)
            Cli::parse_from(["festivos", "--help"]);
            unreachable!();
        }
    };

    match command {
        Commands::Check { date } => {
            let date = date.unwrap_or_else(|| clock.today());
            tracing::info!(%date, "checking date");
            let name = colombia_holidays::holiday_name(date)
                .with_context(|| format!("Failed to check {}", date))?;
            println!("{}", describe(date, name));
        }
        Commands::List { year, format } => {
            let year = year.unwrap_or_else(|| clock.today().year());
            tracing::info!(year, "listing holidays");
            let holidays = colombia_holidays::list_holidays(year)
                .with_context(|| format!("Failed to list holidays for {}", year))?;
            match format {
                Format::Text => print_holidays(&holidays),
                Format::Json => {
                    let listing = YearListing {
                        year,
                        holidays: &holidays,
                    };
                    println!("{}", serde_json::to_string_pretty(&listing)?);
                }
            }
        }
        Commands::Easter { year } => {
            let year = year.unwrap_or_else(|| clock.today().year());
            let easter = colombia_holidays::easter_sunday(year)
                .with_context(|| format!("Failed to compute Easter for {}", year))?;
            println!("{}", easter.format("%Y-%m-%d (%A)"));
        }
        Commands::Demo => demo(clock.as_ref())?,
    }

    Ok(())
}

/// Reproduce the walkthrough: today's status, a specific date, then a year listing.
fn demo(clock: &dyn Clock) -> Result<()> {
    match colombia_holidays::today_holiday_name(clock).context("Failed to check today")? {
        Some(name) => println!("Today is a holiday: {}", name),
        None => println!("Today is not a holiday"),
    }

    let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).context("invalid demo date")?;
    if let Some(name) = colombia_holidays::holiday_name(christmas)? {
        println!("{} is: {}", christmas.format("%Y-%m-%d"), name);
    }

    println!();
    println!("Holidays in 2025:");
    print_holidays(&colombia_holidays::list_holidays(2025)?);
    Ok(())
}

fn print_holidays(holidays: &[Holiday]) {
    for holiday in holidays {
        println!("{}", describe(holiday.date, Some(holiday.name)));
    }
}

/// Format a date as `YYYY-MM-DD (Weekday): Name`.
fn describe(date: NaiveDate, name: Option<&str>) -> String {
    format!(
        "{}: {}",
        date.format("%Y-%m-%d (%A)"),
        name.unwrap_or("not a holiday")
    )
}

fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", raw, e))
}

/// Install a stderr subscriber so stdout carries only results.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
