use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::warn;

mod config;
mod diagnostics;
mod error;
mod extract;
mod locate;
mod render;
mod schema;

pub type Result<T> = anyhow::Result<T>;

/// `locate` found nothing for the date.
const EXIT_NOT_FOUND: u8 = 1;
/// `locate` could not fetch or parse the schedule. (2 is clap's usage error,
/// which also covers an invalid date.)
const EXIT_FETCH_FAILED: u8 = 3;

#[derive(Parser)]
#[command(name = "feu-config", version)]
#[command(about = "HSC FEU configuration schedule tools", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the markdown configuration table into a CSV schedule.
    Extract {
        #[arg(long, env = config::ENV_INPUT, default_value = config::DEFAULT_INPUT)]
        input: PathBuf,

        #[arg(short = 'o', long, env = config::ENV_OUTPUT, default_value = config::DEFAULT_OUTPUT)]
        out: PathBuf,

        /// Also write dropped and degraded rows as JSON.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show the configuration in effect on a date.
    Locate {
        /// Date in YYYY-MM-DD format (defaults to today).
        #[arg(value_parser = parse_target_date)]
        date: Option<NaiveDate>,

        /// URL or local path of the CSV schedule.
        #[arg(long, env = config::ENV_URL, default_value = config::DEFAULT_URL)]
        url: String,

        /// Give up on the HTTP request after this many seconds (default: wait).
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

fn parse_target_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date format '{s}', please use YYYY-MM-DD"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocateOutcome {
    Found,
    NotFound,
    FetchFailed,
}

impl From<LocateOutcome> for ExitCode {
    fn from(outcome: LocateOutcome) -> Self {
        match outcome {
            LocateOutcome::Found => ExitCode::SUCCESS,
            LocateOutcome::NotFound => ExitCode::from(EXIT_NOT_FOUND),
            LocateOutcome::FetchFailed => ExitCode::from(EXIT_FETCH_FAILED),
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "feu_config=warn",
        1 => "feu_config=info",
        2 => "feu_config=debug",
        _ => "feu_config=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_locate(date: Option<NaiveDate>, url: &str, timeout: Option<Duration>) -> LocateOutcome {
    let target = match date {
        Some(d) => d,
        None => {
            let today = Local::now().date_naive();
            println!("No date provided, using today: {today}");
            today
        }
    };

    println!("Fetching configuration for date: {target}");
    println!("From URL: {url}");
    println!();

    let table = match locate::fetch_table(url, timeout) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error fetching data from {url}: {e}");
            eprintln!("Failed to fetch or parse CSV data.");
            return LocateOutcome::FetchFailed;
        }
    };
    if table.is_empty() {
        warn!("schedule at {} has no rows", url);
    }

    println!("Successfully fetched {} configuration entries.", table.len());
    println!();

    let found = locate::find_configuration(&table, target);
    println!("{}", render::render_configuration(&table, found));

    match found {
        Some(_) => LocateOutcome::Found,
        None => LocateOutcome::NotFound,
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Extract { input, out, report } => {
            let summary = extract::convert_file(&input, &out)?;
            if let Some(path) = report {
                extract::write_report(&path, &summary)?;
            }
            if !summary.warnings.is_empty() {
                warn!(
                    "{} row(s) dropped or degraded; rerun with --report for details",
                    summary.warnings.len()
                );
            }
            println!("Successfully converted table to CSV: {}", out.display());
            println!("Total rows: {}", summary.rows_written);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Locate {
            date,
            url,
            timeout_secs,
        } => Ok(run_locate(date, &url, timeout_secs.map(Duration::from_secs)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SCHEDULE: &str = "\
Date Begin,Date End,Opt Top,Opt Mid,Opt Bot,IR Top,IR Mid,IR Bot
2020-01-01,2021-01-01,g,r,i,z,y,NB921
2021-01-01,,g,r2,i2,z,Y,NB387
";

    fn locate_args(args: &[&str]) -> clap::error::Result<Cli> {
        let mut argv = vec!["feu-config", "locate"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn invalid_date_is_rejected_by_the_parser() {
        let err = locate_args(&["2021-13-40"]).err().unwrap();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(locate_args(&["15/07/2025"]).is_err());
    }

    #[test]
    fn date_is_optional() {
        let cli = locate_args(&["--url", "schedule.csv"]).unwrap();
        match cli.cmd {
            Commands::Locate { date, url, .. } => {
                assert_eq!(date, None);
                assert_eq!(url, "schedule.csv");
            }
            _ => panic!("expected locate"),
        }

        let cli = locate_args(&["2025-07-15"]).unwrap();
        match cli.cmd {
            Commands::Locate { date, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 15));
            }
            _ => panic!("expected locate"),
        }
    }

    #[test]
    fn locate_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");
        fs::write(&path, SCHEDULE).unwrap();
        let src = path.to_str().unwrap();

        let on = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
        assert_eq!(run_locate(on("2021-06-01"), src, None), LocateOutcome::Found);
        assert_eq!(run_locate(on("2019-06-01"), src, None), LocateOutcome::NotFound);

        let missing = dir.path().join("missing.csv");
        assert_eq!(
            run_locate(on("2021-06-01"), missing.to_str().unwrap(), None),
            LocateOutcome::FetchFailed
        );

        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "Date Begin,Date End\n").unwrap();
        assert_eq!(
            run_locate(on("2021-06-01"), empty.to_str().unwrap(), None),
            LocateOutcome::NotFound
        );
    }

    #[test]
    fn outcomes_map_to_distinct_exit_codes() {
        assert_eq!(ExitCode::from(LocateOutcome::Found), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from(LocateOutcome::NotFound), ExitCode::from(1));
        assert_eq!(ExitCode::from(LocateOutcome::FetchFailed), ExitCode::from(3));
    }

    #[test]
    fn extract_defaults() {
        let cli = Cli::try_parse_from(["feu-config", "extract"]).unwrap();
        match cli.cmd {
            Commands::Extract { input, out, report } => {
                assert_eq!(input, PathBuf::from(config::DEFAULT_INPUT));
                assert_eq!(out, PathBuf::from(config::DEFAULT_OUTPUT));
                assert!(report.is_none());
            }
            _ => panic!("expected extract"),
        }
    }
}
