//! invsort binary.
//!
//! Registers records from standard input, then runs the menu loop over them.

use std::io::{self, BufRead, Write};

use clap::Parser;
use invsort::config::{DEFAULT_CAPACITY, Limits};
use invsort::intake::read_records;
use invsort::present::TablePresenter;
use invsort::session::Session;
use invsort::shell::Shell;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "invsort")]
#[command(about = "Record inventory with instrumented sorting and binary search")]
#[command(version)]
struct Args {
    /// Maximum number of records to register
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    capacity: usize,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_tracing(args.verbose);

    let limits = Limits::with_capacity(args.capacity);
    info!(capacity = limits.capacity, "starting invsort");

    run(io::stdin().lock(), io::stdout().lock(), limits)
}

/// Registers records, then hands them to the menu loop. Nothing registered ends the
/// run successfully after a notice.
fn run<R: BufRead, W: Write>(mut input: R, mut output: W, limits: Limits) -> anyhow::Result<()> {
    let records = read_records(&mut input, &mut output, limits.clone())?;
    if records.is_empty() {
        writeln!(output, "No records registered. Exiting.")?;
        return Ok(());
    }

    let presenter = TablePresenter::new(output);
    let mut shell = Shell::with_limits(input, presenter, Session::new(records), limits);
    shell.run()?;
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("invsort=debug")
        } else {
            EnvFilter::new("invsort=warn")
        }
    });

    // Stdout carries the interactive session, so logs go to stderr.
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, limits: Limits) -> String {
        let mut output = Vec::new();
        run(Cursor::new(script.as_bytes().to_vec()), &mut output, limits).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("5"), Ok(5));
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("abc").is_err());
        assert!(parse_capacity("-1").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["invsort"]).unwrap();
        assert_eq!(args.capacity, DEFAULT_CAPACITY);
        assert!(!args.verbose);

        let args = Args::try_parse_from(["invsort", "--capacity", "3", "-v"]).unwrap();
        assert_eq!(args.capacity, 3);
        assert!(args.verbose);

        assert!(Args::try_parse_from(["invsort", "--capacity", "0"]).is_err());
        assert!(Args::try_parse_from(["invsort", "-c", "many"]).is_err());
    }

    #[test]
    fn test_no_records_exits_cleanly() {
        let output = run_script("\n", Limits::default());
        assert!(output.contains("No records registered. Exiting."));
        assert!(!output.contains("--- MENU ---"));

        let output = run_script("", Limits::default());
        assert!(output.contains("No records registered. Exiting."));
    }

    #[test]
    fn test_registered_records_reach_the_menu() {
        let output = run_script("Zeta\ncore\n3\n\n1\n0\n", Limits::default());
        assert!(output.contains("--- MENU ---"));
        assert!(output.contains("|  0 | Zeta"));
        assert!(output.contains("Exiting."));
    }
}
