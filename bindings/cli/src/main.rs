//! Interactive fraud notification counter.
//!
//! Reads `n d` on the first line and `n` daily expenditures on the second,
//! then prints how many days triggered a notification.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fraudwatch::prelude::*;

use crate::input::{InputError, MAX_EXPENDITURE, parse_expenditures, parse_parameters, read_line};

mod input;

const RULE: &str = "--------------------------------------------------";

#[derive(Parser, Debug)]
#[command(name = "fraudwatch", version, about, long_about = None)]
struct Cli {
    /// Suppress the banner and input prompts.
    #[arg(short, long)]
    quiet: bool,

    /// Also print the 1-based days that triggered a notification.
    #[arg(long)]
    show_days: bool,
}

fn setup_logger() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // Keep an already installed subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Program: Fraudulent Activity Notifications")?;
    writeln!(
        out,
        "Description: This program simulates a bank system that sends notifications to \
         clients if their spending on a given day is at least twice the median of their \
         spending over a trailing number of days."
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(out)
}

fn run<R: BufRead, W: Write>(cli: &Cli, mut reader: R, out: &mut W) -> Result<(), InputError> {
    if !cli.quiet {
        print_banner(out)?;
        writeln!(
            out,
            "Enter the total number of days (n) and the number of previous/trailing days (d) to calculate the median:"
        )?;
        out.flush()?;
    }

    let params = parse_parameters(&read_line(&mut reader)?)?;
    debug!(days = params.days, window = params.window, "parsed parameters");

    if !cli.quiet {
        writeln!(
            out,
            "Enter the expenditures for {} days (space-separated values):",
            params.days
        )?;
        out.flush()?;
    }

    let values = parse_expenditures(&read_line(&mut reader)?, params.days)?;

    let mut builder = Notifier::<f64>::new()
        .window(params.window)
        .max_value(MAX_EXPENDITURE);
    if cli.show_days {
        builder = builder.return_flagged_days();
    }
    let report = builder.adapter(Batch).build()?.run(&values)?;
    debug!(
        notifications = report.notifications,
        evaluated = report.days_evaluated(),
        "counted notifications"
    );

    writeln!(out, "Total notifications: {}", report.notifications)?;
    if let Some(days) = &report.flagged_days {
        let days: Vec<String> = days.iter().map(|d| (d + 1).to_string()).collect();
        if days.is_empty() {
            writeln!(out, "Flagged days: none")?;
        } else {
            writeln!(out, "Flagged days: {}", days.join(" "))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run(&cli, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "rejected input");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(args: &[&str], stdin: &str) -> (Result<(), InputError>, String) {
        let cli = Cli::parse_from(std::iter::once("fraudwatch").chain(args.iter().copied()));
        let mut out = Vec::new();
        let res = run(&cli, Cursor::new(stdin.to_owned()), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quiet_run_prints_only_total() {
        let (res, out) = run_with(&["--quiet"], "9 5\n2 3 4 2 3 6 8 4 5\n");
        res.unwrap();
        assert_eq!(out, "Total notifications: 2\n");
    }

    #[test]
    fn interactive_run_prints_banner_and_prompts() {
        let (res, out) = run_with(&[], "4 1\n10 20 30 40\n");
        res.unwrap();
        assert!(out.starts_with(RULE));
        assert!(out.contains("Program: Fraudulent Activity Notifications"));
        assert!(out.contains("Enter the expenditures for 4 days (space-separated values):"));
        assert!(out.ends_with("Total notifications: 1\n"));
    }

    #[test]
    fn show_days_is_one_based() {
        let (res, out) = run_with(&["-q", "--show-days"], "9 5\n2 3 4 2 3 6 8 4 5\n");
        res.unwrap();
        assert_eq!(out, "Total notifications: 2\nFlagged days: 6 7\n");

        let (res, out) = run_with(&["-q", "--show-days"], "5 4\n1 2 3 4 4\n");
        res.unwrap();
        assert_eq!(out, "Total notifications: 0\nFlagged days: none\n");
    }

    #[test]
    fn missing_second_line_is_eof() {
        let (res, _) = run_with(&["-q"], "3 2\n");
        assert!(matches!(res, Err(InputError::UnexpectedEof)));
    }

    #[test]
    fn empty_input_is_eof() {
        let (res, _) = run_with(&["-q"], "");
        assert!(matches!(res, Err(InputError::UnexpectedEof)));
    }

    #[test]
    fn rejected_expenditure_stops_before_output() {
        let (res, out) = run_with(&["-q"], "3 1\n1 500 2\n");
        assert!(matches!(res, Err(InputError::ExpenditureOutOfRange { day: 2 })));
        assert!(out.is_empty());
    }
}
