mod platform;

use std::path::PathBuf;

use anyhow::Result;
use apportion_engine::Candidate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::platform::logging::LogTarget;

/// D'Hondt seat calculator.
#[derive(Parser)]
#[command(name = "apportion", version, long_about = None)]
struct Cli {
    /// Where to send log output (default: off for allocate, file for session)
    #[arg(long, value_enum, global = true)]
    log: Option<LogTarget>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Allocate seats once and print the result.
    Allocate {
        /// Total seats to distribute (default: from --file, else 16)
        #[arg(short, long, allow_negative_numbers = true)]
        seats: Option<i64>,

        /// Candidate as NAME=VOTES; repeat in list order
        #[arg(short, long = "candidate", value_parser = parse_candidate_arg)]
        candidates: Vec<Candidate>,

        /// Saved session (.ron) supplying seats and leading candidates
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Edit seats and candidates interactively from stdin.
    Session {
        /// Directory holding the saved session file
        #[arg(long, default_value = ".")]
        state_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Allocate {
            seats,
            candidates,
            file,
            format,
        } => {
            platform::logging::initialize(cli.log.unwrap_or(LogTarget::Off), cli.verbose);
            platform::allocate::run(seats, candidates, file.as_deref(), format)
        }
        Command::Session { state_dir } => {
            platform::logging::initialize(cli.log.unwrap_or(LogTarget::File), cli.verbose);
            platform::app::run_session(&state_dir)
        }
    }
}

/// Parse `NAME=VOTES`, splitting on the last `=` so names may contain one.
fn parse_candidate_arg(raw: &str) -> Result<Candidate, String> {
    let (name, votes) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=VOTES, got {raw:?}"))?;
    let votes: f64 = votes
        .trim()
        .parse()
        .map_err(|_| format!("votes for {name:?} is not a number: {votes:?}"))?;
    Ok(Candidate::new(name.trim(), votes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_arg_splits_on_last_equals() {
        assert_eq!(
            parse_candidate_arg("A=B=12.5").unwrap(),
            Candidate::new("A=B", 12.5)
        );
        assert_eq!(
            parse_candidate_arg(" Greens = 300 ").unwrap(),
            Candidate::new("Greens", 300.0)
        );
    }

    #[test]
    fn candidate_arg_rejects_missing_or_bad_votes() {
        assert!(parse_candidate_arg("Greens").is_err());
        assert!(parse_candidate_arg("Greens=many").is_err());
    }

    #[test]
    fn cli_parses_allocate() {
        let cli = Cli::try_parse_from([
            "apportion",
            "allocate",
            "--seats",
            "4",
            "-c",
            "A=100",
            "-c",
            "B=50",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Allocate {
                seats,
                candidates,
                file,
                format,
            } => {
                assert_eq!(seats, Some(4));
                assert_eq!(candidates.len(), 2);
                assert_eq!(file, None);
                assert_eq!(format, OutputFormat::Json);
            }
            Command::Session { .. } => panic!("expected allocate"),
        }
    }

    #[test]
    fn cli_accepts_negative_seats_for_engine_to_reject() {
        let cli = Cli::try_parse_from(["apportion", "allocate", "--seats", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Allocate {
                seats: Some(-2),
                ..
            }
        ));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
