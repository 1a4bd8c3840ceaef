use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use apportion_core::DEFAULT_SEATS;
use apportion_engine::{allocate, Allocation, Candidate, SeatBudget};
use apportion_logging::apportion_info;

use super::persistence;
use super::render::render_allocation;
use crate::OutputFormat;

pub fn run(
    seats: Option<i64>,
    candidates: Vec<Candidate>,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let allocation = allocate_inputs(seats, candidates, file)?;
    let stdout = io::stdout();
    write_allocation(&mut stdout.lock(), &allocation, format)
}

/// Resolve the seat count (`--seats`, then the file, then the default) and
/// the candidate list (file entries first), then allocate.
fn allocate_inputs(
    seats: Option<i64>,
    candidates: Vec<Candidate>,
    file: Option<&Path>,
) -> Result<Allocation> {
    let saved = file.map(persistence::read_session_file).transpose()?;

    let seat_budget = match (seats, &saved) {
        (Some(value), _) => SeatBudget::try_from(value)?.get(),
        (None, Some(session)) => session.seat_budget,
        (None, None) => DEFAULT_SEATS,
    };
    let mut all = saved.map(|session| session.candidates).unwrap_or_default();
    all.extend(candidates);

    apportion_info!(
        "Allocating {} seat(s) among {} candidate(s)",
        seat_budget,
        all.len()
    );
    Ok(allocate(seat_budget, &all)?)
}

fn write_allocation<W: Write>(
    output: &mut W,
    allocation: &Allocation,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for line in render_allocation(allocation) {
                writeln!(output, "{line}")?;
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(allocation).context("serializing allocation")?;
            writeln!(output, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apportion_engine::AllocationError;
    use std::fs;
    use tempfile::TempDir;

    fn engine_error(err: anyhow::Error) -> AllocationError {
        err.downcast::<AllocationError>().unwrap()
    }

    #[test]
    fn seats_flag_and_candidates_allocate() {
        let allocation = allocate_inputs(
            Some(4),
            vec![Candidate::new("A", 100.0), Candidate::new("B", 50.0)],
            None,
        )
        .unwrap();

        assert_eq!(allocation.award_sequence, vec!["A", "A", "B", "A"]);
    }

    #[test]
    fn default_seat_count_applies_without_flag_or_file() {
        let allocation = allocate_inputs(None, vec![Candidate::new("A", 1.0)], None).unwrap();
        assert_eq!(allocation.total_seats(), DEFAULT_SEATS);
    }

    #[test]
    fn file_supplies_seats_and_leading_candidates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.ron");
        fs::write(
            &path,
            r#"(seat_budget: 3, candidates: [(name: "A", votes: 10.0)])"#,
        )
        .unwrap();

        let allocation =
            allocate_inputs(None, vec![Candidate::new("B", 10.0)], Some(&path)).unwrap();

        assert_eq!(allocation.award_sequence, vec!["A", "B", "A"]);
    }

    #[test]
    fn engine_errors_propagate() {
        assert_eq!(
            engine_error(allocate_inputs(Some(3), Vec::new(), None).unwrap_err()),
            AllocationError::NoCandidates { seats: 3 }
        );
        assert!(matches!(
            engine_error(allocate_inputs(Some(-1), Vec::new(), None).unwrap_err()),
            AllocationError::InvalidSeatBudget { .. }
        ));
        assert!(matches!(
            engine_error(
                allocate_inputs(
                    Some(1),
                    vec![Candidate::new("A", 1.0), Candidate::new("A", 2.0)],
                    None
                )
                .unwrap_err()
            ),
            AllocationError::DuplicateCandidate { .. }
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.ron");
        assert!(allocate_inputs(None, Vec::new(), Some(&missing)).is_err());
    }

    #[test]
    fn json_output_is_parseable() {
        let allocation = allocate(2, &[Candidate::new("A", 3.0)]).unwrap();
        let mut output = Vec::new();
        write_allocation(&mut output, &allocation, OutputFormat::Json).unwrap();

        let parsed: Allocation = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, allocation);
    }
}
