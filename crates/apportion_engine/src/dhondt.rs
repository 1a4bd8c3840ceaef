use apportion_logging::{apportion_debug, apportion_trace};

use crate::{validate, Allocation, AllocationError, Candidate, CandidateSeats};

/// D'Hondt quotient: votes divided by one more than the seats already won.
pub fn quotient(votes: f64, seats_won: u32) -> f64 {
    votes / (f64::from(seats_won) + 1.0)
}

/// Distribute `seat_budget` seats among `candidates` by the highest-averages
/// (D'Hondt) method.
///
/// Each round awards one seat to the candidate with the greatest quotient.
/// Ties go to the candidate listed first, which also decides every round
/// when all candidates have zero votes. Inputs are validated up front, so an
/// error never comes with a partial result.
pub fn allocate(seat_budget: u32, candidates: &[Candidate]) -> Result<Allocation, AllocationError> {
    validate(seat_budget, candidates)?;

    let mut running = vec![0_u32; candidates.len()];
    let mut award_sequence = Vec::with_capacity(seat_budget as usize);

    for round in 0..seat_budget {
        let winner = select_winner(candidates, &running);
        running[winner] += 1;
        award_sequence.push(candidates[winner].name.clone());
        apportion_trace!(
            "seat {} -> {} (now {} seat(s))",
            round + 1,
            candidates[winner].name,
            running[winner]
        );
    }

    let seats = candidates
        .iter()
        .zip(running)
        .map(|(candidate, seats)| CandidateSeats {
            name: candidate.name.clone(),
            votes: candidate.votes,
            seats,
        })
        .collect();

    apportion_debug!(
        "allocated {} seat(s) among {} candidate(s)",
        seat_budget,
        candidates.len()
    );
    Ok(Allocation {
        seats,
        award_sequence,
    })
}

/// Index of the candidate with the strictly greatest quotient; the earliest
/// index wins a tie. Callers guarantee `candidates` is non-empty.
fn select_winner(candidates: &[Candidate], running: &[u32]) -> usize {
    debug_assert!(!candidates.is_empty());
    let mut best = 0;
    let mut best_quotient = quotient(candidates[0].votes, running[0]);
    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        let current = quotient(candidate.votes, running[index]);
        if current > best_quotient {
            best = index;
            best_quotient = current;
        }
    }
    best
}
