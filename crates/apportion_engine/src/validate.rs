use std::collections::HashSet;

use crate::{AllocationError, Candidate};

/// Check allocation inputs without allocating.
///
/// Candidates are checked in input order, so the first offending entry is the
/// one reported. An empty list is only an error when seats must be awarded.
pub fn validate(seat_budget: u32, candidates: &[Candidate]) -> Result<(), AllocationError> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for (position, candidate) in candidates.iter().enumerate() {
        if candidate.name.is_empty() {
            return Err(AllocationError::EmptyCandidateName { position });
        }
        if !candidate.votes.is_finite() || candidate.votes < 0.0 {
            return Err(AllocationError::InvalidVoteCount {
                name: candidate.name.clone(),
                votes: candidate.votes,
            });
        }
        if !seen.insert(candidate.name.as_str()) {
            return Err(AllocationError::DuplicateCandidate {
                name: candidate.name.clone(),
            });
        }
    }

    if seat_budget > 0 && candidates.is_empty() {
        return Err(AllocationError::NoCandidates { seats: seat_budget });
    }
    Ok(())
}
