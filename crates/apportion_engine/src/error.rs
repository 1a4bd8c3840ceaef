use thiserror::Error;

/// Reasons an allocation is refused. Always raised before any seat is awarded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("invalid seat budget {value}: must be a non-negative integer")]
    InvalidSeatBudget { value: String },
    #[error("invalid vote count {votes} for {name:?}: must be a finite non-negative number")]
    InvalidVoteCount { name: String, votes: f64 },
    #[error("duplicate candidate {name:?}")]
    DuplicateCandidate { name: String },
    #[error("candidate at position {position} has an empty name")]
    EmptyCandidateName { position: usize },
    #[error("no candidates to receive {seats} seat(s)")]
    NoCandidates { seats: u32 },
}
