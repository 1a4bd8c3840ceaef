use apportion_engine::Candidate;

/// Inputs of a session: seat count and candidate entries. Never results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub seat_budget: u32,
    pub candidates: Vec<Candidate>,
}
