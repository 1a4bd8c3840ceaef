#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User moved the seat-count control.
    SeatBudgetChanged(i64),
    /// User submitted the name/votes entry form. `votes` is the raw text.
    CandidateSubmitted { name: String, votes: String },
    /// User removed a candidate entry.
    CandidateRemoved { name: String },
    /// Restore inputs saved by a previous run.
    RestoreSession(crate::SessionSnapshot),
    /// Fallback for placeholder wiring.
    NoOp,
}
