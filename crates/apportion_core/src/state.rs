use apportion_engine::{allocate, Allocation, AllocationError, Candidate};

use crate::view_model::{AppViewModel, CandidateRowView, SeatCellView};
use crate::SessionSnapshot;

/// Seat count shown when nothing has been restored.
pub const DEFAULT_SEATS: u32 = 16;
/// Upper bound of the seat-count control. The engine itself has no bound.
pub const MAX_SEATS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    seat_budget: u32,
    candidates: Vec<Candidate>,
    outcome: Result<Allocation, AllocationError>,
    rejected: Option<AllocationError>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self {
            seat_budget: DEFAULT_SEATS,
            candidates: Vec::new(),
            outcome: Ok(Allocation::default()),
            rejected: None,
            dirty: false,
        };
        state.recompute();
        state
    }

    pub fn seat_budget(&self) -> u32 {
        self.seat_budget
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn allocation(&self) -> Option<&Allocation> {
        self.outcome.as_ref().ok()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            seat_budget: self.seat_budget,
            candidates: self.candidates.clone(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        let allocation = self.outcome.as_ref().ok();
        let candidates = self
            .candidates
            .iter()
            .map(|candidate| CandidateRowView {
                name: candidate.name.clone(),
                votes: candidate.votes,
                seats: allocation.and_then(|a| a.seats_for(&candidate.name)),
            })
            .collect();
        let seat_cells = (0..self.seat_budget as usize)
            .map(|index| {
                match allocation.and_then(|a| a.seat_holder(index)) {
                    Some(name) => SeatCellView::Filled(name.to_string()),
                    None => SeatCellView::Empty,
                }
            })
            .collect();

        AppViewModel {
            seat_budget: self.seat_budget,
            max_seats: MAX_SEATS,
            candidates,
            seat_cells,
            error: self.outcome.as_ref().err().map(ToString::to_string),
            notice: self.rejected.as_ref().map(ToString::to_string),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_seat_budget(&mut self, seats: u32) -> bool {
        let seats = seats.min(MAX_SEATS);
        let had_notice = self.rejected.take().is_some();
        if seats == self.seat_budget {
            self.dirty |= had_notice;
            return false;
        }
        self.seat_budget = seats;
        self.dirty = true;
        self.recompute();
        true
    }

    pub(crate) fn push_candidate(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
        self.rejected = None;
        self.dirty = true;
        self.recompute();
    }

    pub(crate) fn remove_candidate(&mut self, name: &str) -> bool {
        let before = self.candidates.len();
        self.candidates.retain(|candidate| candidate.name != name);
        if self.candidates.len() == before {
            return false;
        }
        self.rejected = None;
        self.dirty = true;
        self.recompute();
        true
    }

    pub(crate) fn restore(&mut self, snapshot: SessionSnapshot) {
        self.seat_budget = snapshot.seat_budget.min(MAX_SEATS);
        self.candidates = snapshot.candidates;
        self.rejected = None;
        self.dirty = true;
        self.recompute();
    }

    pub(crate) fn reject(&mut self, reason: AllocationError) {
        self.rejected = Some(reason);
        self.dirty = true;
    }

    fn recompute(&mut self) {
        self.outcome = allocate(self.seat_budget, &self.candidates);
    }
}
