#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub seat_budget: u32,
    pub max_seats: u32,
    pub candidates: Vec<CandidateRowView>,
    /// Exactly `seat_budget` cells, in award order.
    pub seat_cells: Vec<SeatCellView>,
    /// Why the current inputs could not be allocated.
    pub error: Option<String>,
    /// Why the last input was rejected.
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRowView {
    pub name: String,
    pub votes: f64,
    /// `None` while the inputs cannot be allocated.
    pub seats: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatCellView {
    Filled(String),
    /// Placeholder for a seat with no holder.
    Empty,
}

impl AppViewModel {
    pub fn filled_seats(&self) -> usize {
        self.seat_cells
            .iter()
            .filter(|cell| matches!(cell, SeatCellView::Filled(_)))
            .count()
    }
}
