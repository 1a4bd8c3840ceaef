//! Apportion core: pure state machine and view-model helpers for the seat calculator.
mod coerce;
mod effect;
mod msg;
mod session;
mod state;
mod update;
mod view_model;

pub use coerce::coerce_votes;
pub use effect::Effect;
pub use msg::Msg;
pub use session::SessionSnapshot;
pub use state::{AppState, DEFAULT_SEATS, MAX_SEATS};
pub use update::update;
pub use view_model::{AppViewModel, CandidateRowView, SeatCellView};
