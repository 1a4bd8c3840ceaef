//! Apportionment engine: stateless D'Hondt seat allocation.
mod dhondt;
mod error;
mod types;
mod validate;

pub use dhondt::{allocate, quotient};
pub use error::AllocationError;
pub use types::{Allocation, Candidate, CandidateSeats, SeatBudget};
pub use validate::validate;
