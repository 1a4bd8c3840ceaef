use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::AllocationError;

/// A party or list competing for seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub votes: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, votes: f64) -> Self {
        Self {
            name: name.into(),
            votes,
        }
    }
}

/// Total number of seats to distribute.
///
/// The engine itself takes a plain `u32`; this type exists for callers that
/// start from an untrusted number (a slider value, a parsed field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatBudget(u32);

impl SeatBudget {
    pub const fn new(seats: u32) -> Self {
        Self(seats)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Accepts only finite, integral, non-negative values that fit in a `u32`.
    pub fn from_f64(value: f64) -> Result<Self, AllocationError> {
        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX)
        {
            return Err(AllocationError::InvalidSeatBudget {
                value: value.to_string(),
            });
        }
        Ok(Self(value as u32))
    }
}

impl From<u32> for SeatBudget {
    fn from(seats: u32) -> Self {
        Self(seats)
    }
}

impl TryFrom<i64> for SeatBudget {
    type Error = AllocationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| AllocationError::InvalidSeatBudget {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for SeatBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final seat count for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSeats {
    pub name: String,
    pub votes: f64,
    pub seats: u32,
}

/// Result of one allocation run.
///
/// `seats` follows the input candidate order; `award_sequence[i]` is the
/// candidate that won seat `i`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub seats: Vec<CandidateSeats>,
    pub award_sequence: Vec<String>,
}

impl Allocation {
    pub fn seats_for(&self, name: &str) -> Option<u32> {
        self.seats
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.seats)
    }

    pub fn total_seats(&self) -> u32 {
        self.seats.iter().map(|entry| entry.seats).sum()
    }

    /// Seats keyed by candidate name.
    pub fn seat_map(&self) -> BTreeMap<String, u32> {
        self.seats
            .iter()
            .map(|entry| (entry.name.clone(), entry.seats))
            .collect()
    }

    /// Name of the candidate holding seat `index`, if that seat was awarded.
    pub fn seat_holder(&self, index: usize) -> Option<&str> {
        self.award_sequence.get(index).map(String::as_str)
    }
}
