use apportion_engine::{validate, AllocationError, Candidate, SeatBudget};
use apportion_logging::apportion_info;

use crate::{coerce_votes, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every accepted input change recomputes the allocation and asks the
/// platform to save the new inputs. Rejected input only sets a notice.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SeatBudgetChanged(value) => match SeatBudget::try_from(value) {
            Ok(seats) => {
                if state.set_seat_budget(seats.get()) {
                    vec![Effect::SaveSession(state.snapshot())]
                } else {
                    Vec::new()
                }
            }
            Err(err) => {
                apportion_info!("Rejected seat count: {}", err);
                state.reject(err);
                Vec::new()
            }
        },
        Msg::CandidateSubmitted { name, votes } => match parse_candidate(&state, &name, &votes) {
            Ok(candidate) => {
                state.push_candidate(candidate);
                vec![Effect::SaveSession(state.snapshot())]
            }
            Err(err) => {
                apportion_info!("Rejected candidate entry: {}", err);
                state.reject(err);
                Vec::new()
            }
        },
        Msg::CandidateRemoved { name } => {
            if state.remove_candidate(name.trim()) {
                vec![Effect::SaveSession(state.snapshot())]
            } else {
                Vec::new()
            }
        }
        Msg::RestoreSession(snapshot) => {
            state.restore(snapshot);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Build a candidate from form input, refusing anything the engine would
/// reject once it joins the current list.
fn parse_candidate(
    state: &AppState,
    name: &str,
    votes: &str,
) -> Result<Candidate, AllocationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AllocationError::EmptyCandidateName {
            position: state.candidates().len(),
        });
    }

    let candidate = Candidate::new(name, coerce_votes(votes));
    let mut proposed = state.candidates().to_vec();
    proposed.push(candidate.clone());
    validate(0, &proposed)?;
    Ok(candidate)
}
