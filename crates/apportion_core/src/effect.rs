use crate::SessionSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Inputs changed; the platform may store them for the next run.
    SaveSession(SessionSnapshot),
}
