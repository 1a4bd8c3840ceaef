use std::path::PathBuf;

use apportion_core::Effect;
use chrono::Utc;

use super::persistence;

/// Executes effects returned by `update` against the filesystem.
pub(crate) struct EffectRunner {
    state_dir: PathBuf,
    clock: fn() -> String,
}

impl EffectRunner {
    pub fn new(state_dir: PathBuf) -> Self {
        Self {
            state_dir,
            clock: || Utc::now().to_rfc3339(),
        }
    }

    #[cfg(test)]
    pub fn with_clock(state_dir: PathBuf, clock: fn() -> String) -> Self {
        Self { state_dir, clock }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SaveSession(snapshot) => {
                    persistence::save_session(&self.state_dir, &snapshot, &(self.clock)());
                }
            }
        }
    }
}
