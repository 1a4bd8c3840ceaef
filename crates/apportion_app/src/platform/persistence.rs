//! Session inputs saved between runs as pretty RON. Results are never stored.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use apportion_core::SessionSnapshot;
use apportion_engine::Candidate;
use apportion_logging::{apportion_error, apportion_info, apportion_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

pub(crate) const SESSION_FILENAME: &str = ".apportion_session.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PersistedSession {
    #[serde(default)]
    pub saved_utc: Option<String>,
    pub seat_budget: u32,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl PersistedSession {
    pub fn into_snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            seat_budget: self.seat_budget,
            candidates: self.candidates,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum PersistError {
    #[error("state directory missing or not writable: {0}")]
    StateDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Read a session file, failing loudly. Used when the user names the file.
pub(crate) fn read_session_file(path: &Path) -> anyhow::Result<PersistedSession> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading session file {:?}", path))?;
    ron::from_str(&content).with_context(|| format!("parsing session file {:?}", path))
}

/// Load the saved session from `state_dir`, if any. Problems are logged and
/// treated as "nothing saved".
pub(crate) fn load_session(state_dir: &Path) -> Option<SessionSnapshot> {
    let path = state_dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            apportion_warn!("Failed to read saved session from {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str::<PersistedSession>(&content) {
        Ok(session) => {
            apportion_info!(
                "Loaded saved session from {:?} ({} candidate(s))",
                path,
                session.candidates.len()
            );
            Some(session.into_snapshot())
        }
        Err(err) => {
            apportion_warn!("Failed to parse saved session from {:?}: {}", path, err);
            None
        }
    }
}

pub(crate) fn save_session(state_dir: &Path, snapshot: &SessionSnapshot, saved_utc: &str) {
    let session = PersistedSession {
        saved_utc: Some(saved_utc.to_string()),
        seat_budget: snapshot.seat_budget,
        candidates: snapshot.candidates.clone(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&session, pretty) {
        Ok(text) => text,
        Err(err) => {
            apportion_error!("Failed to serialize session: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    match writer.write(SESSION_FILENAME, &content) {
        Ok(path) => apportion_info!("Saved session to {:?}", path),
        Err(err) => apportion_error!("Failed to save session to {:?}: {}", state_dir, err),
    }
}

/// Ensure the state directory exists; create if missing.
fn ensure_state_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::StateDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
    }
    Ok(())
}

/// Write `{dir}/{filename}` through a temp file and rename, so a crash never
/// leaves a half-written session behind.
struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_state_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
