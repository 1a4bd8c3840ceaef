use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use apportion_core::{update, AppState, Msg};
use apportion_logging::apportion_info;

use super::commands::{parse_line, SessionCommand, HELP};
use super::effects::EffectRunner;
use super::persistence;
use super::render::render_view;

pub fn run_session(state_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session_with(stdin.lock(), stdout.lock(), state_dir)
}

/// Drive the core state machine from line-based input until `quit` or EOF.
pub(crate) fn run_session_with<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    state_dir: &Path,
) -> Result<()> {
    let effects = EffectRunner::new(state_dir.to_path_buf());
    let mut state = AppState::new();
    if let Some(snapshot) = persistence::load_session(state_dir) {
        state = dispatch(state, Msg::RestoreSession(snapshot), &effects);
    }
    apportion_info!("Session started in {:?}", state_dir);

    writeln!(output, "{HELP}")?;
    render_if_dirty(&mut state, &mut output, true)?;

    for line in input.lines() {
        match parse_line(&line?) {
            SessionCommand::Dispatch(msg) => {
                state = dispatch(state, msg, &effects);
                render_if_dirty(&mut state, &mut output, false)?;
            }
            SessionCommand::Show => render_if_dirty(&mut state, &mut output, true)?,
            SessionCommand::Help => writeln!(output, "{HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Blank => {}
            SessionCommand::Invalid(reason) => writeln!(output, "{reason}")?,
        }
    }

    apportion_info!("Session ended");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, effects: &EffectRunner) -> AppState {
    let (state, pending) = update(state, msg);
    effects.run(pending);
    state
}

fn render_if_dirty<W: Write>(state: &mut AppState, output: &mut W, force: bool) -> io::Result<()> {
    let was_dirty = state.consume_dirty();
    if !(was_dirty || force) {
        return Ok(());
    }
    for line in render_view(&state.view()) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(input: &str, state_dir: &Path) -> String {
        let mut output = Vec::new();
        run_session_with(Cursor::new(input.to_string()), &mut output, state_dir).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn session_allocates_and_saves_inputs() {
        let temp = TempDir::new().unwrap();
        let output = run("seats 4\nadd A 100\nadd B 50\nquit\n", temp.path());

        assert!(output.contains("  [ 1] A  [ 2] A  [ 3] B  [ 4] A"));
        let restored = persistence::load_session(temp.path()).unwrap();
        assert_eq!(restored.seat_budget, 4);
        assert_eq!(restored.candidates.len(), 2);
    }

    #[test]
    fn session_resumes_from_saved_inputs() {
        let temp = TempDir::new().unwrap();
        run("seats 3\nadd Solo 7\n", temp.path());
        let output = run("show\n", temp.path());

        assert!(output.contains("Seats: 3 (max 60)"));
        assert!(output.contains("[ 3] Solo"));
    }

    #[test]
    fn rejected_input_is_reported_and_not_saved() {
        let temp = TempDir::new().unwrap();
        let output = run("add A lots\nfly away\n", temp.path());

        assert!(output.contains("rejected: invalid vote count NaN for \"A\""));
        assert!(output.contains("unknown command \"fly\""));
        assert!(persistence::load_session(temp.path()).is_none());
    }

    #[test]
    fn lines_after_quit_are_ignored() {
        let temp = TempDir::new().unwrap();
        run("quit\nadd A 1\n", temp.path());

        assert!(persistence::load_session(temp.path()).is_none());
    }
}
