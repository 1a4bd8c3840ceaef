use apportion_core::Msg;

pub(crate) const HELP: &str = "\
commands:
  seats N            set the number of seats
  add NAME VOTES     add a candidate (NAME may contain spaces)
  remove NAME        remove a candidate
  show               print the current allocation
  help               print this help
  quit               leave the session";

/// One line of session input, mapped to what the loop should do.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionCommand {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
    Blank,
    Invalid(String),
}

pub(crate) fn parse_line(line: &str) -> SessionCommand {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "" => SessionCommand::Blank,
        "seats" => match rest.parse::<i64>() {
            Ok(value) => SessionCommand::Dispatch(Msg::SeatBudgetChanged(value)),
            Err(_) => SessionCommand::Invalid(format!("seats needs a whole number, got {rest:?}")),
        },
        "add" => parse_add(rest),
        "remove" | "rm" if !rest.is_empty() => SessionCommand::Dispatch(Msg::CandidateRemoved {
            name: rest.to_string(),
        }),
        "remove" | "rm" => SessionCommand::Invalid("remove needs a candidate name".to_string()),
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Invalid(format!("unknown command {other:?}; try help")),
    }
}

/// `add NAME VOTES`: the last word is the vote count, everything before it
/// is the name. A single word is a name with blank votes.
fn parse_add(rest: &str) -> SessionCommand {
    if rest.is_empty() {
        return SessionCommand::Invalid("add needs NAME VOTES".to_string());
    }
    let (name, votes) = match rest.rsplit_once(char::is_whitespace) {
        Some((name, votes)) => (name.trim(), votes),
        None => (rest, ""),
    };
    SessionCommand::Dispatch(Msg::CandidateSubmitted {
        name: name.to_string(),
        votes: votes.to_string(),
    })
}
