//! Built-in dispatcher: session-control verbs intercepted before mapping.
//!
//! Built-ins act on the session itself, so they are handled here and never
//! reach the dialect mapper or the host shell. The dispatcher returns an
//! [`Outcome`] value instead of terminating the process — the session loop
//! decides what `Exit` means.

use std::io::{self, Write};

use crate::dialect::Dialect;
use crate::exec;
use crate::history::History;
use crate::tokenizer;

/// How many history entries the `history` built-in lists.
const HISTORY_DISPLAY_LIMIT: usize = 100;

/// Result of offering a stage to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a built-in; the caller should translate and execute the stage.
    NotBuiltin,
    /// Handled here; the stage contributes nothing to the pipeline.
    Handled,
    /// `exit`/`quit`: the whole session should end.
    Exit,
}

/// Intercept a stage if its verb is a built-in.
///
/// `help` prints usage, `history` lists recent entries with their IDs,
/// `clear` clears the host screen, `exit`/`quit` request session teardown.
pub fn dispatch(stage: &str, history: &History, host: Dialect) -> Outcome {
    let (verb, _) = tokenizer::split(stage);
    match verb.to_ascii_lowercase().as_str() {
        "help" => {
            print_help();
            Outcome::Handled
        }
        "exit" | "quit" => Outcome::Exit,
        "history" => {
            print_history(history);
            Outcome::Handled
        }
        "clear" => {
            exec::clear_screen(host);
            Outcome::Handled
        }
        _ => Outcome::NotBuiltin,
    }
}

fn print_help() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = write!(
        out,
        "\
unish — universal terminal
--------------------------
Built-in commands:
  exit, quit       : exit the terminal
  history          : show the last {HISTORY_DISPLAY_LIMIT} commands
  clear            : clear the screen
  !!               : repeat the last command
  !<num>           : repeat history entry <num>
  help             : show this message

Command translation:
  Type commands in your chosen dialect (Windows CMD or POSIX shell).
  Common verbs (ls, dir, cp, move, rm, del, cat, ...) are mapped to the
  host OS. Piped commands (using |) are translated stage by stage.
"
    );
}

fn print_history(history: &History) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let skip = history.len().saturating_sub(HISTORY_DISPLAY_LIMIT);
    for (id, line) in history.all().skip(skip) {
        let _ = writeln!(out, "{id}  {line}");
    }
}
