//! Pipeline translator: split on `|`, intercept built-ins, map each stage,
//! reassemble.
//!
//! Splitting is textual — a literal `|` inside quotes is not protected.
//! Intercepted stages are elided from the reassembled command line; an
//! `exit`/`quit` stage stops translation and flags the whole session for
//! teardown.

use crate::builtins::{self, Outcome};
use crate::dialect::Dialect;
use crate::history::History;
use crate::mapper;

/// Result of translating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The reassembled host command. Empty means nothing to execute
    /// (every stage was empty or intercepted).
    pub command: String,
    /// True if a stage requested session teardown.
    pub exit: bool,
}

/// Translate a (possibly piped) line from `source` into the `host` dialect.
///
/// Each non-empty stage is first offered to the built-in dispatcher; the
/// rest go through the mapper and are rejoined with `" | "`. Stage order
/// is preserved.
#[must_use]
pub fn translate(line: &str, source: Dialect, host: Dialect, history: &History) -> Translation {
    let mut command = String::new();
    let mut exit = false;

    for stage in line.split('|') {
        let stage = stage.trim();
        if stage.is_empty() {
            continue;
        }
        match builtins::dispatch(stage, history, host) {
            Outcome::Exit => {
                exit = true;
                break;
            }
            Outcome::Handled => continue,
            Outcome::NotBuiltin => {}
        }
        let mapped = mapper::translate(stage, source, host);
        if !command.is_empty() {
            command.push_str(" | ");
        }
        command.push_str(&mapped);
    }

    Translation { command, exit }
}
