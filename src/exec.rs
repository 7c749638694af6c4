//! Host execution collaborators: run a translated command line through the
//! host shell, clear the screen, and answer for commands the host cannot
//! even launch.
//!
//! The fallback responder is a seam for an external assistant backend; the
//! shipped implementation is a canned notice.

use std::process::{Command, Stdio};

use crate::dialect::Dialect;

/// How a dispatched command line fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The host shell ran the command; this is its exit code.
    Exited(i32),
    /// The host shell itself could not be started.
    LaunchFailed(String),
}

/// Run a full command line through the host shell with inherited stdio.
///
/// Windows hosts get `cmd /C`, everything else `sh -c` — both understand
/// pipe syntax natively, so the reassembled pipeline is passed whole.
/// A non-zero exit code is reported, never escalated.
pub fn run(command: &str, host: Dialect) -> RunStatus {
    let mut shell = match host {
        Dialect::Windows => {
            let mut c = Command::new("cmd");
            c.args(["/C", command]);
            c
        }
        Dialect::Posix => {
            let mut c = Command::new("sh");
            c.args(["-c", command]);
            c
        }
    };

    match shell
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
    {
        Ok(status) => RunStatus::Exited(status.code().unwrap_or(1)),
        Err(e) => RunStatus::LaunchFailed(e.to_string()),
    }
}

/// Clear the host screen. Failure is ignored — a miss here is cosmetic.
pub fn clear_screen(host: Dialect) {
    let command = match host {
        Dialect::Windows => "cls",
        Dialect::Posix => "clear",
    };
    let _ = run(command, host);
}

/// Collaborator consulted when the host cannot launch a command at all.
pub trait FallbackResponder {
    /// Produce a user-facing response for the failed `query`.
    fn respond(&self, query: &str, host: Dialect) -> String;
}

/// Stub responder: a canned notice, no backend behind it.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedFallback;

impl FallbackResponder for CannedFallback {
    fn respond(&self, query: &str, _host: Dialect) -> String {
        format!("Unrecognized command '{query}' — no assistant backend is configured.")
    }
}
