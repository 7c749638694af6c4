//! Interactive session loop.
//!
//! One line per iteration: read, bang-expand, record, translate, execute.
//! Fully synchronous — the next prompt is not shown until the host command
//! finishes. The loop owns its [`History`]; nothing here is global.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::dialect::Dialect;
use crate::exec::{self, FallbackResponder, RunStatus};
use crate::history::History;
use crate::pipeline;

/// One interactive translation session.
pub struct Session<F: FallbackResponder> {
    source: Dialect,
    host: Dialect,
    history: History,
    fallback: F,
}

impl<F: FallbackResponder> Session<F> {
    /// Create a session translating from `source` into `host`.
    pub fn new(source: Dialect, host: Dialect, fallback: F) -> Self {
        Session {
            source,
            host,
            history: History::new(),
            fallback,
        }
    }

    /// Run the read-translate-execute loop until `exit`/`quit` or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on the input or on stdout;
    /// command-level failures are reported inline and never end the loop.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        let mut line = String::new();
        loop {
            print!("{}", self.source.prompt());
            io::stdout().flush().context("flushing prompt")?;

            line.clear();
            if input.read_line(&mut line).context("reading command line")? == 0 {
                println!();
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(note) = control_key_note(trimmed) {
                println!("[Note] {note}");
                continue;
            }

            // Bang references resolve against history before anything else;
            // a failed reference consumes the line without executing it.
            let cmd = if trimmed.starts_with('!') {
                match self.history.expand(trimmed) {
                    Ok(Some(expanded)) => {
                        println!("[Expanded] {expanded}");
                        expanded
                    }
                    Ok(None) => trimmed.to_string(),
                    Err(e) => {
                        println!("{e}.");
                        continue;
                    }
                }
            } else {
                trimmed.to_string()
            };

            self.history.record(&cmd);

            let translation = pipeline::translate(&cmd, self.source, self.host, &self.history);
            if translation.exit {
                break;
            }
            if translation.command.is_empty() {
                continue;
            }
            if is_note(&translation.command) {
                println!("[Note] {}", translation.command);
                continue;
            }

            println!("[Translated] {}", translation.command);
            match exec::run(&translation.command, self.host) {
                RunStatus::Exited(code) => {
                    if code != 0 {
                        tracing::debug!(code, "command exited non-zero");
                    }
                }
                RunStatus::LaunchFailed(err) => {
                    tracing::debug!(%err, "launch failed, consulting fallback");
                    println!("{}", self.fallback.respond(&translation.command, self.host));
                }
            }
        }
        println!("Goodbye.");
        Ok(())
    }
}

/// Print the startup banner.
pub fn print_banner(host: Dialect) {
    println!("unish — universal terminal");
    println!("--------------------------");
    println!("Host dialect: {host}");
    println!("Type commands in your chosen dialect. 'help' lists built-ins; 'exit' quits.");
}

/// Interactively choose the source dialect: `1` = Windows, `2` = POSIX.
/// Invalid entries reprompt.
///
/// # Errors
///
/// Fails if the input closes before a valid choice, or on I/O errors.
pub fn choose_dialect<R: BufRead>(input: &mut R) -> Result<Dialect> {
    let mut line = String::new();
    loop {
        println!("Choose input dialect (the style YOU will type):");
        println!("  1) Windows (cmd)");
        println!("  2) POSIX (bash)");
        print!("Enter 1 or 2: ");
        io::stdout().flush().context("flushing prompt")?;

        line.clear();
        if input.read_line(&mut line).context("reading dialect choice")? == 0 {
            bail!("input closed before a dialect was chosen");
        }
        match line.trim() {
            "1" => return Ok(Dialect::Windows),
            "2" => return Ok(Dialect::Posix),
            _ => println!("Invalid choice. Please enter 1 or 2.\n"),
        }
    }
}

/// True if a translated command is an informational marker rather than
/// something to execute: `rem …` notes and the `true` no-op.
#[must_use]
pub fn is_note(command: &str) -> bool {
    command == "true"
        || command == "rem"
        || command.starts_with("rem ")
        || command.starts_with("true | ")
}

/// Informational responses for literally-typed control-key phrases.
fn control_key_note(line: &str) -> Option<&'static str> {
    match line {
        "CTRL+C" | "CTRL + C" => {
            Some("to interrupt a running process, press Ctrl-C on your keyboard while it runs")
        }
        "CTRL+D" | "CTRL + D" => {
            Some("Ctrl-D sends EOF in UNIX shells; use 'exit' to quit this terminal")
        }
        "CTRL+Z" | "CTRL + Z" => {
            Some("Ctrl-Z suspends a process in UNIX; job control is not translated")
        }
        _ => None,
    }
}
