//! Unish — universal terminal: cross-dialect command translation.
//!
//! Accepts commands typed in one shell dialect (Windows CMD-style or
//! POSIX-style), rewrites them into the host shell's dialect, and executes
//! them. Keeps a bounded session history with `!!`/`!n` recall; piped
//! commands are translated stage by stage.
//!
//! # Modules
//!
//! - [`dialect`] — source/host dialect identification
//! - [`tokenizer`] — verb/remainder splitting for one stage
//! - [`mapper`] — declarative per-direction mapping tables
//! - [`pipeline`] — pipe splitting, built-in interception, reassembly
//! - [`builtins`] — session-control verbs (`help`, `exit`, `history`, ...)
//! - [`history`] — bounded store with stable IDs and bang-expansion
//! - [`exec`] — host shell execution and the pluggable fallback responder
//! - [`session`] — the interactive read-translate-execute loop

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
// Targeted pedantic allows — each justified:
#![allow(clippy::must_use_candidate)] // pure getters everywhere; noise
#![allow(clippy::missing_errors_doc)] // error conditions documented where non-obvious

pub mod builtins;
pub mod dialect;
pub mod exec;
pub mod history;
pub mod mapper;
pub mod pipeline;
pub mod session;
pub mod tokenizer;
