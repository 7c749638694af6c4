//! Shell dialect identification.
//!
//! A dialect names a command-verb convention, not a shell binary: `dir`,
//! `copy`, `del` belong to [`Dialect::Windows`]; `ls`, `cp`, `rm` to
//! [`Dialect::Posix`]. The user picks the dialect they type in once per
//! session; the host dialect is fixed at compile time.

use std::fmt;

/// A command-syntax convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Windows CMD verbs: `dir`, `copy`, `del`, `cls`, ...
    Windows,
    /// POSIX shell verbs: `ls`, `cp`, `rm`, `clear`, ...
    Posix,
}

impl Dialect {
    /// The dialect the host shell natively understands.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Dialect::Windows
        } else {
            Dialect::Posix
        }
    }

    /// Prompt shown when reading a command typed in this dialect.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Dialect::Windows => "cmd> ",
            Dialect::Posix => "bash> ",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Windows => write!(f, "Windows (cmd)"),
            Dialect::Posix => write!(f, "POSIX (sh)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_matches_platform() {
        if cfg!(windows) {
            assert_eq!(Dialect::host(), Dialect::Windows);
        } else {
            assert_eq!(Dialect::host(), Dialect::Posix);
        }
    }

    #[test]
    fn prompts_differ() {
        assert_eq!(Dialect::Windows.prompt(), "cmd> ");
        assert_eq!(Dialect::Posix.prompt(), "bash> ");
    }
}
