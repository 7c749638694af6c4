//! Dialect mapper: rewrite one stage from the source dialect into the host's.
//!
//! The catalog is data, not control flow: each direction has an ordered
//! table of [`Rule`] records (verb + remainder predicate + action) walked
//! by one generic dispatch loop. The first rule whose verb and predicate
//! both match wins; rules for the same verb are listed most-specific
//! first. Anything unlisted passes through verbatim — translation is
//! total and never fails.
//!
//! Verb matching is case-insensitive. Remainder matching is not: flag
//! predicates search the raw remainder, so `/PID` and `/pid` differ.

use crate::dialect::Dialect;
use crate::tokenizer;

/// Remainder predicate attached to a rule.
enum Pred {
    /// Fires unconditionally.
    Always,
    /// Remainder is empty.
    Empty,
    /// Remainder is non-empty.
    NonEmpty,
    /// Remainder contains the literal substring (case-sensitive).
    Contains(&'static str),
    /// Every listed short flag appears in some single-dash cluster:
    /// `la` matches `-la`, `-l -a`, and `-al`, but not `--la`.
    HasFlags(&'static str),
}

impl Pred {
    fn matches(&self, rest: &str) -> bool {
        match self {
            Pred::Always => true,
            Pred::Empty => rest.is_empty(),
            Pred::NonEmpty => !rest.is_empty(),
            Pred::Contains(needle) => rest.contains(needle),
            Pred::HasFlags(flags) => flags.chars().all(|f| has_short_flag(rest, f)),
        }
    }
}

/// What a fired rule emits.
enum Action {
    /// Replace the verb; the remainder is appended unchanged.
    Sub(&'static str),
    /// Emit a fixed command, discarding the remainder.
    Fixed(&'static str),
    /// Build the output from the remainder.
    Rewrite(fn(&str) -> String),
}

impl Action {
    fn apply(&self, rest: &str) -> String {
        match self {
            Action::Sub(prefix) => {
                if rest.is_empty() {
                    (*prefix).to_string()
                } else {
                    format!("{prefix} {rest}")
                }
            }
            Action::Fixed(out) => (*out).to_string(),
            Action::Rewrite(f) => f(rest),
        }
    }
}

/// One mapping rule: lowercased verb, remainder predicate, output action.
struct Rule {
    verb: &'static str,
    pred: Pred,
    action: Action,
}

const fn rule(verb: &'static str, pred: Pred, action: Action) -> Rule {
    Rule { verb, pred, action }
}

/// Translate one stage from `source` into the `host` dialect.
///
/// Identity when the dialects already agree. Unlisted verbs pass through
/// verbatim. Informational rewrites come back as note markers (`rem …`
/// text, or the no-op `true`) that the session layer prints instead of
/// executing.
#[must_use]
pub fn translate(stage: &str, source: Dialect, host: Dialect) -> String {
    if source == host {
        return stage.to_string();
    }

    let (verb, rest) = tokenizer::split(stage);
    if verb.is_empty() {
        return stage.to_string();
    }
    let verb_lc = verb.to_ascii_lowercase();

    let table: &[Rule] = match source {
        Dialect::Posix => POSIX_TO_WINDOWS,
        Dialect::Windows => WINDOWS_TO_POSIX,
    };

    for r in table {
        if r.verb == verb_lc && r.pred.matches(rest) {
            let out = r.action.apply(rest);
            tracing::debug!(stage, translated = %out, "mapped stage");
            return out;
        }
    }

    tracing::debug!(stage, "no mapping rule, passing through");
    stage.to_string()
}

/// True if any single-dash cluster in `rest` carries `flag`.
fn has_short_flag(rest: &str, flag: char) -> bool {
    rest.split_whitespace().any(|tok| {
        tok.len() >= 2 && tok.starts_with('-') && !tok.starts_with("--") && tok[1..].contains(flag)
    })
}

// ---------------------------------------------------------------------------
// Remainder rewrites
// ---------------------------------------------------------------------------

/// `rm -rf dir` → `rmdir /s /q dir` — flag tokens stripped from the target.
fn rm_recursive(rest: &str) -> String {
    let target: Vec<&str> = rest
        .split_whitespace()
        .filter(|t| !t.starts_with('-'))
        .collect();
    if target.is_empty() {
        "rmdir /s /q".to_string()
    } else {
        format!("rmdir /s /q {}", target.join(" "))
    }
}

fn touch_file(rest: &str) -> String {
    format!("type nul > {}", rest.trim())
}

fn head_to_powershell(rest: &str) -> String {
    let count = flag_number(rest, "-n").unwrap_or(10);
    match file_operand(rest) {
        Some(file) => format!("powershell -Command \"Get-Content {file} -TotalCount {count}\""),
        None => "more".to_string(),
    }
}

fn tail_to_powershell(rest: &str) -> String {
    if rest.contains("-f") || rest.contains("-F") {
        let file = file_operand(rest).unwrap_or("");
        return format!("powershell -Command \"Get-Content {file} -Wait\"");
    }
    if let (Some(n), Some(file)) = (flag_number(rest, "-n"), file_operand(rest)) {
        return format!("powershell -Command \"Get-Content {file} -Tail {n}\"");
    }
    format!("powershell -Command \"Get-Content {} -Tail 10\"", rest.trim())
}

fn du_to_powershell(rest: &str) -> String {
    format!(
        "powershell -Command \"(Get-ChildItem -Recurse {} | Measure-Object -Property Length -Sum).Sum\"",
        rest.trim()
    )
}

fn zip_to_powershell(rest: &str) -> String {
    format!("powershell -Command \"Compress-Archive -Path {}\"", rest.trim())
}

fn unzip_to_powershell(rest: &str) -> String {
    format!("powershell -Command \"Expand-Archive -Path {}\"", rest.trim())
}

/// `kill -9 1234` → `taskkill /PID 1234 /F`.
fn kill_force(rest: &str) -> String {
    let pid = rest.split_whitespace().find(|t| *t != "-9").unwrap_or("");
    format!("taskkill /PID {pid} /F")
}

fn kill_pid(rest: &str) -> String {
    format!("taskkill /PID {}", rest.trim())
}

/// Drop the `sudo` wrapper — there is no direct elevation equivalent.
fn strip_sudo(rest: &str) -> String {
    rest.trim().to_string()
}

/// `taskkill /PID 1234 /F` → `kill -9 1234`.
fn taskkill_to_kill(rest: &str) -> String {
    let mut toks = rest.split_whitespace();
    while let Some(tok) = toks.next() {
        if tok == "/PID" {
            if let Some(pid) = toks.next() {
                return format!("kill -9 {pid}");
            }
        }
    }
    format!("rem cannot map taskkill: check args {}", rest.trim())
}

/// Unwrap `powershell -Command …` down to the raw remainder.
fn unwrap_powershell(rest: &str) -> String {
    rest.to_string()
}

/// Value following a numeric flag: `-n 5` or `-n5`.
fn flag_number(rest: &str, flag: &str) -> Option<u32> {
    let mut toks = rest.split_whitespace();
    while let Some(tok) = toks.next() {
        if tok == flag {
            return toks.next()?.parse().ok();
        }
        if let Some(v) = tok.strip_prefix(flag) {
            if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) {
                return v.parse().ok();
            }
        }
    }
    None
}

/// Last token that is neither a flag nor a flag value — the file argument.
fn file_operand(rest: &str) -> Option<&str> {
    let mut file = None;
    let mut skip_next = false;
    for tok in rest.split_whitespace() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if tok == "-n" {
            skip_next = true;
            continue;
        }
        if tok.starts_with('-') {
            continue;
        }
        file = Some(tok);
    }
    file
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

static POSIX_TO_WINDOWS: &[Rule] = &[
    rule("pwd", Pred::Always, Action::Fixed("cd")),
    rule("ls", Pred::HasFlags("la"), Action::Sub("dir /a /q")),
    rule("ls", Pred::HasFlags("l"), Action::Sub("dir")),
    rule("ls", Pred::HasFlags("a"), Action::Sub("dir /a")),
    rule("ls", Pred::Always, Action::Sub("dir")),
    rule("mkdir", Pred::Always, Action::Sub("mkdir")),
    rule("rmdir", Pred::Always, Action::Sub("rmdir")),
    rule("rm", Pred::HasFlags("r"), Action::Rewrite(rm_recursive)),
    rule("rm", Pred::Always, Action::Sub("del")),
    rule("touch", Pred::NonEmpty, Action::Rewrite(touch_file)),
    rule("touch", Pred::Empty, Action::Fixed("rem touch: missing filename")),
    rule("cp", Pred::Always, Action::Sub("copy")),
    rule("mv", Pred::Always, Action::Sub("move")),
    rule("cat", Pred::Always, Action::Sub("type")),
    rule("less", Pred::Always, Action::Sub("more")),
    rule("more", Pred::Always, Action::Sub("more")),
    rule("head", Pred::NonEmpty, Action::Rewrite(head_to_powershell)),
    rule("head", Pred::Empty, Action::Fixed("more")),
    rule("tail", Pred::NonEmpty, Action::Rewrite(tail_to_powershell)),
    rule("tail", Pred::Empty, Action::Fixed("more")),
    rule(
        "chmod",
        Pred::Always,
        Action::Sub("rem chmod not supported on Windows; use icacls or powershell Set-Acl"),
    ),
    rule(
        "chown",
        Pred::Always,
        Action::Sub("rem chown not supported on Windows; use icacls"),
    ),
    rule("whoami", Pred::Always, Action::Fixed("whoami")),
    rule("uname", Pred::Always, Action::Sub("systeminfo")),
    rule("hostname", Pred::Always, Action::Fixed("hostname")),
    rule("date", Pred::Always, Action::Fixed("date /t")),
    rule("uptime", Pred::Always, Action::Fixed("net statistics workstation")),
    rule(
        "df",
        Pred::Always,
        Action::Fixed("wmic logicaldisk get caption,freespace,size"),
    ),
    rule("du", Pred::NonEmpty, Action::Rewrite(du_to_powershell)),
    rule("du", Pred::Empty, Action::Fixed("rem du needs directory")),
    rule(
        "free",
        Pred::Always,
        Action::Fixed("systeminfo | findstr /C:\"Total Physical Memory\" /C:\"Available\""),
    ),
    rule("top", Pred::Always, Action::Fixed("tasklist")),
    rule("htop", Pred::Always, Action::Fixed("tasklist")),
    rule("ps", Pred::Contains("aux"), Action::Fixed("tasklist")),
    rule("ps", Pred::Always, Action::Sub("tasklist")),
    rule("kill", Pred::Contains("-9"), Action::Rewrite(kill_force)),
    rule("kill", Pred::Always, Action::Rewrite(kill_pid)),
    rule(
        "jobs",
        Pred::Always,
        Action::Sub("rem job control not supported on Windows; use powershell background jobs"),
    ),
    rule(
        "fg",
        Pred::Always,
        Action::Sub("rem job control not supported on Windows; use powershell background jobs"),
    ),
    rule(
        "bg",
        Pred::Always,
        Action::Sub("rem job control not supported on Windows; use powershell background jobs"),
    ),
    rule("ping", Pred::Always, Action::Sub("ping")),
    rule("curl", Pred::Always, Action::Sub("curl")),
    rule("wget", Pred::Always, Action::Sub("curl -O")),
    rule("ifconfig", Pred::Always, Action::Fixed("ipconfig /all")),
    rule("ip", Pred::Contains("addr"), Action::Fixed("ipconfig /all")),
    rule("netstat", Pred::Always, Action::Sub("netstat -ano")),
    rule("ssh", Pred::Always, Action::Sub("ssh")),
    rule("scp", Pred::Always, Action::Sub("scp")),
    rule("sudo", Pred::NonEmpty, Action::Rewrite(strip_sudo)),
    rule("sudo", Pred::Empty, Action::Fixed("rem sudo with no command")),
    rule(
        "apt",
        Pred::Always,
        Action::Sub("rem package managers are not supported on Windows; consider WSL"),
    ),
    rule(
        "dnf",
        Pred::Always,
        Action::Sub("rem package managers are not supported on Windows; consider WSL"),
    ),
    rule(
        "pacman",
        Pred::Always,
        Action::Sub("rem package managers are not supported on Windows; consider WSL"),
    ),
    rule(
        "adduser",
        Pred::Always,
        Action::Sub("rem user management must be done via Control Panel or net user"),
    ),
    rule(
        "passwd",
        Pred::Always,
        Action::Sub("rem user management must be done via Control Panel or net user"),
    ),
    rule(
        "su",
        Pred::Always,
        Action::Sub("rem user management must be done via Control Panel or net user"),
    ),
    rule("who", Pred::Always, Action::Sub("whoami")),
    rule("id", Pred::Always, Action::Sub("whoami")),
    rule("groups", Pred::Always, Action::Sub("whoami")),
    rule("tar", Pred::Always, Action::Sub("tar")),
    rule("zip", Pred::Always, Action::Rewrite(zip_to_powershell)),
    rule("unzip", Pred::Always, Action::Rewrite(unzip_to_powershell)),
    rule("clear", Pred::Always, Action::Fixed("cls")),
];

static WINDOWS_TO_POSIX: &[Rule] = &[
    rule("dir", Pred::Always, Action::Sub("ls")),
    rule("type", Pred::Always, Action::Sub("cat")),
    rule("copy", Pred::Always, Action::Sub("cp")),
    rule("move", Pred::Always, Action::Sub("mv")),
    rule("del", Pred::Always, Action::Sub("rm")),
    rule("erase", Pred::Always, Action::Sub("rm")),
    rule("rmdir", Pred::Always, Action::Sub("rm -r")),
    rule("mkdir", Pred::Always, Action::Sub("mkdir")),
    rule("cls", Pred::Always, Action::Fixed("clear")),
    rule("whoami", Pred::Always, Action::Fixed("whoami")),
    rule("systeminfo", Pred::Always, Action::Sub("uname -a")),
    rule("hostname", Pred::Always, Action::Fixed("hostname")),
    rule("date", Pred::Always, Action::Fixed("date")),
    rule("netstat", Pred::Always, Action::Sub("netstat -tulnp")),
    rule("tasklist", Pred::Always, Action::Sub("ps aux")),
    rule("taskkill", Pred::Contains("/PID"), Action::Rewrite(taskkill_to_kill)),
    rule(
        "taskkill",
        Pred::Always,
        Action::Sub("rem cannot map taskkill: check args"),
    ),
    rule("ipconfig", Pred::Always, Action::Sub("ifconfig")),
    rule("ping", Pred::Always, Action::Sub("ping")),
    rule("curl", Pred::Always, Action::Sub("curl")),
    rule("ssh", Pred::Always, Action::Sub("ssh")),
    rule("scp", Pred::Always, Action::Sub("scp")),
    rule("tar", Pred::Always, Action::Sub("tar")),
    rule("powershell", Pred::Always, Action::Rewrite(unwrap_powershell)),
    rule("wmic", Pred::Always, Action::Sub("df -h")),
    rule("rem", Pred::Always, Action::Fixed("true")),
    rule("start", Pred::Always, Action::Sub("xdg-open")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect::{Posix, Windows};

    #[test]
    fn identity_when_dialects_agree() {
        let line = "ls -la | weird stuff $$";
        assert_eq!(translate(line, Posix, Posix), line);
        assert_eq!(translate(line, Windows, Windows), line);
    }

    #[test]
    fn verb_matching_is_case_insensitive() {
        assert_eq!(translate("LS", Posix, Windows), translate("ls", Posix, Windows));
        assert_eq!(translate("DeL f.txt", Windows, Posix), "rm f.txt");
    }

    #[test]
    fn unmapped_verbs_pass_through_verbatim() {
        assert_eq!(translate("grep foo", Posix, Windows), "grep foo");
        assert_eq!(translate("findstr foo", Windows, Posix), "findstr foo");
        assert!(!translate("nonsense --xyz", Posix, Windows).is_empty());
    }

    #[test]
    fn ls_flag_combinations() {
        assert_eq!(translate("ls", Posix, Windows), "dir");
        assert_eq!(translate("ls -l", Posix, Windows), "dir -l");
        assert_eq!(translate("ls -a", Posix, Windows), "dir /a -a");
        assert_eq!(translate("ls -la", Posix, Windows), "dir /a /q -la");
        assert_eq!(translate("ls -l -a /tmp", Posix, Windows), "dir /a /q -l -a /tmp");
    }

    #[test]
    fn pwd_maps_to_cd() {
        assert_eq!(translate("pwd", Posix, Windows), "cd");
    }

    #[test]
    fn rm_recursive_strips_flags() {
        assert_eq!(translate("rm -rf build", Posix, Windows), "rmdir /s /q build");
        assert_eq!(translate("rm -r a b", Posix, Windows), "rmdir /s /q a b");
        assert_eq!(translate("rm file.txt", Posix, Windows), "del file.txt");
    }

    #[test]
    fn touch_needs_filename() {
        assert_eq!(translate("touch new.txt", Posix, Windows), "type nul > new.txt");
        assert_eq!(translate("touch", Posix, Windows), "rem touch: missing filename");
    }

    #[test]
    fn direct_verb_substitutions() {
        assert_eq!(translate("cp a b", Posix, Windows), "copy a b");
        assert_eq!(translate("mv a b", Posix, Windows), "move a b");
        assert_eq!(translate("cat f", Posix, Windows), "type f");
        assert_eq!(translate("clear", Posix, Windows), "cls");
    }

    #[test]
    fn head_and_tail_rewrites() {
        assert_eq!(
            translate("head -n 5 log.txt", Posix, Windows),
            "powershell -Command \"Get-Content log.txt -TotalCount 5\""
        );
        assert_eq!(
            translate("head log.txt", Posix, Windows),
            "powershell -Command \"Get-Content log.txt -TotalCount 10\""
        );
        assert_eq!(
            translate("tail -f log.txt", Posix, Windows),
            "powershell -Command \"Get-Content log.txt -Wait\""
        );
        assert_eq!(
            translate("tail -n 20 log.txt", Posix, Windows),
            "powershell -Command \"Get-Content log.txt -Tail 20\""
        );
    }

    #[test]
    fn kill_maps_to_taskkill() {
        assert_eq!(translate("kill -9 4242", Posix, Windows), "taskkill /PID 4242 /F");
        assert_eq!(translate("kill 4242", Posix, Windows), "taskkill /PID 4242");
    }

    #[test]
    fn sudo_is_stripped() {
        assert_eq!(translate("sudo rm file", Posix, Windows), "rm file");
        assert_eq!(translate("sudo", Posix, Windows), "rem sudo with no command");
    }

    #[test]
    fn wget_becomes_curl() {
        assert_eq!(translate("wget http://x/y", Posix, Windows), "curl -O http://x/y");
    }

    #[test]
    fn notes_for_unsupported_verbs() {
        assert!(translate("chmod +x f", Posix, Windows).starts_with("rem "));
        assert!(translate("apt install x", Posix, Windows).starts_with("rem "));
        assert!(translate("jobs", Posix, Windows).starts_with("rem "));
    }

    #[test]
    fn windows_verb_substitutions() {
        assert_eq!(translate("dir c:\\", Windows, Posix), "ls c:\\");
        assert_eq!(translate("del myfile.txt", Windows, Posix), "rm myfile.txt");
        assert_eq!(translate("erase a.txt", Windows, Posix), "rm a.txt");
        assert_eq!(translate("copy a b", Windows, Posix), "cp a b");
        assert_eq!(translate("move a b", Windows, Posix), "mv a b");
        assert_eq!(translate("type f", Windows, Posix), "cat f");
        assert_eq!(translate("cls", Windows, Posix), "clear");
        assert_eq!(translate("rmdir build", Windows, Posix), "rm -r build");
        assert_eq!(translate("mkdir d", Windows, Posix), "mkdir d");
    }

    #[test]
    fn taskkill_extracts_pid() {
        assert_eq!(translate("taskkill /PID 512 /F", Windows, Posix), "kill -9 512");
        // Case-sensitive remainder match — lowercase /pid falls to the note.
        assert!(translate("taskkill /pid 512", Windows, Posix).starts_with("rem "));
        assert!(translate("taskkill /IM app.exe", Windows, Posix).starts_with("rem "));
    }

    #[test]
    fn rem_becomes_noop_marker() {
        assert_eq!(translate("rem this is a note", Windows, Posix), "true");
    }

    #[test]
    fn powershell_wrapper_unwrapped() {
        assert_eq!(translate("powershell Get-Date", Windows, Posix), "Get-Date");
    }

    #[test]
    fn start_becomes_xdg_open() {
        assert_eq!(translate("start report.pdf", Windows, Posix), "xdg-open report.pdf");
    }

    #[test]
    fn ip_addr_maps_only_with_addr() {
        assert_eq!(translate("ip addr show", Posix, Windows), "ipconfig /all");
        assert_eq!(translate("ip route", Posix, Windows), "ip route");
    }

    #[test]
    fn ps_aux_collapses() {
        assert_eq!(translate("ps aux", Posix, Windows), "tasklist");
        assert_eq!(translate("ps -e", Posix, Windows), "tasklist -e");
    }

    #[test]
    fn quoted_verb_is_matched_unquoted() {
        assert_eq!(translate("'ls' -l", Posix, Windows), "dir -l");
    }
}
