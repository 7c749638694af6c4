//! Stage tokenizer: split a command stage into verb and remainder.
//!
//! Byte-oriented scanning over the input, zero-copy — both halves are
//! slices of the original line.

/// Maximum remainder length in bytes. Longer remainders are silently
/// truncated at a character boundary, matching fixed-buffer behavior.
pub const MAX_REMAINDER: usize = 8192;

/// Split a stage into its leading verb and the remainder.
///
/// The verb is the first whitespace-delimited token. A verb wrapped in
/// single or double quotes keeps everything up to the matching close quote
/// (quotes stripped); an unterminated quote runs to end of input. The
/// remainder is everything after the verb, left-trimmed.
///
/// Empty or all-whitespace input yields `("", "")` — callers treat an
/// empty verb as "no stage".
///
/// # Examples
///
/// ```
/// assert_eq!(unish::tokenizer::split("ls -la /tmp"), ("ls", "-la /tmp"));
/// assert_eq!(unish::tokenizer::split("'my prog' arg"), ("my prog", "arg"));
/// ```
#[must_use]
pub fn split(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i >= bytes.len() {
        return ("", "");
    }

    let (verb_start, verb_end, mut after);
    if bytes[i] == b'\'' || bytes[i] == b'"' {
        let quote = bytes[i];
        i += 1;
        verb_start = i;
        while i < bytes.len() && bytes[i] != quote {
            i += 1;
        }
        verb_end = i;
        after = if i < bytes.len() { i + 1 } else { i };
    } else {
        verb_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        verb_end = i;
        after = i;
    }

    while after < bytes.len() && bytes[after].is_ascii_whitespace() {
        after += 1;
    }

    (
        &line[verb_start..verb_end],
        truncate_at_boundary(&line[after..], MAX_REMAINDER),
    )
}

/// Truncate `s` to at most `max` bytes without splitting a character.
fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
