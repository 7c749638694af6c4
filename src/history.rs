//! Bounded session history with `!!`/`!n` recall.
//!
//! Each recorded line gets a stable, monotonically increasing 1-based ID.
//! The store is a bounded ring: on overflow the oldest entry is evicted,
//! but surviving entries keep their IDs — `!n` and the `history` listing
//! always agree on numbering, even after eviction.

use std::collections::VecDeque;

use thiserror::Error;

/// Default number of entries retained per session.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Failure to resolve a history reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecallError {
    /// No entries have been recorded yet.
    #[error("history is empty")]
    Empty,
    /// The requested ID was never assigned, or its entry was evicted.
    #[error("no such history entry")]
    NoSuchEntry,
}

/// One stored line with its session-stable ID.
#[derive(Debug, Clone)]
struct Entry {
    id: u64,
    line: String,
}

/// Append-only bounded store of past input lines.
///
/// Owned by the session — never a process-wide global. Not safe to share
/// across threads unsynchronized; concurrent sessions each own their own.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<Entry>,
    capacity: usize,
    next_id: u64,
}

impl History {
    /// Create an empty store with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store retaining at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    /// Record a line and return its assigned ID.
    ///
    /// Empty (or all-whitespace) lines are ignored and return `None`.
    /// On overflow the oldest entry is evicted; IDs are never reused.
    pub fn record(&mut self, line: &str) -> Option<u64> {
        if line.trim().is_empty() {
            return None;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Entry {
            id,
            line: line.to_string(),
        });
        Some(id)
    }

    /// Look up an entry by its stable ID.
    ///
    /// # Errors
    ///
    /// [`RecallError::Empty`] if nothing has been recorded;
    /// [`RecallError::NoSuchEntry`] if `id` is out of range or evicted.
    pub fn recall(&self, id: u64) -> Result<&str, RecallError> {
        let first = self.entries.front().ok_or(RecallError::Empty)?.id;
        if id < first || id >= self.next_id {
            return Err(RecallError::NoSuchEntry);
        }
        // IDs are dense, so position follows directly from the offset.
        let index = usize::try_from(id - first).map_err(|_| RecallError::NoSuchEntry)?;
        Ok(&self.entries[index].line)
    }

    /// The most recently recorded line.
    ///
    /// # Errors
    ///
    /// [`RecallError::Empty`] if nothing has been recorded.
    pub fn recall_last(&self) -> Result<&str, RecallError> {
        self.entries
            .back()
            .map(|e| e.line.as_str())
            .ok_or(RecallError::Empty)
    }

    /// All surviving entries as `(id, line)` pairs, oldest first.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = (u64, &str)> + ExactSizeIterator + '_ {
        self.entries.iter().map(|e| (e.id, e.line.as_str()))
    }

    /// Number of surviving entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded (or everything was evicted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a bang reference against the store.
    ///
    /// `!!` resolves to the most recent entry; `!<digits>` to the entry
    /// with that ID. Returns `Ok(None)` when `line` is neither form —
    /// the caller should use the line unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`RecallError`] when the reference cannot be resolved;
    /// a numeric reference too large to parse counts as no such entry.
    pub fn expand(&self, line: &str) -> Result<Option<String>, RecallError> {
        if line == "!!" {
            return self.recall_last().map(|s| Some(s.to_string()));
        }
        if let Some(digits) = line.strip_prefix('!') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                let id: u64 = digits.parse().map_err(|_| RecallError::NoSuchEntry)?;
                return self.recall(id).map(|s| Some(s.to_string()));
            }
        }
        Ok(None)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_assigns_sequential_ids() {
        let mut h = History::new();
        assert_eq!(h.record("ls -l"), Some(1));
        assert_eq!(h.record("pwd"), Some(2));
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn empty_lines_ignored() {
        let mut h = History::new();
        assert_eq!(h.record(""), None);
        assert_eq!(h.record("   "), None);
        assert!(h.is_empty());
    }

    #[test]
    fn recall_by_id() {
        let mut h = History::new();
        h.record("ls -l");
        h.record("pwd");
        assert_eq!(h.recall(1), Ok("ls -l"));
        assert_eq!(h.recall(2), Ok("pwd"));
        assert_eq!(h.recall(5), Err(RecallError::NoSuchEntry));
        assert_eq!(h.recall(0), Err(RecallError::NoSuchEntry));
    }

    #[test]
    fn recall_on_empty_store() {
        let h = History::new();
        assert_eq!(h.recall(1), Err(RecallError::Empty));
        assert_eq!(h.recall_last(), Err(RecallError::Empty));
    }

    #[test]
    fn bounded_growth_evicts_oldest() {
        let mut h = History::with_capacity(3);
        for i in 1..=5 {
            h.record(&format!("cmd{i}"));
        }
        assert_eq!(h.len(), 3);
        // Oldest survivor is the 3rd ever recorded, still under its own ID.
        let ids: Vec<u64> = h.all().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(h.recall(3), Ok("cmd3"));
    }

    #[test]
    fn evicted_ids_are_gone_not_renumbered() {
        let mut h = History::with_capacity(2);
        h.record("a");
        h.record("b");
        h.record("c");
        assert_eq!(h.recall(1), Err(RecallError::NoSuchEntry));
        assert_eq!(h.recall(2), Ok("b"));
        assert_eq!(h.recall(3), Ok("c"));
    }

    #[test]
    fn bang_bang_resolves_to_last() {
        let mut h = History::new();
        h.record("ls -l");
        h.record("pwd");
        assert_eq!(h.expand("!!"), Ok(Some("pwd".to_string())));
    }

    #[test]
    fn bang_n_resolves_by_id() {
        let mut h = History::new();
        h.record("ls -l");
        h.record("pwd");
        assert_eq!(h.expand("!1"), Ok(Some("ls -l".to_string())));
        assert_eq!(h.expand("!5"), Err(RecallError::NoSuchEntry));
    }

    #[test]
    fn bang_on_empty_history() {
        let h = History::new();
        assert_eq!(h.expand("!!"), Err(RecallError::Empty));
        assert_eq!(h.expand("!1"), Err(RecallError::Empty));
    }

    #[test]
    fn non_numeric_bang_passes_through() {
        let mut h = History::new();
        h.record("ls");
        assert_eq!(h.expand("!foo"), Ok(None));
        assert_eq!(h.expand("!2x"), Ok(None));
        assert_eq!(h.expand("plain"), Ok(None));
    }

    #[test]
    fn huge_bang_number_is_no_such_entry() {
        let mut h = History::new();
        h.record("ls");
        assert_eq!(
            h.expand("!99999999999999999999999999"),
            Err(RecallError::NoSuchEntry)
        );
    }
}
