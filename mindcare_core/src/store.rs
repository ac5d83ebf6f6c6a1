//! In-memory, append-only mood log.
//!
//! Entries live for the lifetime of one session. There is no edit or
//! delete path, and insertion order is the only ordering.

use crate::MoodEntry;

/// Ordered collection of mood entries owned by one session
#[derive(Clone, Debug, Default)]
pub struct EntryStore {
    entries: Vec<MoodEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    ///
    /// Bounds are not checked here; callers are expected to have run
    /// [`MoodEntry::check_bounds`] (or enforce the ranges in their input widgets).
    pub fn append(&mut self, entry: MoodEntry) {
        tracing::debug!(
            "Appending entry for {} (mood rank {})",
            entry.date,
            entry.mood.rank()
        );
        self.entries.push(entry);
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// The most recently appended entry
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> &[MoodEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}
