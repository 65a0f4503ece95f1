//! Session history.
//!
//! The browser owns the real history stack; [`History`] is the seam the
//! router context drives it through. [`MemoryHistory`] keeps the stack in
//! process and backs the shell binary and the tests.

use uuid::Uuid;

/// One entry on the history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Correlates log lines for a single navigation.
    pub id: Uuid,
    /// Full address, base path included.
    pub location: String,
}

impl HistoryEntry {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            location: location.into(),
        }
    }
}

/// A host history mechanism.
pub trait History: std::fmt::Debug {
    /// The entry currently displayed.
    fn current(&self) -> &HistoryEntry;

    /// Add an entry after the current one, discarding forward entries.
    fn push(&mut self, location: String) -> &HistoryEntry;

    /// Overwrite the current entry.
    fn replace(&mut self, location: String) -> &HistoryEntry;

    /// Move `delta` entries back (negative) or forward (positive).
    ///
    /// Returns `None`, without moving, when the target is out of range.
    fn go(&mut self, delta: isize) -> Option<&HistoryEntry>;

    /// Number of entries on the stack.
    fn len(&self) -> usize;

    /// Always `false` for a well-formed history, which keeps at least the
    /// initial entry.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the current entry.
    fn position(&self) -> usize;
}

/// In-process history stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    position: usize,
}

impl MemoryHistory {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial)],
            position: 0,
        }
    }

    /// Locations from oldest to newest.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.location.as_str())
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &HistoryEntry {
        &self.entries[self.position]
    }

    fn push(&mut self, location: String) -> &HistoryEntry {
        self.entries.truncate(self.position + 1);
        self.entries.push(HistoryEntry::new(location));
        self.position = self.entries.len() - 1;
        &self.entries[self.position]
    }

    fn replace(&mut self, location: String) -> &HistoryEntry {
        self.entries[self.position] = HistoryEntry::new(location);
        &self.entries[self.position]
    }

    fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.position = target;
        Some(&self.entries[target])
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_go() {
        let mut history = MemoryHistory::new("/");
        history.push("/project/1".to_string());
        history.push("/project/2".to_string());
        assert_eq!(history.len(), 3);
        assert_eq!(history.position(), 2);

        assert_eq!(history.go(-1).unwrap().location, "/project/1");
        assert_eq!(history.go(-1).unwrap().location, "/");
        assert!(history.go(-1).is_none());
        assert_eq!(history.position(), 0);

        assert_eq!(history.go(2).unwrap().location, "/project/2");
        assert!(history.go(1).is_none());
    }

    #[test]
    fn test_never_empty() {
        let mut history = MemoryHistory::new("/");
        assert!(!history.is_empty());
        history.replace("/project/1".to_string());
        assert!(!history.is_empty());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/project/1".to_string());
        history.go(-1);
        history.push("/projectbook/9".to_string());

        assert_eq!(
            history.locations().collect::<Vec<_>>(),
            vec!["/", "/projectbook/9"]
        );
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new("/");
        let first = history.current().id;
        history.replace("/project/0".to_string());

        assert_eq!(history.len(), 1);
        assert_eq!(history.current().location, "/project/0");
        assert_ne!(history.current().id, first);
    }
}
