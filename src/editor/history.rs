use std::collections::VecDeque;

use super::Cursor;

/// Default capacity of the undo stack
pub const DEFAULT_CAPACITY: usize = 100;

/// Full copy of the document and cursor, captured immediately before a
/// mutating operation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub rows: Vec<String>,
    pub cursor: Cursor,
}

/// Bounded snapshot stack: LIFO restore from the top, FIFO eviction at
/// the bottom once the capacity is reached.
///
/// A snapshot is pushed before *every* mutating operation, including
/// ones that turn out to be no-ops; a no-op still consumes a slot and
/// can evict an older real edit. That behavior is observable and kept.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    /// Create a history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a history with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a snapshot, evicting the oldest entry when full
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Pop the most recent snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
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

    fn snapshot(tag: usize) -> Snapshot {
        Snapshot {
            rows: vec![tag.to_string()],
            cursor: Cursor::at(0, 0),
        }
    }

    #[test]
    fn test_pop_restores_in_reverse_order() {
        let mut history = History::new();
        for i in 0..3 {
            history.push(snapshot(i));
        }

        assert_eq!(history.pop().unwrap().rows, vec!["2"]);
        assert_eq!(history.pop().unwrap().rows, vec!["1"]);
        assert_eq!(history.pop().unwrap().rows, vec!["0"]);
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_push_at_capacity_evicts_oldest() {
        let mut history = History::with_capacity(100);
        for i in 0..101 {
            history.push(snapshot(i));
        }
        assert_eq!(history.len(), 100);

        // The 100 most recent snapshots pop in reverse order...
        for expected in (1..=100).rev() {
            assert_eq!(history.pop().unwrap().rows, vec![expected.to_string()]);
        }
        // ...and the first-pushed snapshot is unrecoverable
        assert!(history.pop().is_none());
    }
}
