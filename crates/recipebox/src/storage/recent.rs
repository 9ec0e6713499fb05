//! Bounded most-recently-viewed queue.

use std::collections::VecDeque;

/// Default number of recent views kept.
pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// Recently viewed recipe names, most recent first.
///
/// Names are unique within the queue and it never holds more than
/// `capacity` entries. Viewing a name that is already present moves it to
/// the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentViews {
    names: VecDeque<String>,
    capacity: usize,
}

impl RecentViews {
    /// Create an empty queue. A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            names: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a queue from names ordered most recent first.
    ///
    /// Later duplicates are dropped and only the first `capacity` names are kept.
    #[must_use]
    pub fn from_names<I>(names: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut recent = Self::new(capacity);
        for name in names {
            if recent.names.len() == recent.capacity {
                break;
            }
            if !recent.contains(&name) {
                recent.names.push_back(name);
            }
        }
        recent
    }

    /// Record a view of `name`.
    pub fn touch(&mut self, name: &str) {
        self.remove(name);
        self.names.push_front(name.to_string());
        self.names.truncate(self.capacity);
    }

    /// Remove `name` from the queue. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new`, keeping its position. Returns `true` if
    /// `old` was present.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        let Some(idx) = self.names.iter().position(|n| n == old) else {
            return false;
        };
        if old != new {
            self.remove(new);
        }
        // `remove(new)` may have shifted `old` one slot towards the front.
        let idx = self.names.iter().position(|n| n == old).unwrap_or(idx);
        self.names[idx] = new.to_string();
        true
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Check whether `name` is in the queue.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterate names, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names as an owned list, most recent first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for RecentViews {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}
