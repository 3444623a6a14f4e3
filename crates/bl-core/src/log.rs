//! Newest-first record logs.

use std::collections::VecDeque;

/// Maximum number of entries retained by the sleep and feeding logs.
pub const HISTORY_CAPACITY: usize = 10;

/// An ordered collection of immutable records, most recent first.
///
/// A bounded log drops its oldest entry when an insertion would exceed the
/// capacity. Eviction is silent; callers only see the retained window.
#[derive(Debug, Clone)]
pub struct RecordLog<T> {
    entries: VecDeque<T>,
    capacity: Option<usize>,
}

impl<T> RecordLog<T> {
    /// Creates a log that keeps at most `capacity` entries.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity: Some(capacity),
        }
    }

    /// Creates a log with no size limit.
    pub const fn unbounded() -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: None,
        }
    }

    /// Inserts `record` at the front, returning the evicted entry if any.
    pub fn push(&mut self, record: T) -> Option<T> {
        self.entries.push_front(record);
        match self.capacity {
            Some(capacity) if self.entries.len() > capacity => self.entries.pop_back(),
            _ => None,
        }
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &T> {
        self.entries.iter().take(n)
    }

    /// All retained entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a RecordLog<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_prepends() {
        let mut log = RecordLog::unbounded();
        log.push(1);
        log.push(2);
        log.push(3);
        assert_eq!(log.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn bounded_log_evicts_oldest() {
        let mut log = RecordLog::bounded(3);
        assert_eq!(log.push('a'), None);
        assert_eq!(log.push('b'), None);
        assert_eq!(log.push('c'), None);
        assert_eq!(log.push('d'), Some('a'));
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().copied().collect::<String>(), "dcb");
    }

    #[test]
    fn unbounded_log_keeps_everything() {
        let mut log = RecordLog::unbounded();
        for i in 0..500 {
            assert_eq!(log.push(i), None);
        }
        assert_eq!(log.len(), 500);
    }

    #[test]
    fn recent_is_capped_by_len_and_n() {
        let mut log = RecordLog::bounded(HISTORY_CAPACITY);
        for i in 0..4 {
            log.push(i);
        }
        assert_eq!(log.recent(2).copied().collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(log.recent(50).count(), 4);
        assert_eq!(log.recent(0).count(), 0);
    }
}
