//! High score tracking
//!
//! Loads the stored best once at startup and writes through on every new best.

use crate::persistence::HighScoreStore;

#[derive(Debug, Clone)]
pub struct HighScoreTracker<S: HighScoreStore> {
    store: S,
    best: u64,
}

impl<S: HighScoreStore> HighScoreTracker<S> {
    /// Wrap a store, reading its current value
    pub fn new(mut store: S) -> Self {
        let best = store.load();
        Self { store, best }
    }

    /// Best score seen so far
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a finished run beats the best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run. Returns true (and persists) on a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        self.store.save(score);
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_loads_once() {
        let tracker = HighScoreTracker::new(MemoryStore::with_score(17));
        assert_eq!(tracker.best(), 17);
    }

    #[test]
    fn test_only_strictly_higher_is_saved() {
        let mut tracker = HighScoreTracker::new(MemoryStore::with_score(5));
        assert!(!tracker.record(0));
        assert!(!tracker.record(5));
        assert!(tracker.record(6));
        assert!(!tracker.record(6));
        assert!(tracker.record(9));
        assert_eq!(tracker.best(), 9);
        assert_eq!(tracker.store().saves, vec![6, 9]);
    }
}
