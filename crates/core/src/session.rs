//! Session module - score accumulation and the high-score boundary
//!
//! The session owns the running score of one game and keeps the persisted
//! best in sync, writing the store only when the running score newly
//! exceeds the cached best. Store operations are infallible at this
//! boundary; implementations degrade their own failures to defaults.

/// Boundary to wherever the best score lives between games
///
/// Loading falls back to 0 when nothing usable is stored; saving is
/// best-effort. Nothing in the scoring path is fatal.
pub trait HighScoreStore {
    fn load_high_score(&self) -> u32;
    fn save_high_score(&mut self, score: u32);
}

/// In-memory store for tests and headless play
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        self.best
    }

    fn save_high_score(&mut self, score: u32) {
        self.best = score;
    }
}

/// Running score of one game plus the cached best across games
#[derive(Debug, Clone)]
pub struct Session<S: HighScoreStore> {
    score: u32,
    best: u32,
    store: S,
}

impl<S: HighScoreStore> Session<S> {
    /// Wrap a store, reading the current best out of it
    pub fn new(store: S) -> Self {
        let best = store.load_high_score();
        Self {
            score: 0,
            best,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add one merge's doubled value to the running score
    ///
    /// Persists through the store only when the score newly exceeds the
    /// cached best, so unremarkable merges never touch storage.
    pub fn add_score(&mut self, delta: u32) {
        self.score = self.score.saturating_add(delta);
        if self.score > self.best {
            self.best = self.score;
            self.store.save_high_score(self.best);
        }
    }

    /// Reset for a fresh game and re-read the persisted best
    ///
    /// A store that answers lower than the cached best (a failed read
    /// degrades to 0) does not shrink it.
    pub fn new_game(&mut self) {
        self.score = 0;
        self.best = self.store.load_high_score().max(self.best);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that counts writes, to pin down when saving happens
    #[derive(Debug, Default)]
    struct CountingStore {
        best: u32,
        saves: u32,
    }

    impl HighScoreStore for CountingStore {
        fn load_high_score(&self) -> u32 {
            self.best
        }

        fn save_high_score(&mut self, score: u32) {
            self.best = score;
            self.saves += 1;
        }
    }

    #[test]
    fn test_score_accumulates() {
        let mut session = Session::new(MemoryStore::default());
        session.add_score(4);
        session.add_score(8);
        assert_eq!(session.score(), 12);
    }

    #[test]
    fn test_best_starts_from_store() {
        let session = Session::new(MemoryStore::new(128));
        assert_eq!(session.best(), 128);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_merge_of_two_fours_adds_eight() {
        let mut session = Session::new(CountingStore { best: 3, saves: 0 });
        session.add_score(8);

        assert_eq!(session.score(), 8);
        assert_eq!(session.best(), 8);
        assert_eq!(session.store().saves, 1);
        assert_eq!(session.store().best, 8);
    }

    #[test]
    fn test_store_untouched_while_best_stands() {
        let mut session = Session::new(CountingStore {
            best: 100,
            saves: 0,
        });

        session.add_score(8);
        session.add_score(16);
        assert_eq!(session.score(), 24);
        assert_eq!(session.best(), 100);
        assert_eq!(session.store().saves, 0);

        // Crossing the best triggers exactly one save per new record.
        session.add_score(80);
        assert_eq!(session.best(), 104);
        assert_eq!(session.store().saves, 1);
    }

    #[test]
    fn test_new_game_resets_score_keeps_best() {
        let mut session = Session::new(MemoryStore::default());
        session.add_score(16);
        assert_eq!(session.best(), 16);

        session.new_game();
        assert_eq!(session.score(), 0);
        assert_eq!(session.best(), 16);
    }

    #[test]
    fn test_new_game_does_not_shrink_best_on_failed_read() {
        /// Store that persists nothing, as a file store behaves when its
        /// directory is unwritable
        #[derive(Debug, Default)]
        struct BrokenStore;

        impl HighScoreStore for BrokenStore {
            fn load_high_score(&self) -> u32 {
                0
            }

            fn save_high_score(&mut self, _score: u32) {}
        }

        let mut session = Session::new(BrokenStore);
        session.add_score(32);
        session.new_game();
        assert_eq!(session.best(), 32);
    }
}
