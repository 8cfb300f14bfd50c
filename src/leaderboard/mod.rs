//! Score records
//!
//! The leaderboard is a sorted list of [`ScoreRecord`]s kept behind the
//! [`ScoreStore`] port. Only front ends touch it; the engine supplies the raw
//! numbers and never reads or writes records.

mod store;

pub use store::{JsonFileStore, MemoryStore};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::time::{Duration, SystemTime};
use thiserror::Error;

/// Default number of records kept
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("leaderboard file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence port for score records
pub trait ScoreStore {
    /// Load every stored record; a store that was never written is empty
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read or decoded.
    fn load(&self) -> Result<Vec<ScoreRecord>, LeaderboardError>;

    /// Replace the stored records
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, records: &[ScoreRecord]) -> Result<(), LeaderboardError>;
}

/// One finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    /// Words solved during the session
    pub word_count: usize,
    /// Session length in seconds
    pub time: u64,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl ScoreRecord {
    /// Record a session that ended at `finished_at`
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        score: u32,
        word_count: usize,
        elapsed: Duration,
        finished_at: SystemTime,
    ) -> Self {
        let date = DateTime::<Utc>::from(finished_at);

        Self {
            name: name.into(),
            score,
            word_count,
            time: elapsed.as_secs(),
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }

    /// `dd/mm/yyyy`
    #[must_use]
    pub fn date(&self) -> String {
        format!("{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

/// Records sorted by score (highest first), ties broken by shorter time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
    capacity: usize,
}

impl Leaderboard {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Load from `store`, sorting and trimming to `capacity`
    ///
    /// # Errors
    /// Returns any error of [`ScoreStore::load`].
    pub fn open(store: &impl ScoreStore, capacity: usize) -> Result<Self, LeaderboardError> {
        let mut board = Self::new(capacity);
        board.records = store.load()?;
        board.records.sort_by(Self::ranking);
        board.records.truncate(capacity);
        Ok(board)
    }

    /// Insert a record, returning its 0-based rank if it made the cut
    ///
    /// # Examples
    /// ```
    /// use std::time::{Duration, UNIX_EPOCH};
    /// use tomus::leaderboard::{Leaderboard, ScoreRecord};
    ///
    /// let mut board = Leaderboard::new(2);
    /// let record = |score| ScoreRecord::new("ana", score, 1, Duration::from_secs(60), UNIX_EPOCH);
    ///
    /// assert_eq!(board.insert(record(100)), Some(0));
    /// assert_eq!(board.insert(record(300)), Some(0));
    /// assert_eq!(board.insert(record(50)), None);
    /// assert_eq!(board.records().len(), 2);
    /// ```
    pub fn insert(&mut self, record: ScoreRecord) -> Option<usize> {
        // After existing records with the same rank
        let rank = self
            .records
            .partition_point(|existing| Self::ranking(existing, &record).is_le());
        if rank >= self.capacity {
            return None;
        }
        self.records.insert(rank, record);
        self.records.truncate(self.capacity);
        Some(rank)
    }

    /// Write the records back to `store`
    ///
    /// # Errors
    /// Returns any error of [`ScoreStore::save`].
    pub fn persist(&self, store: &mut impl ScoreStore) -> Result<(), LeaderboardError> {
        store.save(&self.records)
    }

    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    fn ranking(a: &ScoreRecord, b: &ScoreRecord) -> std::cmp::Ordering {
        b.score.cmp(&a.score).then(a.time.cmp(&b.time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn record(name: &str, score: u32, time: u64) -> ScoreRecord {
        ScoreRecord::new(name, score, 3, Duration::from_secs(time), UNIX_EPOCH)
    }

    #[test]
    fn record_captures_date_and_time() {
        let finished = UNIX_EPOCH + Duration::from_secs(19_723 * 86_400 + 3_601);
        let record = ScoreRecord::new("ana", 450, 2, Duration::from_millis(95_500), finished);

        assert_eq!(record.time, 95);
        assert_eq!((record.day, record.month, record.year), (1, 1, 2024));
        assert_eq!(record.date(), "01/01/2024");
    }

    #[test]
    fn record_date_handles_leap_day() {
        let finished = UNIX_EPOCH + Duration::from_secs(11_016 * 86_400 + 7);
        let record = ScoreRecord::new("ana", 0, 0, Duration::ZERO, finished);

        assert_eq!(record.date(), "29/02/2000");
    }

    #[test]
    fn insert_orders_by_score_then_time() {
        let mut board = Leaderboard::new(5);
        board.insert(record("a", 200, 300));
        board.insert(record("b", 450, 900));
        board.insert(record("c", 200, 100));

        let names: Vec<_> = board.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn insert_ties_keep_arrival_order() {
        let mut board = Leaderboard::new(5);
        board.insert(record("first", 200, 100));
        assert_eq!(board.insert(record("second", 200, 100)), Some(1));
    }

    #[test]
    fn insert_respects_capacity() {
        let mut board = Leaderboard::new(2);
        assert_eq!(board.insert(record("a", 100, 10)), Some(0));
        assert_eq!(board.insert(record("b", 200, 10)), Some(0));
        assert_eq!(board.insert(record("c", 150, 10)), Some(1));
        assert_eq!(board.insert(record("d", 10, 10)), None);

        let names: Vec<_> = board.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn open_sorts_and_trims() {
        let mut store = MemoryStore::default();
        let records = [record("a", 1, 1), record("b", 3, 1), record("c", 2, 1)];
        store.save(&records).unwrap();

        let board = Leaderboard::open(&store, 2).unwrap();
        let names: Vec<_> = board.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn persist_round_trips_through_store() {
        let mut store = MemoryStore::default();
        let mut board = Leaderboard::new(DEFAULT_CAPACITY);
        board.insert(record("ana", 250, 42));
        board.persist(&mut store).unwrap();

        let reopened = Leaderboard::open(&store, DEFAULT_CAPACITY).unwrap();
        assert_eq!(reopened, board);
    }

    #[test]
    fn record_json_uses_camel_case() {
        let json = serde_json::to_string(&record("ana", 250, 42)).unwrap();
        assert!(json.contains("\"wordCount\":3"));
        assert!(json.contains("\"time\":42"));
    }
}
