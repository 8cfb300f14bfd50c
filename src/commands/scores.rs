//! Scores command

use crate::leaderboard::{DEFAULT_CAPACITY, JsonFileStore, Leaderboard, ScoreRecord, ScoreStore};
use crate::output::print_leaderboard;
use anyhow::{Context, Result};

/// Top `limit` records held by `store`, best first
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn top_scores(store: &impl ScoreStore, limit: usize) -> Result<Vec<ScoreRecord>> {
    let board = Leaderboard::open(store, DEFAULT_CAPACITY.max(limit))?;
    Ok(board.records().iter().take(limit).cloned().collect())
}

/// Print the leaderboard kept in the file at `path`
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn run_scores(path: &std::path::Path, limit: usize) -> Result<()> {
    let store = JsonFileStore::new(path);
    let records = top_scores(&store, limit)
        .with_context(|| format!("reading leaderboard {}", path.display()))?;
    print_leaderboard(&records);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::MemoryStore;
    use std::time::{Duration, UNIX_EPOCH};

    fn record(name: &str, score: u32) -> ScoreRecord {
        ScoreRecord::new(name, score, 1, Duration::from_secs(75), UNIX_EPOCH)
    }

    #[test]
    fn top_scores_sorted_and_limited() {
        let mut store = MemoryStore::default();
        let records = [record("ana", 200), record("bob", 450), record("cy", 250)];
        store.save(&records).unwrap();

        let top = top_scores(&store, 2).unwrap();
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "cy"]);
    }

    #[test]
    fn missing_file_has_no_scores() {
        let store = JsonFileStore::new("/nonexistent/tomus/scores.json");
        assert!(top_scores(&store, 10).unwrap().is_empty());
    }
}
