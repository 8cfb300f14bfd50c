//! Score store implementations

use super::{LeaderboardError, ScoreRecord, ScoreStore};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Records kept as a pretty-printed JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no leaderboard at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, records: &[ScoreRecord]) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target, then swap it in
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store, mainly for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<ScoreRecord>,
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[ScoreRecord]) -> Result<(), LeaderboardError> {
        self.records = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tomus-scores-{name}-{}", std::process::id()))
            .join("scores.json")
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = JsonFileStore::new("/nonexistent/tomus/scores.json");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let mut store = JsonFileStore::new(&path);
        let record = ScoreRecord::new("ana", 450, 2, Duration::from_secs(125), UNIX_EPOCH);
        let records = vec![record];

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded, records);
    }

    #[test]
    fn malformed_file_is_error() {
        let path = temp_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let result = JsonFileStore::new(&path).load();
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert!(matches!(result, Err(LeaderboardError::Json(_))));
    }
}
