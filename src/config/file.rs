//! JSON game file
//!
//! ```json
//! {
//!   "minLength": 5,
//!   "maxLength": 8,
//!   "maxTries": 6,
//!   "maxTime": 1800,
//!   "solutions": "words/solutions.txt",
//!   "admissibles": "words/admissible.txt"
//! }
//! ```
//!
//! `mots` is accepted as an alias for `solutions`. Relative list paths are
//! resolved against the directory containing the game file.

use super::{Config, ConfigError, Limits};
use crate::wordlists::loader::load_from_file;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed game file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameFile {
    #[serde(flatten)]
    pub limits: Limits,
    #[serde(alias = "mots")]
    pub solutions: PathBuf,
    pub admissibles: PathBuf,
}

impl GameFile {
    /// Parse a game file and resolve its list paths
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file is missing or unreadable and
    /// [`ConfigError::Parse`] if it is not a valid game file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = serde_json::from_str::<Self>(&content);
        let mut file = parsed.map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        file.solutions = base.join(&file.solutions);
        file.admissibles = base.join(&file.admissibles);

        Ok(file)
    }

    /// Read both word lists and build the [`Config`]
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if a list cannot be read, or any error of
    /// [`Config::build`].
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let solutions = read_list(&self.solutions)?;
        let admissible = read_list(&self.admissibles)?;
        Config::build(self.limits, solutions, admissible)
    }
}

fn read_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let words = load_from_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded: {} ({} entries)", path.display(), words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("tomus-{name}-{}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.0.join(name);
            fs::write(&path, content).unwrap();
            path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = TempDir::new("game-file");
        let path = dir.write(
            "game.json",
            r#"{"maxTries": 4, "solutions": "sol.txt", "admissibles": "adm.txt"}"#,
        );

        let file = GameFile::load(&path).unwrap();
        assert_eq!(file.limits.max_tries, 4);
        assert_eq!(file.limits.min_length, 5);
        assert_eq!(file.solutions, dir.0.join("sol.txt"));
        assert_eq!(file.admissibles, dir.0.join("adm.txt"));
    }

    #[test]
    fn load_accepts_mots_alias() {
        let dir = TempDir::new("game-file-alias");
        let path = dir.write(
            "game.json",
            r#"{"minLength": 4, "maxLength": 9, "maxTries": 6, "maxTime": 60,
                "mots": "mots.txt", "admissibles": "adm.txt"}"#,
        );

        let file = GameFile::load(&path).unwrap();
        assert_eq!(file.solutions, dir.0.join("mots.txt"));
        assert_eq!(
            file.limits,
            Limits {
                min_length: 4,
                max_length: 9,
                max_tries: 6,
                max_time: 60,
            }
        );
    }

    #[test]
    fn into_config_reads_lists() {
        let dir = TempDir::new("game-config");
        dir.write("sol.txt", "garden\nplanet\napple\n");
        dir.write("adm.txt", "gander\nplanes\n");
        let path = dir.write(
            "game.json",
            r#"{"solutions": "sol.txt", "admissibles": "adm.txt"}"#,
        );

        let config = GameFile::load(&path).unwrap().into_config().unwrap();
        assert_eq!(config.solutions().len(), 2);
        assert!(config.is_admissible("gander"));
        assert!(config.is_admissible("garden"));
        assert!(!config.is_admissible("apple"));
    }

    #[test]
    fn missing_game_file_is_read_error() {
        let result = GameFile::load("/nonexistent/tomus/game.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_game_file_is_parse_error() {
        let dir = TempDir::new("game-malformed");
        let path = dir.write("game.json", r#"{"maxTries": "six"}"#);

        let result = GameFile::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_word_list_is_read_error() {
        let dir = TempDir::new("game-missing-list");
        let path = dir.write(
            "game.json",
            r#"{"solutions": "nope.txt", "admissibles": "nope.txt"}"#,
        );

        let result = GameFile::load(&path).unwrap().into_config();
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn empty_solution_list_is_fatal() {
        let dir = TempDir::new("game-empty");
        dir.write("sol.txt", "\n");
        dir.write("adm.txt", "garden\n");
        let path = dir.write(
            "game.json",
            r#"{"solutions": "sol.txt", "admissibles": "adm.txt"}"#,
        );

        let result = GameFile::load(&path).unwrap().into_config();
        assert!(matches!(result, Err(ConfigError::NoSolutions { .. })));
    }
}
