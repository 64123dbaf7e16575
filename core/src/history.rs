//! Persisted record of already-extracted cache files.
//!
//! The history lives in a single text file of comma-joined source
//! filenames with a trailing comma after every token and no newline
//! handling. The format predates this implementation and is preserved
//! verbatim so existing `log.csv` files keep working.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Loads the set of filenames recorded by previous runs.
///
/// A missing file is the normal first-run state and yields an empty set.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, HistoryError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(HashSet::new());
    }
    let contents = fs::read_to_string(path).map_err(|source| HistoryError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(contents
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect())
}

/// Appends newly processed filenames to the history file, creating it if
/// absent. Each name is written followed by a comma; iteration order is
/// not significant.
pub fn append_history<P: AsRef<Path>>(
    path: P,
    new_names: &HashSet<String>,
) -> Result<(), HistoryError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| HistoryError::Io {
            source,
            path: path.to_path_buf(),
        })?;
    for name in new_names {
        write!(file, "{},", name).map_err(|source| HistoryError::Io {
            source,
            path: path.to_path_buf(),
        })?;
    }
    Ok(())
}

#[derive(Debug)]
pub enum HistoryError {
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { source, path } => {
                write!(f, "history file error for {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for HistoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_empty_set() {
        let dir = tempdir().unwrap();
        let history = load_history(dir.path().join("log.csv")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn parses_comma_joined_tokens_and_drops_empties() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "alpha,beta,,gamma,").unwrap();
        let history = load_history(&path).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.contains("alpha"));
        assert!(history.contains("beta"));
        assert!(history.contains("gamma"));
    }

    #[test]
    fn append_creates_file_and_writes_trailing_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let mut names = HashSet::new();
        names.insert(String::from("alpha"));
        append_history(&path, &names).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha,");
    }

    #[test]
    fn append_extends_existing_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "old,").unwrap();
        let mut names = HashSet::new();
        names.insert(String::from("fresh"));
        append_history(&path, &names).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "old,fresh,");
    }

    #[test]
    fn round_trip_is_the_union_of_both_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let first: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let second: HashSet<String> = ["c"].iter().map(|s| s.to_string()).collect();
        append_history(&path, &first).unwrap();
        append_history(&path, &second).unwrap();
        let loaded = load_history(&path).unwrap();
        let expected: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(loaded, expected);
    }
}
