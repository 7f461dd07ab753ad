//! Path resolution for focustrack configuration and data files.
//!
//! All focustrack data is stored in `~/.focustrack/` unless a data directory
//! is given with `--data-dir` or `FOCUSTRACK_HOME`:
//! - `config.yaml` - Main configuration file
//! - `focustrack.db` - SQLite database holding the session collection
//! - `focustrack.log` - Log output (kept off the terminal so the TUI stays clean)

use std::path::PathBuf;

use crate::error::FocusError;

/// Paths to focustrack configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focustrack/`
    pub root: PathBuf,
    /// Config file: `~/.focustrack/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.focustrack/focustrack.db`
    pub database: PathBuf,
    /// Log file: `~/.focustrack/focustrack.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FocusError> {
        let home = std::env::var("HOME").map_err(|_| {
            FocusError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".focustrack")))
    }

    /// Resolve paths from an explicit data directory, falling back to `$HOME`.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory cannot be determined.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, FocusError> {
        match data_dir {
            Some(root) => Ok(Self::with_root(root)),
            None => Self::new(),
        }
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("focustrack.db"),
            log_file: root.join("focustrack.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FocusError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-focustrack");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("focustrack.db"));
        assert_eq!(paths.log_file, root.join("focustrack.log"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let root = PathBuf::from("/tmp/elsewhere");
        let paths = Paths::resolve(Some(root.clone())).unwrap();
        assert_eq!(paths.root, root);
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("data"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Idempotent
        paths.ensure_dirs().unwrap();
    }
}
