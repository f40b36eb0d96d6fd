//! Path resolution for studyfocus configuration.
//!
//! studyfocus keeps its settings in `~/.studyfocus/config.yaml`. The
//! `STUDYFOCUS_HOME` environment variable relocates the root directory.

use std::path::PathBuf;

use crate::error::StudyError;

/// Paths to studyfocus configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.studyfocus/`
    pub root: PathBuf,
    /// Config file: `~/.studyfocus/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on `STUDYFOCUS_HOME` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither location can be determined.
    pub fn new() -> Result<Self, StudyError> {
        if let Ok(root) = std::env::var("STUDYFOCUS_HOME") {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            StudyError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".studyfocus")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".studyfocus"))
        })
    }
}
