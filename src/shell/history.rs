//! Persistent command history configuration.

use std::path::PathBuf;

/// Configuration for command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 1000,
        }
    }
}

impl HistoryConfig {
    /// Creates a new history config with the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Sets the maximum number of entries.
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_default() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_entries, 1000);
    }

    #[test]
    fn test_history_config_builder() {
        let config = HistoryConfig::new(PathBuf::from("/tmp/history")).with_max_entries(500);
        assert_eq!(config.path, PathBuf::from("/tmp/history"));
        assert_eq!(config.max_entries, 500);
    }
}
