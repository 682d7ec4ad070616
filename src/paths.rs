//! Directory and path bootstrapping.

use anyhow::Result;
use std::path::PathBuf;

/// Directory holding the backing file, created on demand by the store.
pub const STORAGE_DIR: &str = "password_storage";

/// The storage directory, relative to the working directory.
pub fn storage_dir() -> PathBuf {
    PathBuf::from(STORAGE_DIR)
}

fn app_dir() -> Result<PathBuf> {
    let home = dirs_next::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home.join(".passforge"))
}

/// Log file location under the user's home directory.
pub fn log_file() -> Result<PathBuf> {
    Ok(app_dir()?.join("passforge.log"))
}

/// Shell history location under the user's home directory.
pub fn history_file() -> Result<PathBuf> {
    Ok(app_dir()?.join("history"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_dir_is_relative() {
        assert!(storage_dir().is_relative());
        assert_eq!(storage_dir(), PathBuf::from("password_storage"));
    }
}
