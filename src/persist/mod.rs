//! Reading-progress persistence.
//!
//! A single bincode file in a per-user state directory holds a small
//! key-value map. Only one key is in use today (`currentSection`); the map
//! keeps the format open for later additions without a version bump.
//!
//! Storage failures never disturb the viewer: saves and loads absorb I/O
//! errors into no-ops, logging them at `warn` level.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key under which the last active section id is stored.
const CURRENT_SECTION_KEY: &str = "currentSection";

/// File name of the progress store inside the state directory.
const STORE_FILE: &str = "progress.bin";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    entries: HashMap<String, String>,
    /// When the file was last written (informational only).
    saved_at: i64,
}

/// Durable key-value store for reading progress.
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Creates a store rooted at the given state directory. The directory
    /// is created lazily on first save.
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        let mut path = state_dir.into();
        path.push(STORE_FILE);
        Self { path }
    }

    /// Default state directory: `$XDG_STATE_HOME/courseview` or
    /// `~/.local/state/courseview`, falling back to the current directory
    /// when no home is known.
    pub fn default_dir() -> PathBuf {
        if let Ok(xdg) = std::env::var("XDG_STATE_HOME")
            && !xdg.is_empty()
        {
            return Path::new(&xdg).join("courseview");
        }
        if let Ok(home) = std::env::var("HOME")
            && !home.is_empty()
        {
            return Path::new(&home).join(".local/state/courseview");
        }
        PathBuf::from(".courseview")
    }

    /// Persists the active section id. Called on every section change.
    pub fn save_section(&self, id: &str) {
        let mut file = self.read_file().unwrap_or_default();
        file.entries
            .insert(CURRENT_SECTION_KEY.to_string(), id.to_string());
        file.saved_at = chrono::Utc::now().timestamp();

        if let Err(e) = self.write_file(&file) {
            warn!("cannot save progress to {}: {}", self.path.display(), e);
        }
    }

    /// Returns the persisted section id, if any. A missing or unreadable
    /// store means "no saved progress", never an error.
    pub fn load_section(&self) -> Option<String> {
        self.read_file()?.entries.remove(CURRENT_SECTION_KEY)
    }

    fn read_file(&self) -> Option<StoreFile> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("cannot read progress from {}: {}", self.path.display(), e);
                return None;
            }
        };
        match bincode::deserialize(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("discarding corrupt progress file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn write_file(&self, file: &StoreFile) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = bincode::serialize(file).map_err(std::io::Error::other)?;
        // Write to a sibling temp file first so a crash mid-write cannot
        // truncate the existing store.
        let tmp = self.path.with_extension("bin.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        assert_eq!(store.load_section(), None);
        store.save_section("architecture");

        // A fresh store over the same directory simulates a restart.
        let reopened = ProgressStore::new(dir.path());
        assert_eq!(reopened.load_section(), Some("architecture".to_string()));
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        store.save_section("intro");
        store.save_section("ops");
        assert_eq!(store.load_section(), Some("ops".to_string()));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());
        fs::write(dir.path().join(STORE_FILE), b"not bincode").unwrap();

        assert_eq!(store.load_section(), None);
        // And saving over it works.
        store.save_section("intro");
        assert_eq!(store.load_section(), Some("intro".to_string()));
    }

    #[test]
    fn test_missing_directory_is_created_on_save() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep/state");
        let store = ProgressStore::new(&nested);

        store.save_section("intro");
        assert_eq!(store.load_section(), Some("intro".to_string()));
    }
}
