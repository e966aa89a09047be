//! Snapshot persistence for the task store.
//!
//! The whole [`TaskStore`] is written as one JSON document under a single
//! fixed path. Every operation fails gracefully: I/O and serialization errors
//! are logged and reported as a boolean or an absent result, never propagated
//! as a fatal condition.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::TaskStore;

/// Default snapshot file name inside the application data directory
const SNAPSHOT_FILE: &str = "tasks.json";

/// File-backed persistence adapter for the task store
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage at the default location, `<data_dir>/taskpad/tasks.json`
    #[must_use]
    pub fn new() -> Self {
        let path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskpad")
            .join(SNAPSHOT_FILE);
        Self { path }
    }

    /// Storage at an explicit path (used by tests and reset tooling)
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the full snapshot, returning whether the write succeeded.
    ///
    /// A failed write leaves the in-memory state authoritative; the caller is
    /// expected to carry on.
    pub fn save(&self, store: &TaskStore) -> bool {
        let serialized = match serde_json::to_string(store) {
            Ok(serialized) => serialized,
            Err(e) => {
                log::error!("failed to serialize snapshot: {e}");
                return false;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::error!("failed to create data directory {}: {e}", parent.display());
                return false;
            }
        }
        match fs::write(&self.path, serialized) {
            Ok(()) => {
                log::debug!("snapshot saved to {}", self.path.display());
                true
            }
            Err(e) => {
                log::error!("failed to write snapshot {}: {e}", self.path.display());
                false
            }
        }
    }

    /// Load the persisted snapshot, or `None` when there is no usable data.
    ///
    /// An absent file is the normal first-run case; a read or parse failure is
    /// logged and treated the same way.
    #[must_use]
    pub fn load(&self) -> Option<TaskStore> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no saved snapshot at {}", self.path.display());
                return None;
            }
            Err(e) => {
                log::error!("failed to read snapshot {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str::<TaskStore>(&data) {
            Ok(mut store) => {
                store.repair();
                Some(store)
            }
            Err(e) => {
                log::error!("failed to parse snapshot {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Remove the snapshot file entirely
    pub fn clear(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                log::error!("failed to clear snapshot {}: {e}", self.path.display());
                false
            }
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
