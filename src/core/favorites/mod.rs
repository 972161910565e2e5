//! Flat-file favorites store.
//!
//! Persists selected characters as one JSON array, fully rewritten on each
//! mutation. A mutex per store instance serializes the read-modify-write
//! cycle so concurrent adds or deletes cannot interleave and corrupt the
//! document or collide on ids. Intentionally not high-throughput.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;

use crate::core::generator::CharacterRecord;

mod error;

pub use error::FavoritesError;

/// JSON-document-backed list of favorited characters.
pub struct FavoritesStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FavoritesStore {
    /// Open a store at `path`, creating an empty document (and any missing
    /// parent directories) if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FavoritesError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, "[]")?;
            log::info!("Created favorites file at {}", path.display());
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// All favorited characters, in insertion order.
    pub fn list(&self) -> Result<Vec<CharacterRecord>, FavoritesError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_records()
    }

    /// Append a record, assigning `id = 1 + max existing id` (1 when the
    /// store is empty) and stamping `saved_at`. Returns the assigned id.
    pub fn add(&self, record: &CharacterRecord) -> Result<u64, FavoritesError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.read_records()?;
        let id = records.iter().filter_map(|r| r.id).max().unwrap_or(0) + 1;

        let mut stored = record.clone();
        stored.id = Some(id);
        stored.saved_at = Some(Utc::now());
        records.push(stored);

        self.write_records(&records)?;
        log::debug!("Favorited character {} with id {}", record.name, id);
        Ok(id)
    }

    /// Remove the record with the given id. Returns whether anything was
    /// removed; a missing id is not an error.
    pub fn delete(&self, id: u64) -> Result<bool, FavoritesError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|r| r.id != Some(id));
        if records.len() == before {
            log::debug!("Delete of unknown favorite id {} is a no-op", id);
            return Ok(false);
        }
        self.write_records(&records)?;
        Ok(true)
    }

    /// Read the whole document.
    ///
    /// An unparsable document is treated as an empty collection (with a
    /// warning) so one corrupt write cannot take the store offline.
    fn read_records(&self) -> Result<Vec<CharacterRecord>, FavoritesError> {
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!(
                    "Favorites file {} is corrupt ({}); treating as empty",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Rewrite the whole document.
    fn write_records(&self, records: &[CharacterRecord]) -> Result<(), FavoritesError> {
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
