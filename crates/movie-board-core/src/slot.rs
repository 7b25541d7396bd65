use movie_board_config::PathManager;
use movie_board_models::BoardSnapshot;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use crate::StoreError;

/// A single named key-value location holding the board snapshot.
///
/// `load` never fails: absent, unreadable or malformed content all mean
/// "no prior state".
pub trait PersistenceSlot: Send + Sync {
    fn key(&self) -> &str;

    fn load(&self) -> Option<BoardSnapshot>;

    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

/// Decode slot content, logging and discarding anything malformed
fn decode(key: &str, content: &str) -> Option<BoardSnapshot> {
    match BoardSnapshot::from_json(content) {
        Ok(snapshot) => {
            info!(
                "Slot hit: {} (loaded {} movies, initialized={})",
                key,
                snapshot.movies.len(),
                snapshot.initialized
            );
            Some(snapshot)
        }
        Err(e) => {
            warn!("Slot {} holds malformed data: {}. Treating as empty.", key, e);
            None
        }
    }
}

/// Slot backed by one pretty-printed JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    key: String,
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(dir: &Path, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.join(format!("{}.json", key));
        Self { key, path }
    }

    pub fn from_paths(paths: &PathManager, key: impl Into<String>) -> Self {
        Self::new(&paths.slots_dir(), key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move an unreadable or malformed slot file aside so the next save cannot overwrite it
    fn backup_unreadable(&self) {
        let backup_path = self.path.with_extension("json.bak");
        match std::fs::rename(&self.path, &backup_path) {
            Ok(_) => info!("Moved unreadable slot file to {:?}", backup_path),
            Err(e) => warn!("Failed to back up unreadable slot file: {}", e),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Persist { key: self.key.clone(), source }
    }
}

impl PersistenceSlot for JsonFileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Option<BoardSnapshot> {
        if !self.path.exists() {
            debug!("Slot miss: {} (file does not exist)", self.key);
            return None;
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read slot file for {}: {}. Treating as empty.", self.key, e);
                self.backup_unreadable();
                return None;
            }
        };

        let snapshot = decode(&self.key, &content);
        if snapshot.is_none() {
            self.backup_unreadable();
        }
        snapshot
    }

    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = snapshot.to_json_pretty()?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;

        debug!("Slot saved: {} ({} movies)", self.key, snapshot.movies.len());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| self.io_error(e))?;
            info!("Cleared slot {} at {:?}", self.key, self.path);
        }
        Ok(())
    }
}

/// In-memory slot. Clones share the same storage, so a second store built from
/// a clone sees what the first one saved.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    key: String,
    content: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: Arc::new(Mutex::new(None)),
        }
    }

    /// Pre-populate with raw content, valid or not
    pub fn with_content(key: impl Into<String>, content: impl Into<String>) -> Self {
        let slot = Self::new(key);
        *slot.lock() = Some(content.into());
        slot
    }

    /// Raw stored content, if any
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // Content is a plain string, so a poisoned lock still holds usable data
        self.content.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PersistenceSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Option<BoardSnapshot> {
        let content = self.lock().clone()?;
        decode(&self.key, &content)
    }

    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), StoreError> {
        let json = snapshot.to_json_pretty()?;
        *self.lock() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_board_models::{Movie, MovieId, Rating, WatchStatus};

    fn sample_snapshot() -> BoardSnapshot {
        BoardSnapshot::new(
            vec![
                Movie::new(MovieId::from("1"), "The Shawshank Redemption", "Drama", WatchStatus::Watchlist),
                Movie::new(MovieId::from("3"), "The Dark Knight", "Action", WatchStatus::Watched)
                    .with_review(Rating::new(5), "Amazing superhero movie!"),
            ],
            true,
        )
    }

    #[test]
    fn test_file_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonFileSlot::new(dir.path(), "movieApp");
        assert!(slot.load().is_none());

        slot.save(&sample_snapshot()).unwrap();
        assert!(slot.path().ends_with("movieApp.json"));
        assert_eq!(slot.load(), Some(sample_snapshot()));
    }

    #[test]
    fn test_file_slot_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonFileSlot::new(&dir.path().join("nested/slots"), "movieApp");
        slot.save(&BoardSnapshot::default()).unwrap();
        assert!(slot.path().exists());
    }

    #[test]
    fn test_file_slot_malformed_is_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonFileSlot::new(dir.path(), "movieApp");
        std::fs::write(slot.path(), "{ not json").unwrap();

        assert!(slot.load().is_none());
        assert!(!slot.path().exists());
        assert!(dir.path().join("movieApp.json.bak").exists());
    }

    #[test]
    fn test_file_slot_non_utf8_is_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonFileSlot::new(dir.path(), "movieApp");
        let bytes = [0xff, 0xfe, b'{', b'}'];
        std::fs::write(slot.path(), bytes).unwrap();

        assert!(slot.load().is_none());
        assert!(!slot.path().exists());
        let backup = dir.path().join("movieApp.json.bak");
        assert_eq!(std::fs::read(backup).unwrap(), bytes);
    }

    #[test]
    fn test_file_slot_clear() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonFileSlot::new(dir.path(), "movieApp");
        slot.save(&sample_snapshot()).unwrap();
        slot.clear().unwrap();
        assert!(slot.load().is_none());
        // Clearing an empty slot is fine
        slot.clear().unwrap();
    }

    #[test]
    fn test_file_slot_from_paths() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path());
        let slot = JsonFileSlot::from_paths(&paths, "movieApp");
        assert_eq!(slot.path(), paths.slots_dir().join("movieApp.json"));
    }

    #[test]
    fn test_memory_slot_clones_share_storage() {
        let slot = MemorySlot::new("movieApp");
        let other = slot.clone();
        slot.save(&sample_snapshot()).unwrap();
        assert_eq!(other.load(), Some(sample_snapshot()));
        other.clear().unwrap();
        assert!(slot.raw().is_none());
    }

    #[test]
    fn test_memory_slot_malformed_is_none() {
        let slot = MemorySlot::with_content("movieApp", "[1, 2, 3]");
        assert!(slot.load().is_none());
    }
}
