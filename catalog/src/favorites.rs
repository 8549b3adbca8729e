//! Durable favorites set.
//!
//! The store is the single owner of the favorites list; views read
//! through it instead of keeping ambient copies. Every mutation writes
//! the full set through the backend before returning. Hydration happens
//! once at open: a missing or corrupt persisted set is discarded with a
//! warning and the store starts empty.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::PokemonSummary;

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Failed to persist favorites: {0}")]
    Persist(#[from] std::io::Error),
}

/// Where the serialized favorites list lives.
///
/// One durable key holding one JSON array. The storage mechanics stay
/// behind this seam so the store logic never sees a path or a file.
pub trait FavoritesBackend {
    /// Read the persisted blob, `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>, FavoritesError>;

    /// Replace the persisted blob.
    fn save(&mut self, serialized: &str) -> Result<(), FavoritesError>;
}

/// File-backed storage: the whole list as one JSON file.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<String>, FavoritesError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, serialized: &str) -> Result<(), FavoritesError> {
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

/// In-memory storage for tests and callers that opt out of persistence.
#[derive(Default)]
pub struct MemoryBackend {
    blob: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a blob, as if a previous session had saved it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl FavoritesBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, FavoritesError> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, serialized: &str) -> Result<(), FavoritesError> {
        self.blob = Some(serialized.to_string());
        Ok(())
    }
}

/// Insertion-ordered favorites set keyed by pokemon id.
pub struct FavoritesStore {
    entries: Vec<PokemonSummary>,
    backend: Box<dyn FavoritesBackend + Send>,
}

impl FavoritesStore {
    /// Hydrate from the backend. Corruption or a failed read never
    /// surfaces to the caller; the store starts empty instead.
    pub fn open(backend: impl FavoritesBackend + Send + 'static) -> Self {
        let entries = match backend.load() {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<PokemonSummary>>(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "Persisted favorites are corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted favorites, starting empty");
                Vec::new()
            }
        };
        Self {
            entries,
            backend: Box::new(backend),
        }
    }

    /// Add a favorite. Adding an id already present is a no-op.
    pub fn add(&mut self, entry: PokemonSummary) -> Result<(), FavoritesError> {
        if self.has(entry.id) {
            return Ok(());
        }
        self.entries.push(entry);
        self.persist()
    }

    /// Remove by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: u32) -> Result<(), FavoritesError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Add if absent, remove if present. Returns whether the entry is a
    /// favorite afterwards.
    pub fn toggle(&mut self, entry: PokemonSummary) -> Result<bool, FavoritesError> {
        if self.has(entry.id) {
            self.remove(entry.id)?;
            Ok(false)
        } else {
            self.add(entry)?;
            Ok(true)
        }
    }

    pub fn clear(&mut self) -> Result<(), FavoritesError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        self.entries.clear();
        self.persist()
    }

    pub fn has(&self, id: u32) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// All favorites in insertion order.
    pub fn all(&self) -> &[PokemonSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) -> Result<(), FavoritesError> {
        // Summaries serialize infallibly; the only failure mode is IO.
        let serialized =
            serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string());
        self.backend.save(&serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeName;

    fn pikachu() -> PokemonSummary {
        PokemonSummary {
            id: 25,
            name: "pikachu".to_string(),
            image_url: None,
            types: vec![TypeName::Electric],
        }
    }

    fn charmander() -> PokemonSummary {
        PokemonSummary {
            id: 4,
            name: "charmander".to_string(),
            image_url: None,
            types: vec![TypeName::Fire],
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = FavoritesStore::open(MemoryBackend::new());
        store.add(pikachu()).unwrap();
        store.add(pikachu()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.has(25));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = FavoritesStore::open(MemoryBackend::new());
        store.add(pikachu()).unwrap();
        store.add(charmander()).unwrap();
        let names: Vec<&str> = store.all().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["pikachu", "charmander"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = FavoritesStore::open(MemoryBackend::new());
        store.add(pikachu()).unwrap();
        store.add(charmander()).unwrap();

        store.remove(25).unwrap();
        assert!(!store.has(25));
        assert!(store.has(4));

        // Removing an absent id is a no-op.
        store.remove(999).unwrap();
        assert_eq!(store.len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut store = FavoritesStore::open(MemoryBackend::new());
        assert!(store.toggle(pikachu()).unwrap());
        assert!(store.has(25));
        assert!(!store.toggle(pikachu()).unwrap());
        assert!(!store.has(25));
    }

    #[test]
    fn test_hydration_round_trip() {
        let mut first = FavoritesStore::open(MemoryBackend::new());
        first.add(pikachu()).unwrap();
        first.add(charmander()).unwrap();

        let blob = serde_json::to_string(first.all()).unwrap();
        let second = FavoritesStore::open(MemoryBackend::with_blob(blob));
        assert_eq!(second.all(), first.all());
    }

    #[test]
    fn test_corrupt_blob_starts_empty() {
        let store = FavoritesStore::open(MemoryBackend::with_blob("not json {"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_backend_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        {
            let mut store = FavoritesStore::open(JsonFileBackend::new(&path));
            store.add(pikachu()).unwrap();
        }

        let store = FavoritesStore::open(JsonFileBackend::new(&path));
        assert_eq!(store.len(), 1);
        assert!(store.has(25));
    }

    #[test]
    fn test_file_backend_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::open(JsonFileBackend::new(dir.path().join("none.json")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_backend_corrupt_file_is_recovered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "][").unwrap();

        let mut store = FavoritesStore::open(JsonFileBackend::new(&path));
        assert!(store.is_empty());

        // The store is still usable and the next mutation repairs the file.
        store.add(pikachu()).unwrap();
        let reopened = FavoritesStore::open(JsonFileBackend::new(&path));
        assert!(reopened.has(25));
    }
}
