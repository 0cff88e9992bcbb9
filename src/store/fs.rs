use std::fs;
use std::path::{Path, PathBuf};

use super::StorageBackend;
use crate::error::{DeckError, Result};
use crate::model::DeckSnapshot;

const DECK_FILE: &str = "deck.json";
const TMP_FILE: &str = ".deck.json.tmp";

/// Filesystem persistence: one `deck.json` under the data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn deck_path(&self) -> PathBuf {
        self.root.join(DECK_FILE)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(DeckError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<DeckSnapshot>> {
        let path = self.deck_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(DeckError::Io)?;
        let snapshot = serde_json::from_str(&content).map_err(DeckError::Serialization)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &DeckSnapshot) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(snapshot).map_err(DeckError::Serialization)?;

        // Atomic write: a crash mid-save must not corrupt the previous save.
        let tmp_path = self.root.join(TMP_FILE);
        fs::write(&tmp_path, content).map_err(DeckError::Io)?;
        fs::rename(&tmp_path, self.deck_path()).map_err(DeckError::Io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, DeckCardEntry, DeckFormat, Supertype};
    use tempfile::TempDir;

    fn snapshot() -> DeckSnapshot {
        DeckSnapshot {
            entries: vec![DeckCardEntry {
                card: Card {
                    id: "bse1-4".to_string(),
                    name: "Flamewing".to_string(),
                    supertype: Supertype::Creature,
                    subtypes: Vec::new(),
                    set_code: "BSE".to_string(),
                    number: Some("4".to_string()),
                    rarity: None,
                    image_small: None,
                    image_large: None,
                },
                quantity: 4,
                position: 0,
            }],
            name: "Burn".to_string(),
            description: String::new(),
            format: DeckFormat::Standard,
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());

        backend.save(&snapshot()).unwrap();
        let loaded = backend.load().unwrap().unwrap();
        assert_eq!(loaded, snapshot());
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_is_error() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        fs::write(backend.deck_path(), "{ not json").unwrap();

        match backend.load() {
            Err(DeckError::Serialization(_)) => {}
            other => panic!("expected Serialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let backend = FsBackend::new(nested);

        backend.save(&snapshot()).unwrap();
        assert!(backend.load().unwrap().is_some());
    }

    #[test]
    fn test_no_tmp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        backend.save(&snapshot()).unwrap();
        backend.save(&snapshot()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }
}
