use std::cell::RefCell;

use super::StorageBackend;
use crate::error::{DeckError, Result};
use crate::model::DeckSnapshot;

/// In-memory storage backend for testing.
///
/// Holds the serialized JSON rather than the typed snapshot so that the
/// corrupt-data path is exercisable. Uses `RefCell` for interior mutability
/// since the deck builder is single-threaded.
pub struct MemBackend {
    data: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            data: RefCell::new(None),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Inject raw stored bytes, e.g. corrupt JSON for rehydration tests.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.data.borrow_mut() = Some(raw.into());
    }

    /// The raw stored bytes, for asserting on persistence side effects.
    pub fn raw(&self) -> Option<String> {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        usize::from(self.data.borrow().is_some())
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<DeckSnapshot>> {
        match self.data.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => {
                let snapshot = serde_json::from_str(raw).map_err(DeckError::Serialization)?;
                Ok(Some(snapshot))
            }
        }
    }

    fn save(&self, snapshot: &DeckSnapshot) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DeckError::Store("Simulated write error".to_string()));
        }
        let raw = serde_json::to_string(snapshot).map_err(DeckError::Serialization)?;
        *self.data.borrow_mut() = Some(raw);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Card, Supertype};

    pub fn card(id: &str, name: &str, supertype: Supertype) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            supertype,
            subtypes: Vec::new(),
            set_code: "BSE".to_string(),
            number: Some("1".to_string()),
            rarity: None,
            image_small: None,
            image_large: None,
        }
    }

    pub fn creature(id: &str, name: &str) -> Card {
        card(id, name, Supertype::Creature)
    }

    pub fn support(id: &str, name: &str) -> Card {
        card(id, name, Supertype::SupportItem)
    }

    pub fn resource(id: &str, name: &str) -> Card {
        card(id, name, Supertype::Resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_backend_loads_none() {
        let backend = MemBackend::new();
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let backend = MemBackend::new();
        let snapshot = DeckSnapshot {
            name: "Test".to_string(),
            ..Default::default()
        };
        backend.save(&snapshot).unwrap();
        assert_eq!(backend.load().unwrap().unwrap().name, "Test");
    }

    #[test]
    fn test_corrupt_raw_is_error() {
        let backend = MemBackend::new();
        backend.set_raw("%%% nope");
        assert!(backend.load().is_err());
    }

    #[test]
    fn test_simulated_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let err = backend.save(&DeckSnapshot::default()).unwrap_err();
        assert!(matches!(err, DeckError::Store(_)));
        assert!(backend.raw().is_none());
    }
}
