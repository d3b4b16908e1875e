use std::cell::RefCell;

use crate::error::PersistenceError;
use crate::persistence::{PersistenceStrategy, TrainerSnapshot};

const MEMORY_LOCATION: &str = "<memory>";

/// Keeps the encoded snapshot in memory. Goes through the same JSON encoding
/// as the file store, so it catches anything that would not survive a save.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    stored: RefCell<Option<String>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw text, as if a previous session had written it.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            stored: RefCell::new(Some(contents.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.stored.borrow().is_none()
    }
}

impl PersistenceStrategy for MemoryPersistence {
    fn save(&self, snapshot: &TrainerSnapshot) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(snapshot).map_err(PersistenceError::Encode)?;
        *self.stored.borrow_mut() = Some(encoded);
        Ok(())
    }

    fn load(&self) -> Result<Option<TrainerSnapshot>, PersistenceError> {
        self.stored
            .borrow()
            .as_deref()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| PersistenceError::malformed(MEMORY_LOCATION, e))
            })
            .transpose()
    }
}
