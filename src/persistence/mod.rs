pub mod json_file;
pub mod memory;

pub use json_file::JsonFilePersistence;
pub use memory::MemoryPersistence;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::pair::WordPicturePair;
use crate::statistics::Statistics;
use crate::trainer::LastResult;

/// Everything needed to bring a trainer back in a later session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSnapshot {
    pub word_pairs: Vec<WordPicturePair>,
    #[serde(default)]
    pub current_word_pair: Option<WordPicturePair>,
    pub statistics: Statistics,
    #[serde(default)]
    pub last_result: LastResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// Durable storage for trainer snapshots.
pub trait PersistenceStrategy {
    fn save(&self, snapshot: &TrainerSnapshot) -> Result<(), PersistenceError>;

    /// `Ok(None)` when nothing has been stored yet. A record that exists but
    /// cannot be read back is an error, see [`PersistenceError::is_corrupt`].
    fn load(&self) -> Result<Option<TrainerSnapshot>, PersistenceError>;
}
