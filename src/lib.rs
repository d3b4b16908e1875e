pub mod config;
pub mod error;
pub mod logging;
pub mod pair;
pub mod persistence;
pub mod seed;
pub mod shell;
pub mod statistics;
pub mod trainer;

use rand::Rng;

pub use error::{PersistenceError, ValidationError};
pub use pair::WordPicturePair;
pub use persistence::{JsonFilePersistence, MemoryPersistence, PersistenceStrategy, TrainerSnapshot};
pub use statistics::Statistics;
pub use trainer::{LastResult, Trainer};

/// Resumes the stored trainer, or starts a new one over `pairs` when nothing
/// usable is stored. A corrupt record is logged and replaced on the next save;
/// an unreadable one is returned as an error.
pub fn load_or_create<P, R>(
    store: &P,
    pairs: Vec<WordPicturePair>,
    rng: &mut R,
) -> Result<Trainer, StartupError>
where
    P: PersistenceStrategy + ?Sized,
    R: Rng,
{
    match Trainer::load(store, rng) {
        Ok(Some(trainer)) => {
            tracing::info!(
                total = trainer.statistics().total_guesses(),
                "loaded existing trainer data"
            );
            return Ok(trainer);
        }
        Ok(None) => {}
        Err(err) if err.is_corrupt() => {
            tracing::warn!(error = %err, "stored trainer data unusable, starting fresh");
        }
        Err(err) => return Err(StartupError::Persistence(err)),
    }

    Trainer::new(pairs, rng).map_err(StartupError::Validation)
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Persistence(PersistenceError),
    #[error(transparent)]
    Validation(ValidationError),
}
