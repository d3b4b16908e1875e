use std::fmt;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PersistenceError, ValidationError};
use crate::pair::WordPicturePair;
use crate::persistence::{PersistenceStrategy, TrainerSnapshot};
use crate::statistics::Statistics;

/// Outcome of the most recent guess since the current pair was drawn.
///
/// Stored as `true`, `false` or `null` to match the snapshot file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum LastResult {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

impl LastResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            LastResult::Unknown => "No guess made yet",
            LastResult::Correct => "Last guess was correct",
            LastResult::Incorrect => "Last guess was incorrect",
        }
    }
}

impl From<Option<bool>> for LastResult {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => LastResult::Unknown,
            Some(true) => LastResult::Correct,
            Some(false) => LastResult::Incorrect,
        }
    }
}

impl From<LastResult> for Option<bool> {
    fn from(value: LastResult) -> Self {
        match value {
            LastResult::Unknown => None,
            LastResult::Correct => Some(true),
            LastResult::Incorrect => Some(false),
        }
    }
}

/// Quiz state: the word list, the pair being asked, the last outcome and the
/// running statistics.
///
/// The current pair is held as an index into `pairs`, so it is a member of
/// the list by construction. Storage is never reached from here; callers own
/// a [`PersistenceStrategy`] and pass it to [`Trainer::persist`] and
/// [`Trainer::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pairs: Vec<WordPicturePair>,
    current: usize,
    last_result: LastResult,
    statistics: Statistics,
}

impl Trainer {
    pub fn new<R: Rng>(pairs: Vec<WordPicturePair>, rng: &mut R) -> Result<Self, ValidationError> {
        if pairs.is_empty() {
            return Err(ValidationError::NoPairs);
        }

        let mut trainer = Self {
            pairs,
            current: 0,
            last_result: LastResult::Unknown,
            statistics: Statistics::new(),
        };
        trainer.select_random_pair(rng);
        Ok(trainer)
    }

    pub fn pairs(&self) -> &[WordPicturePair] {
        &self.pairs
    }

    pub fn current_pair(&self) -> &WordPicturePair {
        &self.pairs[self.current]
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn last_result(&self) -> LastResult {
        self.last_result
    }

    /// Draws the next pair uniformly from the whole list. The same pair may
    /// come up again.
    pub fn select_random_pair<R: Rng>(&mut self, rng: &mut R) {
        self.current = rng.random_range(0..self.pairs.len());
        self.last_result = LastResult::Unknown;
        tracing::debug!(index = self.current, word = %self.current_pair().word(), "selected pair");
    }

    /// Compares the trimmed guess with the current word, exactly and
    /// case-sensitively, and records the outcome.
    pub fn guess_word(&mut self, guess: &str) -> Result<bool, ValidationError> {
        let guess = guess.trim();
        if guess.is_empty() {
            return Err(ValidationError::BlankGuess);
        }

        let correct = guess == self.current_pair().word();
        if correct {
            self.statistics.increment_correct();
            self.last_result = LastResult::Correct;
        } else {
            self.statistics.increment_incorrect();
            self.last_result = LastResult::Incorrect;
        }

        tracing::debug!(
            correct,
            total = self.statistics.total_guesses(),
            "guess recorded"
        );
        Ok(correct)
    }

    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
        tracing::info!("statistics reset");
    }

    pub fn snapshot(&self) -> TrainerSnapshot {
        TrainerSnapshot {
            word_pairs: self.pairs.clone(),
            current_word_pair: Some(self.current_pair().clone()),
            statistics: self.statistics,
            last_result: self.last_result,
            saved_at: Some(Utc::now()),
        }
    }

    /// Rebuilds a trainer from stored state. A stored current pair that is
    /// missing or not in the list is replaced by a fresh draw.
    pub fn restore<R: Rng>(snapshot: TrainerSnapshot, rng: &mut R) -> Result<Self, ValidationError> {
        let TrainerSnapshot {
            word_pairs,
            current_word_pair,
            statistics,
            last_result,
            ..
        } = snapshot;

        if word_pairs.is_empty() {
            return Err(ValidationError::NoPairs);
        }

        let position = current_word_pair
            .as_ref()
            .and_then(|current| word_pairs.iter().position(|pair| pair == current));

        let mut trainer = Self {
            pairs: word_pairs,
            current: 0,
            last_result,
            statistics,
        };

        match position {
            Some(index) => trainer.current = index,
            None => {
                tracing::warn!(
                    stored = ?current_word_pair.as_ref().map(WordPicturePair::word),
                    "stored current pair not in word list, reselecting"
                );
                trainer.select_random_pair(rng);
            }
        }

        Ok(trainer)
    }

    pub fn persist<P>(&self, store: &P) -> Result<(), PersistenceError>
    where
        P: PersistenceStrategy + ?Sized,
    {
        store.save(&self.snapshot())
    }

    /// `Ok(None)` means nothing has been stored yet.
    pub fn load<P, R>(store: &P, rng: &mut R) -> Result<Option<Self>, PersistenceError>
    where
        P: PersistenceStrategy + ?Sized,
        R: Rng,
    {
        let Some(snapshot) = store.load()? else {
            return Ok(None);
        };
        Self::restore(snapshot, rng)
            .map(Some)
            .map_err(PersistenceError::Invalid)
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Word Pair: {}", self.current_pair())?;
        writeln!(f, "Statistics: {}", self.statistics)?;
        write!(f, "Last Result: {}", self.last_result.as_str())
    }
}
