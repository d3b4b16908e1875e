use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Guess counters. The total is always derived from the two counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StatisticsRecord", try_from = "StatisticsRecord")]
pub struct Statistics {
    correct: u64,
    incorrect: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn correct_guesses(&self) -> u64 {
        self.correct
    }

    pub fn incorrect_guesses(&self) -> u64 {
        self.incorrect
    }

    pub fn total_guesses(&self) -> u64 {
        self.correct + self.incorrect
    }

    pub fn increment_correct(&mut self) {
        self.correct = self.correct.saturating_add(1);
    }

    pub fn increment_incorrect(&mut self) {
        self.incorrect = self.incorrect.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Percentage of correct guesses, `0.0` before the first guess.
    pub fn accuracy(&self) -> f64 {
        let total = self.total_guesses();
        if total == 0 {
            return 0.0;
        }
        self.correct as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct Guesses: {}", self.correct)?;
        writeln!(f, "Incorrect Guesses: {}", self.incorrect)?;
        writeln!(f, "Total Guesses: {}", self.total_guesses())?;
        write!(f, "Accuracy: {:.2}%", self.accuracy())
    }
}

/// On-disk shape. `totalGuesses` is written for readers of the file and
/// checked on the way back in.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsRecord {
    correct_guesses: u64,
    incorrect_guesses: u64,
    #[serde(default)]
    total_guesses: Option<u64>,
}

impl From<Statistics> for StatisticsRecord {
    fn from(stats: Statistics) -> Self {
        Self {
            correct_guesses: stats.correct,
            incorrect_guesses: stats.incorrect,
            total_guesses: Some(stats.total_guesses()),
        }
    }
}

impl TryFrom<StatisticsRecord> for Statistics {
    type Error = ValidationError;

    fn try_from(record: StatisticsRecord) -> Result<Self, Self::Error> {
        let stats = Statistics {
            correct: record.correct_guesses,
            incorrect: record.incorrect_guesses,
        };
        let expected = record
            .correct_guesses
            .checked_add(record.incorrect_guesses);
        match (record.total_guesses, expected) {
            (_, None) => Err(ValidationError::InconsistentStatistics {
                correct: record.correct_guesses,
                incorrect: record.incorrect_guesses,
                total: record.total_guesses.unwrap_or(u64::MAX),
            }),
            (Some(total), Some(sum)) if total != sum => {
                Err(ValidationError::InconsistentStatistics {
                    correct: record.correct_guesses,
                    incorrect: record.incorrect_guesses,
                    total,
                })
            }
            _ => Ok(stats),
        }
    }
}
