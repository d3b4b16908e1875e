use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

static IMAGE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)([A-Za-z0-9_.-]+)(:[0-9]{1,5})?(/[A-Za-z0-9_./-]*)?$")
        .expect("image url pattern is valid")
});

pub fn is_valid_image_url(url: &str) -> bool {
    IMAGE_URL_PATTERN.is_match(url)
}

/// A word together with the picture that illustrates it.
///
/// Both fields are validated on construction and on every mutation, so a
/// value of this type always holds a non-blank trimmed word and an
/// `http(s)://host[:port][/path]` image reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PairRecord")]
pub struct WordPicturePair {
    word: String,
    image_url: String,
}

impl WordPicturePair {
    pub fn new(word: &str, image_url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            word: validate_word(word)?,
            image_url: validate_image_url(image_url)?,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn set_word(&mut self, word: &str) -> Result<(), ValidationError> {
        self.word = validate_word(word)?;
        Ok(())
    }

    pub fn set_image_url(&mut self, image_url: &str) -> Result<(), ValidationError> {
        self.image_url = validate_image_url(image_url)?;
        Ok(())
    }
}

impl fmt::Display for WordPicturePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.word, self.image_url)
    }
}

fn validate_word(word: &str) -> Result<String, ValidationError> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankWord);
    }
    Ok(trimmed.to_string())
}

fn validate_image_url(image_url: &str) -> Result<String, ValidationError> {
    if !is_valid_image_url(image_url) {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(image_url.to_string())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PairRecord {
    word: String,
    image_url: String,
}

impl TryFrom<PairRecord> for WordPicturePair {
    type Error = ValidationError;

    fn try_from(record: PairRecord) -> Result<Self, Self::Error> {
        Self::new(&record.word, &record.image_url)
    }
}
