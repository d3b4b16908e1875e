use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::PersistenceError;
use crate::pair::WordPicturePair;

struct SeedPair {
    word: &'static str,
    image_url: &'static str,
}

const DEFAULT_PAIRS: &[SeedPair] = &[
    SeedPair {
        word: "Bird",
        image_url: "https://example.com/bird.jpg",
    },
    SeedPair {
        word: "Cat",
        image_url: "https://example.com/cat.jpg",
    },
    SeedPair {
        word: "Car",
        image_url: "https://example.com/car.jpg",
    },
];

/// Built-in word list used when no word list file is configured.
pub fn default_pairs() -> Vec<WordPicturePair> {
    DEFAULT_PAIRS
        .iter()
        .filter_map(|seed| match WordPicturePair::new(seed.word, seed.image_url) {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(error = %err, word = seed.word, "skipping built-in pair");
                None
            }
        })
        .collect()
}

/// Reads a JSON array of `{"word", "imageUrl"}` objects. Every entry is
/// validated; one bad entry rejects the whole file.
pub fn load_pairs(path: &Path) -> Result<Vec<WordPicturePair>, PersistenceError> {
    let file = File::open(path).map_err(|e| PersistenceError::io(path, e))?;
    let pairs: Vec<WordPicturePair> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PersistenceError::malformed(path, e))?;

    tracing::info!(path = %path.display(), count = pairs.len(), "loaded word list");
    Ok(pairs)
}
