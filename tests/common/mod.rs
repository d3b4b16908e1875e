#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use spelling_trainer::{Trainer, WordPicturePair};

pub fn animal_pairs() -> Vec<WordPicturePair> {
    [
        ("Cat", "http://example.com/cat.jpg"),
        ("Dog", "http://example.com/dog.jpg"),
        ("Bird", "https://example.com/bird.jpg"),
    ]
    .into_iter()
    .map(|(word, url)| WordPicturePair::new(word, url).expect("valid fixture pair"))
    .collect()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn seeded_trainer(seed: u64) -> Trainer {
    Trainer::new(animal_pairs(), &mut seeded_rng(seed)).expect("fixture pairs are non-empty")
}
