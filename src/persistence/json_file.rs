use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::persistence::{PersistenceStrategy, TrainerSnapshot};

pub const DEFAULT_DATA_FILE: &str = "spelling_trainer_data.json";

/// Pretty-printed JSON file, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_tmp(&self, tmp: &Path, snapshot: &TrainerSnapshot) -> Result<(), PersistenceError> {
        let file = File::create(tmp).map_err(|e| PersistenceError::io(tmp, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot).map_err(PersistenceError::Encode)?;
        writer.flush().map_err(|e| PersistenceError::io(tmp, e))?;
        Ok(())
    }
}

impl Default for JsonFilePersistence {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl PersistenceStrategy for JsonFilePersistence {
    fn save(&self, snapshot: &TrainerSnapshot) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
        }

        let tmp = self.tmp_path();
        if let Err(err) = self.write_tmp(&tmp, snapshot) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        fs::rename(&tmp, &self.path).map_err(|e| PersistenceError::io(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            pairs = snapshot.word_pairs.len(),
            "trainer data saved"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<TrainerSnapshot>, PersistenceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no trainer data yet");
                return Ok(None);
            }
            Err(err) => return Err(PersistenceError::io(&self.path, err)),
        };

        let snapshot: TrainerSnapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PersistenceError::malformed(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            pairs = snapshot.word_pairs.len(),
            "trainer data loaded"
        );
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmp_path_is_sibling() {
        let store = JsonFilePersistence::new("data/progress.json");
        assert_eq!(store.tmp_path(), PathBuf::from("data/progress.json.tmp"));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            JsonFilePersistence::default().path(),
            Path::new(DEFAULT_DATA_FILE)
        );
    }
}
