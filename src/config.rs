use std::path::PathBuf;

use crate::persistence::json_file::DEFAULT_DATA_FILE;

pub const DATA_PATH_VAR: &str = "SPELLING_TRAINER_DATA";
pub const PAIRS_PATH_VAR: &str = "SPELLING_TRAINER_PAIRS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub pairs_path: Option<PathBuf>,
    pub log_level: String,
    /// Set when file logging is enabled.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            pairs_path: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_path = non_empty(DATA_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let pairs_path = non_empty(PAIRS_PATH_VAR).map(PathBuf::from);

        let log_level = non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let log_dir = file_logs.then(|| {
            non_empty("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs"))
        });

        Self {
            data_path,
            pairs_path,
            log_level,
            log_dir,
        }
    }

    /// Command-line values win over the environment.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, pairs_path: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if pairs_path.is_some() {
            self.pairs_path = pairs_path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_env() {
        let config = Config::from_lookup(lookup_from(&[
            (DATA_PATH_VAR, "/tmp/progress.json"),
            (PAIRS_PATH_VAR, "words.json"),
            ("RUST_LOG", "debug"),
            ("ENABLE_FILE_LOGS", "1"),
        ]));
        assert_eq!(config.data_path, PathBuf::from("/tmp/progress.json"));
        assert_eq!(config.pairs_path, Some(PathBuf::from("words.json")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("./logs")));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[(DATA_PATH_VAR, "  ")]));
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[(PAIRS_PATH_VAR, "a.json")]))
            .with_overrides(Some(PathBuf::from("b.json")), None);
        assert_eq!(config.data_path, PathBuf::from("b.json"));
        assert_eq!(config.pairs_path, Some(PathBuf::from("a.json")));
    }
}
