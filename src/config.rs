//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `UNSCRAMBLE_MAX_WORDS` | 10 | Words per session |
//! | `UNSCRAMBLE_SCORE_INCREMENT` | 20 | Points per correct guess |
//! | `UNSCRAMBLE_SEED` | random | Seed for a reproducible session |
//! | `UNSCRAMBLE_WORDS_PATH` | built-in bank | JSON array of lowercase words |
//! | `UNSCRAMBLE_LOG_PATH` | off | File that receives log output |
//!
//! Numbers that fail to parse fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{SessionConfig, WordBank};

pub const ENV_MAX_WORDS: &str = "UNSCRAMBLE_MAX_WORDS";
pub const ENV_SCORE_INCREMENT: &str = "UNSCRAMBLE_SCORE_INCREMENT";
pub const ENV_SEED: &str = "UNSCRAMBLE_SEED";
pub const ENV_WORDS_PATH: &str = "UNSCRAMBLE_WORDS_PATH";
pub const ENV_LOG_PATH: &str = "UNSCRAMBLE_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub seed: Option<u64>,
    pub words_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SessionConfig::default();

        let max_words = lookup(ENV_MAX_WORDS)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_words);

        let score_increment = lookup(ENV_SCORE_INCREMENT)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.score_increment);

        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());

        Self {
            session: SessionConfig {
                max_words,
                score_increment,
            },
            seed,
            words_path: non_empty_path(lookup(ENV_WORDS_PATH)),
            log_path: non_empty_path(lookup(ENV_LOG_PATH)),
        }
    }

    /// The configured word file, or the built-in bank.
    pub fn word_bank(&self) -> Result<WordBank> {
        match &self.words_path {
            Some(path) => load_word_file(path),
            None => Ok(WordBank::default()),
        }
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Read a word bank from a JSON file.
pub fn load_word_file(path: &Path) -> Result<WordBank> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read word file {}", path.display()))?;
    parse_word_list(&text).with_context(|| format!("invalid word file {}", path.display()))
}

/// Parse a JSON array of words, e.g. `["cat", "dog", "bird"]`.
pub fn parse_word_list(json: &str) -> Result<WordBank> {
    let words: Vec<String> =
        serde_json::from_str(json).context("word list must be a JSON array of strings")?;
    Ok(WordBank::new(words)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.max_words, 10);
        assert_eq!(config.session.score_increment, 20);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_MAX_WORDS, "5"),
            (ENV_SCORE_INCREMENT, " 50 "),
            (ENV_SEED, "42"),
            (ENV_WORDS_PATH, "/tmp/words.json"),
            (ENV_LOG_PATH, "/tmp/unscramble.log"),
        ]));
        assert_eq!(config.session.max_words, 5);
        assert_eq!(config.session.score_increment, 50);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.words_path, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/unscramble.log")));
    }

    #[test]
    fn garbage_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_MAX_WORDS, "ten"),
            (ENV_SCORE_INCREMENT, "-3"),
            (ENV_SEED, ""),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(config.session, SessionConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn parses_json_word_list() {
        let bank = parse_word_list(r#"["cat", "dog", "bird"]"#).unwrap();
        assert_eq!(bank.len(), 3);
        assert!(bank.contains("bird"));
    }

    #[test]
    fn rejects_malformed_word_lists() {
        assert!(parse_word_list(r#"{"words": ["cat"]}"#).is_err());
        assert!(parse_word_list("[]").is_err());

        let err = parse_word_list(r#"["cat", "Dog"]"#).unwrap_err();
        assert!(err.to_string().contains("not lowercase"));
    }

    #[test]
    fn missing_word_file_names_the_path() {
        let err = load_word_file(Path::new("/nonexistent/unscramble-words.json")).unwrap_err();
        assert!(err.to_string().contains("unscramble-words.json"));
    }
}
