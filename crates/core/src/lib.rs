//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the word-scramble game. It has no
//! dependencies on the terminal, the keyboard or the file system:
//!
//! - **Deterministic**: a seeded RNG reproduces a whole session
//! - **Testable**: every invariant of a session is checked by unit tests
//! - **Portable**: the same state drives the terminal screen or a headless run
//!
//! # Module Structure
//!
//! - [`word_bank`]: validated, immutable set of candidate words
//! - [`scramble`]: letter shuffling that never returns the word itself
//! - [`round_state`]: score, used words and the active word of a session
//! - [`snapshot`]: displayable copy of a round state
//! - [`rng`]: seeded or OS-seeded session RNGs
//! - [`error`]: configuration and selection errors
//!
//! # Game Rules
//!
//! - A session presents `max_words` words (10 by default), never the same word twice
//! - Each word is shown with its letters shuffled; the shuffle always differs from the word
//! - A correct guess (case-insensitive) adds 20 points by default
//! - Skipping moves on without points
//! - Once the last word was presented, advancing reports the end of the session
//!
//! # Example
//!
//! ```
//! use unscramble_core::{session_rng, RoundState, SessionConfig, WordBank};
//!
//! let bank = WordBank::new(["cat", "dog", "bird"]).unwrap();
//! let config = SessionConfig { max_words: 2, score_increment: 20 };
//! let mut round = RoundState::new(bank, config, session_rng(Some(12345))).unwrap();
//!
//! let answer = round.current_word().to_uppercase();
//! assert!(round.submit_guess(&answer));
//! assert_eq!(round.score(), 20);
//!
//! assert!(round.advance_round().unwrap());
//! assert_eq!(round.word_count(), 2);
//! assert!(!round.advance_round().unwrap());
//! ```

pub mod error;
pub mod rng;
pub mod round_state;
pub mod scramble;
pub mod snapshot;
pub mod word_bank;

pub use unscramble_types as types;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use rng::session_rng;
pub use round_state::{RoundState, SessionConfig};
pub use scramble::{is_anagram, is_scramblable, scramble};
pub use snapshot::RoundSnapshot;
pub use word_bank::{WordBank, DEFAULT_WORDS};
