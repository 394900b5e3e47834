//! Round state module - word selection and round progression
//!
//! [`RoundState`] owns everything a session tracks: the score, how many words
//! were presented, which words were used, and the active word with its
//! scramble. Guessing and advancing are separate steps; the caller decides
//! when to move on and what to do once [`RoundState::advance_round`] reports
//! that the session is complete.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::scramble::{is_scramblable, scramble};
use crate::snapshot::RoundSnapshot;
use crate::types::{MAX_DRAW_ATTEMPTS, MAX_NO_OF_WORDS, SCORE_INCREASE};
use crate::word_bank::WordBank;

/// Per-session rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Words presented before the session completes.
    pub max_words: u32,
    /// Points added for each correct guess.
    pub score_increment: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_NO_OF_WORDS,
            score_increment: SCORE_INCREASE,
        }
    }
}

/// Score, history and active word of one session.
#[derive(Debug, Clone)]
pub struct RoundState<R = StdRng> {
    bank: WordBank,
    config: SessionConfig,
    rng: R,
    score: u32,
    word_count: u32,
    /// Words presented this session, in presentation order.
    used_words: Vec<String>,
    current_word: String,
    current_scrambled_word: String,
}

impl<R: Rng> RoundState<R> {
    /// Validate the configuration and present the first word.
    ///
    /// The bank must hold at least `max_words` words that can be scrambled,
    /// otherwise selection could never complete a session.
    pub fn new(bank: WordBank, config: SessionConfig, rng: R) -> Result<Self> {
        if config.max_words == 0 {
            return Err(Error::ZeroMaxWords);
        }
        let scramblable = bank.scramblable_count();
        if scramblable < config.max_words as usize {
            return Err(Error::BankTooSmall {
                scramblable,
                max_words: config.max_words,
            });
        }

        let mut state = Self {
            bank,
            config,
            rng,
            score: 0,
            word_count: 0,
            used_words: Vec::with_capacity(config.max_words as usize),
            current_word: String::new(),
            current_scrambled_word: String::new(),
        };
        state.select_next_word()?;

        info!(
            bank_size = state.bank.len(),
            max_words = config.max_words,
            score_increment = config.score_increment,
            "round state created"
        );
        Ok(state)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    pub fn max_words(&self) -> u32 {
        self.config.max_words
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// The answer of the active round.
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn current_scrambled_word(&self) -> &str {
        &self.current_scrambled_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// True when the active word is the last one of the session.
    pub fn is_last_round(&self) -> bool {
        self.word_count >= self.config.max_words
    }

    /// Present the next word if the session has words left.
    ///
    /// Returns `Ok(false)` without touching any state once `max_words` words
    /// were presented.
    pub fn advance_round(&mut self) -> Result<bool> {
        if self.word_count < self.config.max_words {
            self.select_next_word()?;
            Ok(true)
        } else {
            debug!(score = self.score, "session complete");
            Ok(false)
        }
    }

    /// Compare a guess against the active word, ignoring case. The input is
    /// compared as given; a correct guess adds the score increment.
    pub fn submit_guess(&mut self, candidate: &str) -> bool {
        let correct = candidate.to_lowercase() == self.current_word.to_lowercase();
        if correct {
            self.score = self.score.saturating_add(self.config.score_increment);
        }
        debug!(correct, score = self.score, "guess submitted");
        correct
    }

    /// Start a new session with the same bank and rules.
    pub fn reset(&mut self) -> Result<()> {
        self.score = 0;
        self.word_count = 0;
        self.used_words.clear();
        self.select_next_word()?;
        info!("round state reset");
        Ok(())
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut snap = RoundSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its string allocation.
    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.scrambled_word.clear();
        out.scrambled_word.push_str(&self.current_scrambled_word);
        out.score = self.score;
        out.word_count = self.word_count;
        out.max_words = self.config.max_words;
    }

    fn select_next_word(&mut self) -> Result<()> {
        let word = self.draw_unused_word()?;
        let scrambled = scramble(&word, &mut self.rng)?;

        self.used_words.push(word.clone());
        self.current_word = word;
        self.current_scrambled_word = scrambled;
        self.word_count += 1;

        debug!(
            word_count = self.word_count,
            scrambled = %self.current_scrambled_word,
            "next word selected"
        );
        Ok(())
    }

    /// Pick a word that was not presented yet and can be scrambled.
    ///
    /// Rejection sampling covers the common case. Late in a long session most
    /// draws hit used words, so after `MAX_DRAW_ATTEMPTS` misses the pick is
    /// made uniformly among the remaining candidates instead.
    fn draw_unused_word(&mut self) -> Result<String> {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let candidate = self.bank.pick_random(&mut self.rng);
            if self.is_candidate(candidate) {
                return Ok(candidate.to_string());
            }
        }
        debug!(
            used = self.used_words.len(),
            "draw bound reached, picking from remaining words"
        );
        self.pick_remaining_word()
    }

    fn pick_remaining_word(&mut self) -> Result<String> {
        let remaining: Vec<&str> = self
            .bank
            .iter()
            .filter(|w| self.is_candidate(w))
            .collect();
        if remaining.is_empty() {
            return Err(Error::DrawExhausted {
                attempts: MAX_DRAW_ATTEMPTS,
            });
        }
        let i = self.rng.random_range(0..remaining.len());
        Ok(remaining[i].to_string())
    }

    fn is_candidate(&self, word: &str) -> bool {
        is_scramblable(word) && !self.used_words.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::session_rng;
    use crate::scramble::is_anagram;

    fn small_state(max_words: u32) -> RoundState {
        let bank = WordBank::new(["cat", "dog", "bird"]).unwrap();
        let config = SessionConfig {
            max_words,
            score_increment: 20,
        };
        RoundState::new(bank, config, session_rng(Some(42))).unwrap()
    }

    #[test]
    fn new_state_presents_first_word() {
        let state = small_state(2);
        assert_eq!(state.word_count(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.used_words(), &[state.current_word().to_string()]);
        assert!(is_anagram(state.current_word(), state.current_scrambled_word()));
        assert_ne!(state.current_word(), state.current_scrambled_word());
    }

    #[test]
    fn zero_max_words_is_rejected() {
        let bank = WordBank::new(["cat"]).unwrap();
        let config = SessionConfig {
            max_words: 0,
            score_increment: 20,
        };
        let err = RoundState::new(bank, config, session_rng(Some(1))).unwrap_err();
        assert_eq!(err, Error::ZeroMaxWords);
    }

    #[test]
    fn bank_smaller_than_session_is_rejected() {
        let bank = WordBank::new(["cat", "dog", "aa", "b"]).unwrap();
        let config = SessionConfig {
            max_words: 3,
            score_increment: 20,
        };
        let err = RoundState::new(bank, config, session_rng(Some(1))).unwrap_err();
        assert_eq!(
            err,
            Error::BankTooSmall {
                scramblable: 2,
                max_words: 3
            }
        );
    }

    #[test]
    fn unscramblable_words_are_never_presented() {
        let bank = WordBank::new(["cat", "dog", "aa", "b"]).unwrap();
        let config = SessionConfig {
            max_words: 2,
            score_increment: 20,
        };
        let mut state = RoundState::new(bank, config, session_rng(Some(5))).unwrap();
        assert!(state.advance_round().unwrap());

        let mut used = state.used_words().to_vec();
        used.sort();
        assert_eq!(used, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn bank_exactly_as_large_as_session_completes() {
        let bank = WordBank::new(["cat", "dog", "bird"]).unwrap();
        let config = SessionConfig {
            max_words: 3,
            score_increment: 20,
        };
        let mut state = RoundState::new(bank, config, session_rng(Some(8))).unwrap();
        assert!(state.advance_round().unwrap());
        assert!(state.advance_round().unwrap());
        assert!(!state.advance_round().unwrap());
        assert_eq!(state.used_words().len(), 3);
    }

    #[test]
    fn guess_is_compared_as_given() {
        let mut state = small_state(2);
        let padded = format!(" {}", state.current_word());
        assert!(!state.submit_guess(&padded));
        assert_eq!(state.score(), 0);

        let shouted = state.current_word().to_uppercase();
        assert!(state.submit_guess(&shouted));
        assert_eq!(state.score(), 20);
    }

    #[test]
    fn remaining_word_pick_finds_the_last_unused_word() {
        let mut state = small_state(3);
        state.advance_round().unwrap();
        let mut unused: Vec<&str> = ["cat", "dog", "bird"]
            .into_iter()
            .filter(|w| !state.used_words().iter().any(|u| u == w))
            .collect();
        assert_eq!(unused.len(), 1);
        let last = unused.pop().unwrap();

        assert_eq!(state.pick_remaining_word().unwrap(), last);
    }

    #[test]
    fn remaining_word_pick_fails_only_when_bank_is_spent() {
        let mut state = small_state(3);
        state.advance_round().unwrap();
        state.advance_round().unwrap();
        assert_eq!(
            state.pick_remaining_word().unwrap_err(),
            Error::DrawExhausted {
                attempts: MAX_DRAW_ATTEMPTS
            }
        );
    }

    #[test]
    fn empty_guess_is_wrong() {
        let mut state = small_state(2);
        assert!(!state.submit_guess(""));
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn last_round_flag_follows_word_count() {
        let mut state = small_state(2);
        assert!(!state.is_last_round());
        state.advance_round().unwrap();
        assert!(state.is_last_round());
    }

    #[test]
    fn snapshot_copies_display_fields() {
        let mut state = small_state(2);
        state.submit_guess(&state.current_word().to_string());
        let snap = state.snapshot();
        assert_eq!(snap.scrambled_word, state.current_scrambled_word());
        assert_eq!(snap.score, 20);
        assert_eq!(snap.word_count, 1);
        assert_eq!(snap.max_words, 2);
        assert!(!snap.on_last_word());
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = small_state(3);
        let mut b = small_state(3);
        for _ in 0..2 {
            a.advance_round().unwrap();
            b.advance_round().unwrap();
        }
        assert_eq!(a.used_words(), b.used_words());
        assert_eq!(a.current_scrambled_word(), b.current_scrambled_word());
    }
}
