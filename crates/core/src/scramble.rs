//! Scramble module - letter shuffling with a non-identity guarantee
//!
//! A scramble is a Fisher-Yates shuffle of the word's characters. Shuffles
//! that reproduce the word are rejected and retried, up to
//! [`MAX_SHUFFLE_ATTEMPTS`] times.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::types::MAX_SHUFFLE_ATTEMPTS;

/// A word can only be scrambled if it has at least two distinct characters.
pub fn is_scramblable(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

/// Shuffle the characters of `word` into a different string.
///
/// # Examples
///
/// ```
/// use unscramble_core::{is_anagram, scramble, session_rng, Error};
///
/// let mut rng = session_rng(Some(1));
/// let scrambled = scramble("apple", &mut rng).unwrap();
/// assert_ne!(scrambled, "apple");
/// assert!(is_anagram(&scrambled, "apple"));
///
/// assert_eq!(scramble("aaa", &mut rng), Err(Error::Unscramblable("aaa".into())));
/// ```
pub fn scramble<R: Rng>(word: &str, rng: &mut R) -> Result<String> {
    if !is_scramblable(word) {
        return Err(Error::Unscramblable(word.to_string()));
    }

    let mut chars: Vec<char> = word.chars().collect();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return Ok(candidate);
        }
    }

    Err(Error::Unscramblable(word.to_string()))
}

/// True if both strings contain exactly the same characters.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
