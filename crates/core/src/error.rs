//! Error type shared by the word bank and the round state.

use thiserror::Error;

/// Everything that can go wrong while building or advancing a session.
///
/// Bank and session validation errors are reported at construction.
/// [`Error::Unscramblable`] also covers a word whose reshuffles kept matching
/// it until the retry limit. [`Error::DrawExhausted`] means no unused word was
/// left to present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("configuration error: word bank is empty")]
    EmptyBank,

    #[error("configuration error: word bank contains an empty word")]
    EmptyWord,

    #[error("configuration error: word '{0}' is not lowercase")]
    NotLowercase(String),

    #[error("configuration error: word '{0}' appears more than once")]
    DuplicateWord(String),

    #[error("configuration error: a session needs at least one word")]
    ZeroMaxWords,

    #[error(
        "configuration error: word bank too small \
         ({scramblable} scramblable words for {max_words} rounds)"
    )]
    BankTooSmall { scramblable: usize, max_words: u32 },

    #[error("configuration error: word '{0}' cannot be scrambled")]
    Unscramblable(String),

    #[error("no unused word left to draw ({attempts} random draws missed)")]
    DrawExhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
