//! Core types module - shared constants and actions
//!
//! This crate defines the small vocabulary shared by every other crate in the
//! workspace. It has no dependencies, so it can be used from the round logic,
//! the screen controller, the key mapping and the renderer alike.
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_NO_OF_WORDS` | 10 | Words presented per session |
//! | `SCORE_INCREASE` | 20 | Points awarded per correct guess |
//! | `MAX_GUESS_LEN` | 32 | Capacity of the guess input field |
//! | `TICK_MS` | 100 | Event poll timeout of the terminal loop |
//!
//! # Selection Bounds
//!
//! Word selection uses rejection sampling. Both retry loops are bounded so a
//! misconfigured word bank fails loudly instead of spinning forever:
//!
//! - `MAX_DRAW_ATTEMPTS`: redraws while the candidate was already used
//! - `MAX_SHUFFLE_ATTEMPTS`: reshuffles while the scramble equals the word
//!
//! # Examples
//!
//! ```
//! use unscramble_types::{GameAction, InputMode, MAX_NO_OF_WORDS, SCORE_INCREASE};
//!
//! assert_eq!(MAX_NO_OF_WORDS, 10);
//! assert_eq!(SCORE_INCREASE, 20);
//!
//! assert_eq!(GameAction::Submit.as_str(), "submit");
//! assert_eq!(InputMode::default(), InputMode::Typing);
//! ```

/// Number of words presented in one session.
pub const MAX_NO_OF_WORDS: u32 = 10;

/// Points awarded for each correctly unscrambled word.
pub const SCORE_INCREASE: u32 = 20;

/// Maximum number of characters the guess field accepts.
pub const MAX_GUESS_LEN: usize = 32;

/// Event poll timeout of the terminal loop in milliseconds.
pub const TICK_MS: u32 = 100;

/// Random redraws for an unused word before picking among the remaining ones.
pub const MAX_DRAW_ATTEMPTS: u32 = 1024;

/// Upper bound on reshuffles while the scramble still equals the word.
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 64;

/// Actions the player can perform on the game screen.
///
/// `Insert` carries the typed character; every other action is a bare signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Append a character to the guess field
    Insert(char),
    /// Delete the last character of the guess field
    Backspace,
    /// Empty the guess field
    ClearInput,
    /// Check the guess against the current word
    Submit,
    /// Move on to the next word without scoring
    Skip,
    /// Start a new session from the final-score dialog
    PlayAgain,
    /// Leave the game
    Exit,
}

impl GameAction {
    /// Convert to a camelCase name, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Insert(_) => "insert",
            GameAction::Backspace => "backspace",
            GameAction::ClearInput => "clearInput",
            GameAction::Submit => "submit",
            GameAction::Skip => "skip",
            GameAction::PlayAgain => "playAgain",
            GameAction::Exit => "exit",
        }
    }
}

/// What the keyboard currently drives.
///
/// - **Typing**: the guess field has focus
/// - **Dialog**: the final-score dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Typing,
    Dialog,
}
