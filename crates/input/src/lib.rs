//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. The same
//! key means different things depending on whether the guess field or the
//! final-score dialog has focus, so every mapping takes an
//! [`crate::types::InputMode`].

pub mod map;

pub use unscramble_types as types;

pub use map::{handle_key_event, should_quit};
