//! Screen controller for the word-scramble game.
//!
//! Sits between the key mapping and the renderer: it receives
//! [`types::GameAction`]s, drives the [`core::RoundState`], and exposes a
//! [`ScreenSnapshot`] for drawing.

pub mod controller;

pub use unscramble_core as core;
pub use unscramble_types as types;

pub use controller::{ActionOutcome, Feedback, Screen, ScreenController, ScreenSnapshot};
