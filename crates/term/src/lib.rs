//! Terminal rendering for the word-scramble screen.
//!
//! A small, game-oriented rendering layer: the screen is drawn into a plain
//! framebuffer by a pure view, then flushed to the terminal by a renderer that
//! only rewrites rows that changed.
//!
//! - [`fb`]: styled character framebuffer
//! - [`screen_view`]: `ScreenSnapshot` -> framebuffer (pure, unit-tested)
//! - [`renderer`]: framebuffer -> terminal via crossterm

pub mod fb;
pub mod renderer;
pub mod screen_view;

pub use unscramble_engine as engine;
pub use unscramble_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
pub use screen_view::{AnchorY, ScreenView, Viewport, CARD_H, CARD_W};
