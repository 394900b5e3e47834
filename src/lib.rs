//! Unscramble (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces only
//! the binary needs: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use unscramble_core as core;
pub use unscramble_engine as engine;
pub use unscramble_input as input;
pub use unscramble_term as term;
pub use unscramble_types as types;
