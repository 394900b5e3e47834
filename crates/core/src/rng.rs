//! RNG module - session random number generators
//!
//! Sessions draw words and shuffle letters from a [`StdRng`]. Seeding it makes
//! a whole session reproducible, which the tests and benchmarks rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the RNG for a session.
///
/// `Some(seed)` gives a deterministic sequence; `None` seeds from the OS.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
