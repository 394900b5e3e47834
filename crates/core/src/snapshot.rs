/// Displayable copy of a [`crate::RoundState`].
///
/// Holds only what a screen may show; the answer stays inside the round state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RoundSnapshot {
    pub scrambled_word: String,
    pub score: u32,
    pub word_count: u32,
    pub max_words: u32,
}

impl RoundSnapshot {
    /// True once the last word of the session is on screen.
    pub fn on_last_word(&self) -> bool {
        self.max_words > 0 && self.word_count >= self.max_words
    }
}
