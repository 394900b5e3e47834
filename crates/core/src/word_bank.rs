//! Word bank module - the fixed set of candidate words
//!
//! A [`WordBank`] is validated once at construction (non-empty, lowercase, no
//! duplicates) and never changes afterwards. Picking a word does not remove
//! it; avoiding repeats within a session is the round state's job.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Error, Result};
use crate::scramble::is_scramblable;

/// Built-in words used when no word file is configured.
pub const DEFAULT_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
    "bench", "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat",
    "cauliflower", "chat", "children", "class", "classic", "classroom", "coffee", "colorful",
    "cookie", "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine", "dream",
    "dusk", "eating", "elephant", "emerald", "eerie", "electric", "finish", "flowers", "follow",
    "fox", "frame", "free", "frequent", "funnel", "green", "guitar", "grocery", "glass", "great",
    "giggle", "haircut", "half", "homemade", "happen", "honey", "hurry", "hundred", "ice",
    "igloo", "invest", "invite", "icon", "introduce", "joke", "jovial", "journal", "jump", "join",
    "kangaroo", "keyboard", "kitchen", "koala", "kind", "kaleidoscope", "landscape", "late",
    "laugh", "learning", "lemon", "letter", "lily", "magazine", "marine", "marshmallow", "maze",
    "meditate", "melody", "minute", "monument", "moon", "motorcycle", "mountain", "music",
    "north", "nose", "night", "name", "never", "negotiate", "number", "opposite", "octopus",
    "oak", "order", "open", "polar", "pack", "painting", "person", "picnic", "pillow", "pizza",
    "podcast", "presentation", "puppy", "puzzle", "recipe", "release", "restaurant", "revolve",
    "rewind", "room", "run", "secret", "seed", "ship", "shirt", "should", "small", "spaceship",
    "stargazing", "skill", "street", "style", "sunrise", "taxi", "tidy", "timer", "together",
    "tooth", "tourist", "travel", "truck", "under", "useful", "unicorn", "unique", "uplift",
    "uniform", "vase", "violin", "visitor", "vision", "volume", "view", "walrus", "wander",
    "world", "winter", "well", "whirlwind", "x-ray", "xylophone", "yoga", "yogurt", "yoyo", "you",
    "year", "yummy", "zebra", "zigzag", "zoology", "zone", "zeal",
];

/// Immutable, validated set of lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from any list of words.
    ///
    /// # Examples
    ///
    /// ```
    /// use unscramble_core::{Error, WordBank};
    ///
    /// let bank = WordBank::new(["cat", "dog", "bird"]).unwrap();
    /// assert_eq!(bank.len(), 3);
    ///
    /// assert_eq!(WordBank::new(Vec::<String>::new()), Err(Error::EmptyBank));
    /// assert_eq!(
    ///     WordBank::new(["cat", "Dog"]),
    ///     Err(Error::NotLowercase("Dog".to_string()))
    /// );
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(Error::EmptyBank);
        }

        let mut seen = HashSet::with_capacity(words.len());
        for word in &words {
            if word.is_empty() {
                return Err(Error::EmptyWord);
            }
            if word.chars().any(char::is_uppercase) {
                return Err(Error::NotLowercase(word.clone()));
            }
            if !seen.insert(word.as_str()) {
                return Err(Error::DuplicateWord(word.clone()));
            }
        }

        Ok(Self { words })
    }

    /// Uniformly pick one word. Every call is independent of the previous ones.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> &str {
        // Non-empty by construction.
        let i = rng.random_range(0..self.words.len());
        &self.words[i]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words that have a scramble different from themselves.
    pub fn scramblable_count(&self) -> usize {
        self.words.iter().filter(|w| is_scramblable(w)).count()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
