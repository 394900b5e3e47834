//! Screen controller: turns player actions into round-state calls.
//!
//! The controller owns the session's [`RoundState`] together with the little
//! bit of view state the screen needs (guess text, feedback line, whether the
//! final-score dialog is open). It never touches the terminal.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::core::{Result, RoundSnapshot, RoundState};
use crate::types::{GameAction, InputMode, MAX_GUESS_LEN};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    /// Session complete; the dialog offers to play again or exit.
    FinalScore { score: u32 },
}

/// Message shown under the guess field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    TryAgain,
    Correct,
    /// The previous word was skipped; it is revealed to the player.
    Skipped { word: String },
}

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Not applicable on the current screen.
    Ignored,
    /// The guess text changed.
    Edited,
    Wrong,
    Correct,
    Skipped,
    SessionComplete { score: u32 },
    Restarted,
    Exit,
}

/// Everything the screen renders for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub round: RoundSnapshot,
    pub guess: String,
    pub feedback: Feedback,
    pub screen: Screen,
}

pub struct ScreenController {
    round: RoundState,
    guess: ArrayVec<char, MAX_GUESS_LEN>,
    feedback: Feedback,
    screen: Screen,
    finished: bool,
}

impl ScreenController {
    pub fn new(round: RoundState) -> Self {
        info!(
            word_count = round.word_count(),
            max_words = round.max_words(),
            "screen controller created"
        );
        Self {
            round,
            guess: ArrayVec::new(),
            feedback: Feedback::None,
            screen: Screen::Playing,
            finished: false,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn guess(&self) -> String {
        self.guess.iter().collect()
    }

    /// True once the player chose to exit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn input_mode(&self) -> InputMode {
        match self.screen {
            Screen::Playing => InputMode::Typing,
            Screen::FinalScore { .. } => InputMode::Dialog,
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> Result<ActionOutcome> {
        let outcome = match (self.screen, action) {
            (_, GameAction::Exit) => {
                self.finished = true;
                ActionOutcome::Exit
            }
            (Screen::Playing, GameAction::Insert(c)) => {
                if c.is_control() || self.guess.try_push(c).is_err() {
                    ActionOutcome::Ignored
                } else {
                    ActionOutcome::Edited
                }
            }
            (Screen::Playing, GameAction::Backspace) => match self.guess.pop() {
                Some(_) => ActionOutcome::Edited,
                None => ActionOutcome::Ignored,
            },
            (Screen::Playing, GameAction::ClearInput) => {
                self.guess.clear();
                ActionOutcome::Edited
            }
            (Screen::Playing, GameAction::Submit) => self.submit()?,
            (Screen::Playing, GameAction::Skip) => self.skip()?,
            (Screen::FinalScore { .. }, GameAction::PlayAgain) => self.restart()?,
            _ => ActionOutcome::Ignored,
        };

        debug!(action = action.as_str(), ?outcome, "action applied");
        Ok(outcome)
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            round: self.round.snapshot(),
            guess: self.guess(),
            feedback: self.feedback.clone(),
            screen: self.screen,
        }
    }

    /// Surrounding whitespace of the typed text is dropped before checking.
    /// The round advances before the guess and feedback are touched, so a
    /// failed advance leaves the typed text on screen.
    fn submit(&mut self) -> Result<ActionOutcome> {
        let guess = self.guess();
        if !self.round.submit_guess(guess.trim()) {
            self.feedback = Feedback::TryAgain;
            return Ok(ActionOutcome::Wrong);
        }

        let more = self.round.advance_round()?;
        self.guess.clear();
        self.feedback = Feedback::Correct;
        if more {
            Ok(ActionOutcome::Correct)
        } else {
            Ok(self.complete())
        }
    }

    fn skip(&mut self) -> Result<ActionOutcome> {
        let skipped = self.round.current_word().to_string();
        let more = self.round.advance_round()?;
        self.guess.clear();
        if more {
            self.feedback = Feedback::Skipped { word: skipped };
            Ok(ActionOutcome::Skipped)
        } else {
            self.feedback = Feedback::None;
            Ok(self.complete())
        }
    }

    fn complete(&mut self) -> ActionOutcome {
        let score = self.round.score();
        self.screen = Screen::FinalScore { score };
        info!(score, words = self.round.word_count(), "session complete");
        ActionOutcome::SessionComplete { score }
    }

    fn restart(&mut self) -> Result<ActionOutcome> {
        self.round.reset()?;
        self.guess.clear();
        self.feedback = Feedback::None;
        self.screen = Screen::Playing;
        Ok(ActionOutcome::Restarted)
    }
}
