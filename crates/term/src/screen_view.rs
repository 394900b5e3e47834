//! ScreenView: maps an engine `ScreenSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::{Feedback, Screen, ScreenSnapshot};
use crate::fb::{text_width, Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Card size in terminal cells.
pub const CARD_W: u16 = 44;
pub const CARD_H: u16 = 15;

const DIALOG_W: u16 = 36;
const DIALOG_H: u16 = 7;

// Rows inside the card, relative to its top border.
const ROW_PROGRESS: u16 = 1;
const ROW_HINT: u16 = 2;
const ROW_WORD: u16 = 4;
const ROW_INSTRUCTIONS: u16 = 7;
const ROW_GUESS: u16 = 9;
const ROW_FEEDBACK: u16 = 10;
const ROW_KEYS: u16 = 12;
const ROW_QUIT: u16 = 13;

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const TITLE: CellStyle = CellStyle::new(Rgb::new(240, 220, 80), BG).bold();
const WORD: CellStyle = CellStyle::new(Rgb::new(80, 220, 220), Rgb::new(30, 30, 40)).bold();
const FIELD: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(30, 30, 40));
const HELP: CellStyle = CellStyle::new(Rgb::new(140, 140, 140), BG).dim();
const ERROR: CellStyle = CellStyle::new(Rgb::new(220, 80, 80), BG).bold();
const SUCCESS: CellStyle = CellStyle::new(Rgb::new(100, 220, 120), BG).bold();

/// Where the card sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardRect {
    x: u16,
    y: u16,
    w: u16,
}

/// Renders the game screen: progress, score, scrambled word, guess field,
/// feedback, and the final-score dialog.
pub struct ScreenView {
    anchor_y: AnchorY,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl ScreenView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &ScreenSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: TEXT,
        });

        let card = self.card_rect(viewport);
        fb.draw_box(card.x, card.y, card.w, CARD_H, BORDER);
        fb.put_str_centered(card.x, card.y, card.w, " UNSCRAMBLE ", TITLE);

        self.draw_progress(fb, snap, card);
        self.draw_word(fb, &snap.round.scrambled_word, card);
        fb.put_str_centered(
            card.x,
            card.y + ROW_INSTRUCTIONS,
            card.w,
            "Use all the letters to find the word.",
            TEXT,
        );
        self.draw_guess(fb, &snap.guess, card);
        self.draw_feedback(fb, &snap.feedback, card);
        fb.put_str_centered(
            card.x,
            card.y + ROW_KEYS,
            card.w,
            "[Enter] Submit  [Tab] Skip  [Esc] Clear",
            HELP,
        );
        fb.put_str_centered(card.x, card.y + ROW_QUIT, card.w, "[Ctrl-C] Quit", HELP);

        if let Screen::FinalScore { score } = snap.screen {
            self.draw_final_dialog(fb, score, card);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ScreenSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal cursor position at the end of the guess, while typing.
    pub fn cursor_position(&self, snap: &ScreenSnapshot, viewport: Viewport) -> Option<(u16, u16)> {
        if snap.screen != Screen::Playing {
            return None;
        }
        let card = self.card_rect(viewport);
        let (field_x, field_w) = guess_field(card);
        let shown = text_width(&snap.guess).min(field_w.saturating_sub(1));
        let x = field_x + shown;
        let y = card.y + ROW_GUESS;
        (x < viewport.width && y < viewport.height).then_some((x, y))
    }

    fn card_rect(&self, viewport: Viewport) -> CardRect {
        let w = CARD_W.min(viewport.width);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(CARD_H) / 2,
            AnchorY::Top => 0,
        };
        CardRect { x, y, w }
    }

    fn draw_progress(&self, fb: &mut FrameBuffer, snap: &ScreenSnapshot, card: CardRect) {
        let y = card.y + ROW_PROGRESS;
        let progress = format!("Word {} of {}", snap.round.word_count, snap.round.max_words);
        fb.put_str(card.x + 2, y, &progress, TEXT);

        let score = format!("Score: {}", snap.round.score);
        let score_x = (card.x + card.w).saturating_sub(2 + text_width(&score));
        fb.put_str(score_x, y, &score, TEXT.bold());

        if snap.screen == Screen::Playing && snap.round.on_last_word() {
            fb.put_str_centered(card.x, card.y + ROW_HINT, card.w, "Last word!", TITLE);
        }
    }

    fn draw_word(&self, fb: &mut FrameBuffer, scrambled: &str, card: CardRect) {
        let spaced = spaced_letters(scrambled);
        let box_w = text_width(&spaced) + 4;
        let box_x = card.x + card.w.saturating_sub(box_w) / 2;
        let y = card.y + ROW_WORD;

        fb.draw_box(box_x, y - 1, box_w, 3, BORDER);
        fb.fill_rect(box_x + 1, y, box_w.saturating_sub(2), 1, ' ', WORD);
        fb.put_str(box_x + 2, y, &spaced, WORD);
    }

    fn draw_guess(&self, fb: &mut FrameBuffer, guess: &str, card: CardRect) {
        let y = card.y + ROW_GUESS;
        let (field_x, field_w) = guess_field(card);
        fb.put_str(field_x.saturating_sub(2), y, "> ", TEXT.bold());
        fb.fill_rect(field_x, y, field_w, 1, ' ', FIELD);

        // Keep the end of a long guess visible, leaving a column for the cursor.
        let visible = field_w.saturating_sub(1) as usize;
        let skip = guess.chars().count().saturating_sub(visible);
        let tail: String = guess.chars().skip(skip).collect();
        fb.put_str(field_x, y, &tail, FIELD);
    }

    fn draw_feedback(&self, fb: &mut FrameBuffer, feedback: &Feedback, card: CardRect) {
        let y = card.y + ROW_FEEDBACK;
        match feedback {
            Feedback::None => {}
            Feedback::TryAgain => fb.put_str_centered(card.x, y, card.w, "Try again!", ERROR),
            Feedback::Correct => fb.put_str_centered(card.x, y, card.w, "Correct!", SUCCESS),
            Feedback::Skipped { word } => {
                let text = format!("Skipped. The word was \"{word}\".");
                fb.put_str_centered(card.x, y, card.w, &text, HELP);
            }
        }
    }

    fn draw_final_dialog(&self, fb: &mut FrameBuffer, score: u32, card: CardRect) {
        let w = DIALOG_W.min(card.w);
        let x = card.x + card.w.saturating_sub(w) / 2;
        let y = card.y + CARD_H.saturating_sub(DIALOG_H) / 2;

        fb.fill_rect(x, y, w, DIALOG_H, ' ', TEXT);
        fb.draw_box(x, y, w, DIALOG_H, TITLE);
        fb.put_str_centered(x, y + 1, w, "Congratulations!", TITLE);
        fb.put_str_centered(x, y + 3, w, &format!("You scored: {score}!"), TEXT.bold());
        fb.put_str_centered(x, y + 5, w, "[Enter] Play again   [Esc] Exit", HELP);
    }
}

/// Start column and width of the guess input area.
fn guess_field(card: CardRect) -> (u16, u16) {
    let x = card.x + 4;
    let w = card.w.saturating_sub(6);
    (x, w)
}

/// "lepap" -> "l e p a p"
fn spaced_letters(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
