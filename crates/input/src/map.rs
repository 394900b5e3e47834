//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions for the given input mode.
pub fn handle_key_event(key: KeyEvent, mode: InputMode) -> Option<GameAction> {
    // Ctrl/Alt chords never type into the guess field.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match mode {
        InputMode::Typing => match key.code {
            KeyCode::Enter => Some(GameAction::Submit),
            KeyCode::Tab => Some(GameAction::Skip),
            KeyCode::Backspace => Some(GameAction::Backspace),
            KeyCode::Esc => Some(GameAction::ClearInput),
            KeyCode::Char(c) if !c.is_control() => Some(GameAction::Insert(c)),
            _ => None,
        },
        InputMode::Dialog => match key.code {
            KeyCode::Enter
            | KeyCode::Char('r')
            | KeyCode::Char('R')
            | KeyCode::Char('p')
            | KeyCode::Char('P') => Some(GameAction::PlayAgain),
            KeyCode::Esc
            | KeyCode::Char('q')
            | KeyCode::Char('Q')
            | KeyCode::Char('x')
            | KeyCode::Char('X') => Some(GameAction::Exit),
            _ => None,
        },
    }
}

/// Check if key should quit the game regardless of the screen.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn typing(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), InputMode::Typing)
    }

    fn dialog(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), InputMode::Dialog)
    }

    #[test]
    fn test_typing_keys() {
        assert_eq!(typing(KeyCode::Char('a')), Some(GameAction::Insert('a')));
        assert_eq!(typing(KeyCode::Char('Q')), Some(GameAction::Insert('Q')));
        assert_eq!(typing(KeyCode::Char('-')), Some(GameAction::Insert('-')));
        assert_eq!(typing(KeyCode::Backspace), Some(GameAction::Backspace));
        assert_eq!(typing(KeyCode::Esc), Some(GameAction::ClearInput));
    }

    #[test]
    fn test_round_keys() {
        assert_eq!(typing(KeyCode::Enter), Some(GameAction::Submit));
        assert_eq!(typing(KeyCode::Tab), Some(GameAction::Skip));
        assert_eq!(typing(KeyCode::Up), None);
    }

    #[test]
    fn test_dialog_keys() {
        assert_eq!(dialog(KeyCode::Enter), Some(GameAction::PlayAgain));
        assert_eq!(dialog(KeyCode::Char('r')), Some(GameAction::PlayAgain));
        assert_eq!(dialog(KeyCode::Esc), Some(GameAction::Exit));
        assert_eq!(dialog(KeyCode::Char('q')), Some(GameAction::Exit));
        assert_eq!(dialog(KeyCode::Char('a')), None);
        assert_eq!(dialog(KeyCode::Tab), None);
    }

    #[test]
    fn test_chords_are_not_typed() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_a, InputMode::Typing), None);

        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            handle_key_event(shift_a, InputMode::Typing),
            Some(GameAction::Insert('A'))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
