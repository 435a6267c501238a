//! Key mapping from terminal events to UI actions.
//!
//! The engine consumes tile ids, not keys; everything here is a
//! presentation-level intent that `main` translates into engine calls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User intents the terminal front end understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the selection to the previous clickable tile.
    SelectPrev,
    /// Move the selection to the next clickable tile.
    SelectNext,
    /// Pick the selected board tile into the slot row.
    Pick,
    /// Move the oldest buffer tile into the slot row.
    BufferPick,
    /// Move-out booster.
    MoveOut,
    /// Undo booster.
    Undo,
    /// Shuffle booster.
    Shuffle,
    /// Re-deal the current level.
    Restart,
    /// Advance to the next level (after a win).
    NextLevel,
}

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Selection
        KeyCode::Left
        | KeyCode::Up
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(UiAction::SelectPrev),
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(UiAction::SelectNext),

        // Picking
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Pick),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(UiAction::BufferPick),

        // Boosters
        KeyCode::Char('m') | KeyCode::Char('M') => Some(UiAction::MoveOut),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(UiAction::Undo),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::Shuffle),

        // Level control
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(UiAction::NextLevel),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(UiAction::SelectPrev)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(UiAction::SelectNext)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(UiAction::SelectPrev)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(UiAction::SelectNext)
        );
    }

    #[test]
    fn test_pick_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(UiAction::Pick)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(UiAction::Pick)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('b'))),
            Some(UiAction::BufferPick)
        );
    }

    #[test]
    fn test_booster_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(UiAction::MoveOut)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(UiAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(UiAction::Shuffle)
        );
    }

    #[test]
    fn test_level_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(UiAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(UiAction::NextLevel)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
