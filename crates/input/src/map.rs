//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command.
pub fn command_for_key(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Down => Some(GameCommand::Drop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_drop_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Down] {
            assert_eq!(
                command_for_key(KeyEvent::from(code)),
                Some(GameCommand::Drop)
            );
        }
    }

    #[test]
    fn test_pause_and_restart_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameCommand::TogglePause)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('P'))),
            Some(GameCommand::TogglePause)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameCommand::Restart)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameCommand::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }
}
