//! Key mapping from terminal events to net keys.

use crate::types::NetKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the net key it steers, if any.
pub fn map_key(code: KeyCode) -> Option<NetKey> {
    match code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(NetKey::Down)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(NetKey::Up)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyCode::Down), Some(NetKey::Down));
        assert_eq!(map_key(KeyCode::Up), Some(NetKey::Up));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(map_key(KeyCode::Char('j')), Some(NetKey::Down));
        assert_eq!(map_key(KeyCode::Char('S')), Some(NetKey::Down));
        assert_eq!(map_key(KeyCode::Char('K')), Some(NetKey::Up));
        assert_eq!(map_key(KeyCode::Char('w')), Some(NetKey::Up));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyCode::Left), None);
        assert_eq!(map_key(KeyCode::Char(' ')), None);
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
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
