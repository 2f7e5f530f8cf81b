//! Key mapping from terminal events to input tokens and commands.

use crate::types::{Command, Direction, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convert a crossterm key event into an input token.
///
/// Keys the game has no name for are dropped.
pub fn key_from_event(key: KeyEvent) -> Option<Key> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Key::Interrupt);
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Map an input token to a game command.
pub fn command_for(key: Key) -> Option<Command> {
    match key {
        // Movement
        Key::Up => Some(Command::Move(Direction::Up)),
        Key::Down => Some(Command::Move(Direction::Down)),
        Key::Left => Some(Command::Move(Direction::Left)),
        Key::Right => Some(Command::Move(Direction::Right)),

        // Field actions
        Key::Space => Some(Command::Reveal),
        Key::Char('f') | Key::Char('F') => Some(Command::Flag),

        // Menus
        Key::Char('n') | Key::Char('N') => Some(Command::NewGame),
        Key::Char('h') | Key::Char('H') | Key::Char('?') => Some(Command::Help),
        Key::Char('c') | Key::Char('C') => Some(Command::Close),

        // Quit
        Key::Char('q') | Key::Char('Q') | Key::Esc | Key::Interrupt => Some(Command::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_event_to_token() {
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Esc)), Some(Key::Esc));
        assert_eq!(
            key_from_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Key::Space)
        );
        assert_eq!(
            key_from_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(Key::Char('n'))
        );
        assert_eq!(
            key_from_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::F(5))), None);
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(command_for(Key::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(command_for(Key::Down), Some(Command::Move(Direction::Down)));
        assert_eq!(command_for(Key::Left), Some(Command::Move(Direction::Left)));
        assert_eq!(
            command_for(Key::Right),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(command_for(Key::Space), Some(Command::Reveal));
        assert_eq!(command_for(Key::Char('f')), Some(Command::Flag));
        assert_eq!(command_for(Key::Char('n')), Some(Command::NewGame));
        assert_eq!(command_for(Key::Char('h')), Some(Command::Help));
        assert_eq!(command_for(Key::Char('c')), Some(Command::Close));
        assert_eq!(command_for(Key::Char('x')), None);
        assert_eq!(command_for(Key::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        for key in [Key::Char('q'), Key::Char('Q'), Key::Esc, Key::Interrupt] {
            assert_eq!(command_for(key), Some(Command::Quit));
        }
        assert_ne!(command_for(Key::Char('c')), Some(Command::Quit));
    }
}
