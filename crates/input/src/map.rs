//! Key and mouse mapping from terminal events to game actions.

use crate::types::{Direction, SnakeAction, SpawnRequest, SPAWN_BATCH};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton};

/// Map keyboard input to snake actions.
pub fn snake_action(key: KeyEvent) -> Option<SnakeAction> {
    if should_quit(key) {
        return Some(SnakeAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(SnakeAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(SnakeAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(SnakeAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(SnakeAction::Turn(Direction::Right))
        }

        KeyCode::Char(' ') => Some(SnakeAction::TogglePause),

        _ => None,
    }
}

/// Spawn request for a mouse button press.
pub fn spawn_for_button(button: MouseButton) -> SpawnRequest {
    match button {
        MouseButton::Left => SpawnRequest::Flat(SPAWN_BATCH),
        MouseButton::Right => SpawnRequest::RoundUpTo(100),
        MouseButton::Middle => SpawnRequest::RoundUpTo(1000),
    }
}

/// Keyboard stand-ins for the mouse buttons (`1`, `2`, `3`).
pub fn spawn_for_key(key: KeyEvent) -> Option<SpawnRequest> {
    match key.code {
        KeyCode::Char('1') => Some(spawn_for_button(MouseButton::Left)),
        KeyCode::Char('2') => Some(spawn_for_button(MouseButton::Right)),
        KeyCode::Char('3') => Some(spawn_for_button(MouseButton::Middle)),
        _ => None,
    }
}

/// Check if key should quit the program.
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
    fn test_direction_keys() {
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Left)),
            Some(SnakeAction::Turn(Direction::Left))
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Right)),
            Some(SnakeAction::Turn(Direction::Right))
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Up)),
            Some(SnakeAction::Turn(Direction::Up))
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Down)),
            Some(SnakeAction::Turn(Direction::Down))
        );

        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Char('W'))),
            Some(SnakeAction::Turn(Direction::Up))
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Char('d'))),
            Some(SnakeAction::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_pause_and_quit_keys() {
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Char(' '))),
            Some(SnakeAction::TogglePause)
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Char('q'))),
            Some(SnakeAction::Quit)
        );
        assert_eq!(snake_action(KeyEvent::from(KeyCode::Char('x'))), None);
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
    }

    #[test]
    fn test_spawn_buttons() {
        assert_eq!(spawn_for_button(MouseButton::Left), SpawnRequest::Flat(10));
        assert_eq!(
            spawn_for_button(MouseButton::Right),
            SpawnRequest::RoundUpTo(100)
        );
        assert_eq!(
            spawn_for_button(MouseButton::Middle),
            SpawnRequest::RoundUpTo(1000)
        );
        assert_eq!(
            spawn_for_key(KeyEvent::from(KeyCode::Char('3'))),
            Some(SpawnRequest::RoundUpTo(1000))
        );
        assert_eq!(spawn_for_key(KeyEvent::from(KeyCode::Char('4'))), None);
    }
}
