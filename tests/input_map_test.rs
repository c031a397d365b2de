use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_arcade::input::{should_quit, snake_action, spawn_for_key, PointerTracker};
use tui_arcade::types::{Direction, SnakeAction, SpawnRequest};

fn click(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 10,
        row: 5,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn wasd_and_arrows_agree() {
    let pairs = [
        (KeyCode::Up, KeyCode::Char('w'), Direction::Up),
        (KeyCode::Down, KeyCode::Char('s'), Direction::Down),
        (KeyCode::Left, KeyCode::Char('a'), Direction::Left),
        (KeyCode::Right, KeyCode::Char('d'), Direction::Right),
    ];
    for (arrow, letter, dir) in pairs {
        assert_eq!(
            snake_action(KeyEvent::from(arrow)),
            Some(SnakeAction::Turn(dir))
        );
        assert_eq!(
            snake_action(KeyEvent::from(letter)),
            Some(SnakeAction::Turn(dir))
        );
    }
}

#[test]
fn ctrl_c_quits_everywhere() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ctrl_c));
    assert_eq!(snake_action(ctrl_c), Some(SnakeAction::Quit));
}

#[test]
fn keys_mirror_mouse_buttons() {
    let mut keys = PointerTracker::new();
    for c in ['1', '2', '3'] {
        if let Some(req) = spawn_for_key(KeyEvent::from(KeyCode::Char(c))) {
            keys.push(req);
        }
    }

    let mut mouse = PointerTracker::new();
    for b in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
        assert!(mouse.handle_mouse(&click(MouseEventKind::Down(b))));
    }

    assert_eq!(keys.take_presses(), mouse.take_presses());
}

#[test]
fn stream_mode_holds_until_release() {
    let mut p = PointerTracker::streaming();
    p.handle_mouse(&click(MouseEventKind::Down(MouseButton::Left)));
    p.handle_mouse(&click(MouseEventKind::Drag(MouseButton::Left)));
    assert_eq!(p.stream_request(), Some(SpawnRequest::Flat(10)));

    // Right clicks still round up while streaming.
    p.handle_mouse(&click(MouseEventKind::Down(MouseButton::Right)));
    assert_eq!(
        p.take_presses().as_slice(),
        &[SpawnRequest::RoundUpTo(100)]
    );

    p.handle_mouse(&click(MouseEventKind::Up(MouseButton::Left)));
    assert_eq!(p.stream_request(), None);
}
