//! Pointer state for the particle benchmark.
//!
//! Turns raw mouse events into spawn requests. In burst mode every press is a
//! request; in stream mode the left button spawns a batch on each tick for as
//! long as it is held.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::map::spawn_for_button;
use crate::types::{SpawnRequest, SPAWN_BATCH};

/// Presses buffered between two drains; extra presses in one frame are dropped.
pub const MAX_PENDING_PRESSES: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    stream: bool,
    left_held: bool,
    pending: ArrayVec<SpawnRequest, MAX_PENDING_PRESSES>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left presses only start a stream instead of queuing a batch.
    pub fn streaming() -> Self {
        Self {
            stream: true,
            ..Self::default()
        }
    }

    /// Feed one mouse event. Returns true for a button press.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Down(button) => {
                if button == MouseButton::Left {
                    self.left_held = true;
                    if self.stream {
                        return true;
                    }
                }
                let _ = self.pending.try_push(spawn_for_button(button));
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.left_held = false;
                false
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.left_held = true;
                false
            }
            _ => false,
        }
    }

    /// Queue a request that did not come from the mouse (keyboard stand-ins).
    pub fn push(&mut self, req: SpawnRequest) {
        let _ = self.pending.try_push(req);
    }

    /// Take the click requests collected since the last call.
    pub fn take_presses(&mut self) -> ArrayVec<SpawnRequest, MAX_PENDING_PRESSES> {
        std::mem::take(&mut self.pending)
    }

    pub fn left_held(&self) -> bool {
        self.left_held
    }

    /// Per-tick request while streaming, if the left button is down.
    pub fn stream_request(&self) -> Option<SpawnRequest> {
        (self.stream && self.left_held).then_some(SpawnRequest::Flat(SPAWN_BATCH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn presses_are_buffered_until_taken() {
        let mut p = PointerTracker::new();
        assert!(p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Right))));
        assert!(p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Middle))));

        let taken = p.take_presses();
        assert_eq!(
            taken.as_slice(),
            &[SpawnRequest::RoundUpTo(100), SpawnRequest::RoundUpTo(1000)]
        );
        assert!(p.take_presses().is_empty());
    }

    #[test]
    fn left_hold_streams_until_release() {
        let mut p = PointerTracker::streaming();
        assert_eq!(p.stream_request(), None);

        p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left)));
        assert!(p.left_held());
        assert_eq!(p.stream_request(), Some(SpawnRequest::Flat(10)));
        assert!(p.take_presses().is_empty());

        p.handle_mouse(&mouse(MouseEventKind::Moved));
        assert!(p.left_held());

        p.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left)));
        assert!(!p.left_held());
        assert_eq!(p.stream_request(), None);
    }

    #[test]
    fn burst_mode_never_streams() {
        let mut p = PointerTracker::new();
        p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left)));
        assert!(p.left_held());
        assert_eq!(p.stream_request(), None);
        assert_eq!(p.take_presses().as_slice(), &[SpawnRequest::Flat(10)]);
    }

    #[test]
    fn overflowing_presses_are_dropped() {
        let mut p = PointerTracker::new();
        for _ in 0..(MAX_PENDING_PRESSES + 4) {
            p.push(SpawnRequest::Flat(1));
        }
        assert_eq!(p.take_presses().len(), MAX_PENDING_PRESSES);
    }
}
