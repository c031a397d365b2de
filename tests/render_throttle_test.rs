use tui_arcade::engine::Sprite;
use tui_arcade::term::{fingerprint, FrameBuffer, ImageView, RenderThrottle, Viewport};

const REDRAW_MS: u64 = 250;

/// Drives the viewer's draw decision the way its loop does: one size sample
/// per poll, redrawing into a reused buffer whenever the throttle allows.
struct ViewerLoop {
    sprite: Sprite,
    view: ImageView,
    throttle: RenderThrottle,
    fb: FrameBuffer,
    draws: Vec<u64>,
}

impl ViewerLoop {
    fn new() -> Self {
        Self {
            sprite: Sprite::bundled_bunny().unwrap(),
            view: ImageView::new(),
            throttle: RenderThrottle::new(REDRAW_MS),
            fb: FrameBuffer::new(0, 0),
            draws: Vec::new(),
        }
    }

    fn poll(&mut self, now_ms: u64, w: u16, h: u16) {
        if self.throttle.should_render(now_ms, fingerprint(w, h, 0), true) {
            self.view.render_into(&self.sprite, Viewport::new(w, h), &mut self.fb);
            self.draws.push(now_ms);
        }
    }
}

#[test]
fn every_size_in_a_resize_storm_is_drawn_at_once() {
    let mut v = ViewerLoop::new();
    let sizes = [(80, 24), (81, 24), (83, 25), (90, 27), (120, 40)];
    for (i, (w, h)) in sizes.iter().enumerate() {
        v.poll(i as u64 * 5, *w, *h);
        assert_eq!((v.fb.width(), v.fb.height()), (*w, *h));
    }
    assert_eq!(v.draws, vec![0, 5, 10, 15, 20]);
    assert!(v.fb.contains_text("bunny.png 26x37"));
}

#[test]
fn idle_viewer_falls_back_to_the_slow_cadence() {
    let mut v = ViewerLoop::new();
    v.poll(0, 100, 30);
    v.poll(2, 110, 30);

    // 100 ms polls with a steady size: redraw once 250 ms have passed.
    for now in (102..=1002).step_by(100) {
        v.poll(now, 110, 30);
    }
    assert_eq!(v.draws, vec![0, 2, 302, 602, 902]);
}

#[test]
fn shrinking_back_to_an_earlier_size_still_redraws() {
    let mut v = ViewerLoop::new();
    v.poll(0, 80, 24);
    v.poll(10, 100, 30);
    v.poll(20, 80, 24);
    assert_eq!(v.draws.len(), 3);
    assert_eq!(v.fb.width(), 80);
}
