//! ImageView: a sprite's footprint centered on the canvas with a caption.

use crate::canvas::{CanvasLayout, Viewport};
use crate::engine::Sprite;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const FOOTPRINT: Rgb = Rgb::new(230, 230, 230);

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageView;

impl ImageView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_into(&self, sprite: &Sprite, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = CanvasLayout::fit(viewport);
        let (ox, oy) = layout.origin();
        let bg = CellStyle::new(FOOTPRINT, BACKGROUND);
        fb.fill_rect(ox, oy, layout.inner_w, layout.inner_h, ' ', bg);
        fb.draw_box(
            layout.x,
            layout.y,
            layout.frame_w(),
            layout.frame_h(),
            CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND),
        );

        let (w, h) = layout.span(sprite.width() as f32, sprite.height() as f32);
        let x = ox + (layout.inner_w - w) / 2;
        let y = oy + (layout.inner_h - h) / 2;
        fb.fill_rect(x, y, w, h, '█', bg);

        let caption = format!("{} {}x{}", sprite.name(), sprite.width(), sprite.height());
        let caption_y = (y + h).min(oy + layout.inner_h - 1);
        fb.put_str_centered(ox, layout.inner_w, caption_y, &caption, bg.bold());
    }

    pub fn render(&self, sprite: &Sprite, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sprite, viewport, &mut fb);
        fb
    }
}
