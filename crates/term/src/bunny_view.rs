//! BunnyView: particles scaled from the canvas into the terminal, plus the
//! fps/tps/bunnies readout.

use crate::canvas::{CanvasLayout, Viewport};
use crate::core::BunnyWorld;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::MetricsSnapshot;

const BACKGROUND: Rgb = Rgb::new(16, 16, 24);
const BUNNY: Rgb = Rgb::new(240, 240, 240);

pub const BUNNY_GLYPH: char = '◆';

#[derive(Debug, Clone, Copy, Default)]
pub struct BunnyView;

impl BunnyView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_into(
        &self,
        world: &BunnyWorld,
        readout: &MetricsSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let cfg = world.config();
        let layout = CanvasLayout::fit_canvas(viewport, cfg.screen_width, cfg.screen_height);
        let (ox, oy) = layout.origin();
        let bg = CellStyle::new(BUNNY, BACKGROUND);

        fb.fill_rect(ox, oy, layout.inner_w, layout.inner_h, ' ', bg);
        fb.draw_box(
            layout.x,
            layout.y,
            layout.frame_w(),
            layout.frame_h(),
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        for bunny in world.bunnies() {
            if let Some((x, y)) = layout.to_cell(bunny.pos.x, bunny.pos.y) {
                fb.put_char(x, y, BUNNY_GLYPH, bg);
            }
        }

        let text = CellStyle::new(Rgb::new(255, 220, 80), BACKGROUND).bold();
        let rows: [(&str, u64); 3] = [
            ("fps: ", readout.fps.round() as u64),
            ("tps: ", readout.tps.round() as u64),
            ("bunnies: ", readout.bunnies),
        ];
        for (i, (label, value)) in rows.iter().enumerate() {
            let y = oy + i as u16;
            if y >= oy + layout.inner_h {
                break;
            }
            fb.put_str(ox + 1, y, label, text);
            let value = u32::try_from(*value).unwrap_or(u32::MAX);
            fb.put_u32(ox + 1 + label.len() as u16, y, value, text);
        }
    }

    pub fn render(
        &self,
        world: &BunnyWorld,
        readout: &MetricsSnapshot,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, readout, viewport, &mut fb);
        fb
    }
}
