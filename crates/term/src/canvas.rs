//! Mapping from the logical 640x480 canvas onto terminal cells.

use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the canvas lands inside a viewport.
///
/// Terminal glyphs are roughly twice as tall as they are wide, so the inner
/// area keeps the canvas aspect ratio with columns counted double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    /// Drawable area inside the border, in cells.
    pub inner_w: u16,
    pub inner_h: u16,
    canvas_w: f32,
    canvas_h: f32,
}

impl CanvasLayout {
    /// Largest bordered area with the canvas aspect ratio, centered.
    pub fn fit(viewport: Viewport) -> Self {
        Self::fit_canvas(viewport, SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
    }

    pub fn fit_canvas(viewport: Viewport, canvas_w: f32, canvas_h: f32) -> Self {
        let avail_w = viewport.width.saturating_sub(2).max(1) as f32;
        let avail_h = viewport.height.saturating_sub(2).max(1) as f32;
        // Columns per row that preserve the aspect with 2:1 glyphs.
        let ratio = 2.0 * canvas_w / canvas_h;

        let (inner_w, inner_h) = if avail_w / avail_h > ratio {
            ((avail_h * ratio).floor(), avail_h)
        } else {
            (avail_w, (avail_w / ratio).floor())
        };
        let inner_w = (inner_w as u16).max(1);
        let inner_h = (inner_h as u16).max(1);

        Self {
            x: viewport.width.saturating_sub(inner_w + 2) / 2,
            y: viewport.height.saturating_sub(inner_h + 2) / 2,
            inner_w,
            inner_h,
            canvas_w,
            canvas_h,
        }
    }

    pub fn frame_w(&self) -> u16 {
        self.inner_w + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.inner_h + 2
    }

    /// First drawable column/row.
    pub fn origin(&self) -> (u16, u16) {
        (self.x + 1, self.y + 1)
    }

    /// Cell for a canvas point, `None` when the point is off-canvas.
    pub fn to_cell(&self, px: f32, py: f32) -> Option<(u16, u16)> {
        if !(px >= 0.0 && py >= 0.0 && px < self.canvas_w && py < self.canvas_h) {
            return None;
        }
        let cx = ((px / self.canvas_w) * self.inner_w as f32) as u16;
        let cy = ((py / self.canvas_h) * self.inner_h as f32) as u16;
        let (ox, oy) = self.origin();
        Some((
            ox + cx.min(self.inner_w - 1),
            oy + cy.min(self.inner_h - 1),
        ))
    }

    /// Size in cells of a canvas-space extent, at least one cell each way.
    pub fn span(&self, w: f32, h: f32) -> (u16, u16) {
        let cw = (w / self.canvas_w * self.inner_w as f32).round() as u16;
        let ch = (h / self.canvas_h * self.inner_h as f32).round() as u16;
        (cw.clamp(1, self.inner_w), ch.clamp(1, self.inner_h))
    }
}
