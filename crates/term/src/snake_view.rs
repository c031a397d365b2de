//! SnakeView: maps a `SnakeGame` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Viewport;
use crate::core::{Board, SnakeGame};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Pos};

pub const PAUSE_TEXT: &str = "GAME PAUSED - press space to continue";
pub const TOO_SMALL_TEXT: &str = "terminal too small";

const BACKGROUND: Rgb = Rgb::new(0, 20, 50);
const SNAKE: Rgb = Rgb::new(0, 255, 75);
const APPLE: Rgb = Rgb::new(255, 0, 0);
const TEXT: Rgb = Rgb::new(255, 255, 255);

/// Renders the snake board, one tile per `cell_w` x `cell_h` block of cells.
pub struct SnakeView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for SnakeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl SnakeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered board in cells.
    pub fn frame_size(&self, game: &SnakeGame) -> (u16, u16) {
        let board = game.board();
        (
            board.columns() as u16 * self.cell_w + 2,
            board.rows() as u16 * self.cell_h + 2,
        )
    }

    /// Size of the bare tile grid in cells.
    pub fn board_size(&self, game: &SnakeGame) -> (u16, u16) {
        let (w, h) = self.frame_size(game);
        (w - 2, h - 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// The border is dropped when the framed board does not fit; when even the
    /// bare board does not fit, only a resize hint is drawn.
    pub fn render_into(&self, game: &SnakeGame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(game);
        let (board_w, board_h) = self.board_size(game);
        let bordered = viewport.width >= frame_w && viewport.height >= frame_h;
        if !bordered && (viewport.width < board_w || viewport.height < board_h) {
            self.draw_too_small(fb, viewport, board_w, board_h);
            return;
        }

        let bg = CellStyle::new(TEXT, BACKGROUND);
        let (outer_w, outer_h) = if bordered {
            (frame_w, frame_h)
        } else {
            (board_w, board_h)
        };
        let start_x = (viewport.width - outer_w) / 2;
        let start_y = (viewport.height - outer_h) / 2;
        let origin = if bordered {
            let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
            fb.draw_box(start_x, start_y, frame_w, frame_h, border);
            (start_x + 1, start_y + 1)
        } else {
            (start_x, start_y)
        };
        fb.fill_rect(origin.0, origin.1, board_w, board_h, ' ', bg);

        let board = game.board();

        self.fill_tile(fb, origin, board, game.apple(), '█', CellStyle::new(APPLE, BACKGROUND));

        let body_style = CellStyle::new(SNAKE, BACKGROUND);
        for seg in game.body().iter().skip(1) {
            self.fill_tile(fb, origin, board, *seg, '█', body_style);
        }
        self.draw_head(fb, origin, board, game.head(), game.direction());

        let text = bg.bold();
        let label = "Score: ";
        fb.put_str(origin.0 + 1, origin.1, label, text);
        fb.put_u32(origin.0 + 1 + label.len() as u16, origin.1, game.score(), text);

        if game.paused() {
            let mid_y = origin.1.saturating_add(board_h / 2);
            fb.put_str_centered(origin.0, board_w, mid_y, PAUSE_TEXT, text);
        }
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
        let text = CellStyle::default().bold();
        let mid_y = viewport.height / 2;
        fb.put_str_centered(0, viewport.width, mid_y, TOO_SMALL_TEXT, text);

        let need = format!("need {}x{}", need_w, need_h);
        fb.put_str_centered(0, viewport.width, mid_y.saturating_add(1), &need, text);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &SnakeGame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_head(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        board: Board,
        head: Pos,
        dir: Option<Direction>,
    ) {
        let style = CellStyle::new(Rgb::new(0, 0, 0), SNAKE).bold();
        self.fill_tile(fb, origin, board, head, ' ', style);

        // Eyes sit on the leading edge of the head.
        let Some((x, y)) = self.tile_origin(origin, board, head) else {
            return;
        };
        let last = self.cell_w - 1;
        match dir {
            Some(Direction::Left) => fb.put_char(x, y, ':', style),
            Some(Direction::Right) => fb.put_char(x + last, y, ':', style),
            Some(Direction::Up) => {
                fb.put_char(x, y, '˙', style);
                fb.put_char(x + last, y, '˙', style);
            }
            Some(Direction::Down) => {
                let bottom = y + self.cell_h - 1;
                fb.put_char(x, bottom, '.', style);
                fb.put_char(x + last, bottom, '.', style);
            }
            None => {
                fb.put_char(x, y, '•', style);
                fb.put_char(x + last, y, '•', style);
            }
        }
    }

    fn tile_origin(&self, origin: (u16, u16), board: Board, p: Pos) -> Option<(u16, u16)> {
        // A head that left the board is not drawn.
        if !board.contains(p) {
            return None;
        }
        let tile = board.tile.max(1);
        let col = (p.x / tile) as u16;
        let row = (p.y / tile) as u16;
        Some((origin.0 + col * self.cell_w, origin.1 + row * self.cell_h))
    }

    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        board: Board,
        p: Pos,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((x, y)) = self.tile_origin(origin, board, p) {
            fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
        }
    }
}
