//! Snake game state - grid movement, input buffering and collisions
//!
//! Coordinates are canvas pixels snapped to the tile grid. The body is stored
//! head first. A move tick happens once every `frames_per_move` calls to
//! [`SnakeGame::update`]; between ticks only the frame counter advances.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::types::{
    Direction, Pos, SnakeAction, Status, FRAMES_PER_MOVE, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE,
};

/// Playfield dimensions in pixels plus the tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub tile: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            tile: TILE_SIZE,
        }
    }
}

impl Board {
    /// Floors `width` and `height` to whole tiles, keeping at least one tile
    /// each way. A zero or negative tile size becomes 1.
    pub fn new(width: i32, height: i32, tile: i32) -> Self {
        let tile = tile.max(1);
        Self {
            width: (width / tile).max(1) * tile,
            height: (height / tile).max(1) * tile,
            tile,
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.tile.max(1)
    }

    pub fn rows(&self) -> i32 {
        self.height / self.tile.max(1)
    }

    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) * self.rows().max(0)) as usize
    }

    /// True when `p` lies on one of the whole tiles of the grid.
    pub fn contains(&self, p: Pos) -> bool {
        let tile = self.tile.max(1);
        p.x >= 0 && p.x < self.columns() * tile && p.y >= 0 && p.y < self.rows() * tile
    }

    fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let tile = self.tile.max(1);
        Some(((p.x / tile) * self.rows() + p.y / tile) as usize)
    }

    /// Every tile not covered by `body`, scanning columns left to right.
    pub fn free_cells(&self, body: &[Pos]) -> Vec<Pos> {
        let mut occupied = vec![false; self.cell_count()];
        for seg in body {
            if let Some(i) = self.index(*seg) {
                occupied[i] = true;
            }
        }

        let tile = self.tile.max(1);
        let mut free = Vec::with_capacity(self.cell_count().saturating_sub(body.len()));
        for col in 0..self.columns() {
            for row in 0..self.rows() {
                let i = (col * self.rows() + row) as usize;
                if !occupied[i] {
                    free.push(Pos::new(col * tile, row * tile));
                }
            }
        }
        free
    }
}

/// Complete snake game state
#[derive(Debug, Clone)]
pub struct SnakeGame {
    board: Board,
    body: Vec<Pos>,
    /// `None` until the first turn; the snake rests in place.
    direction: Option<Direction>,
    input_queue: VecDeque<Direction>,
    apple: Pos,
    frame_counter: u32,
    frames_per_move: u32,
    paused: bool,
    score: u32,
    rng: SimpleRng,
}

impl SnakeGame {
    /// Create a new game on the default 640x480 board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Start with a one-segment snake at (tile, tile) and an apple on a free cell.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let body = vec![Pos::new(board.tile, board.tile)];
        let mut game = Self {
            board,
            body,
            direction: None,
            input_queue: VecDeque::new(),
            apple: Pos::default(),
            frame_counter: 0,
            frames_per_move: FRAMES_PER_MOVE,
            paused: false,
            score: 0,
            rng: SimpleRng::new(seed),
        };
        if let Some(apple) = game.random_apple_position() {
            game.apple = apple;
        }
        game
    }

    /// Build a game from an explicit layout.
    ///
    /// Useful for scenarios and tests; `body` must be non-empty and head first.
    pub fn from_parts(
        board: Board,
        body: Vec<Pos>,
        direction: Option<Direction>,
        apple: Pos,
        seed: u32,
    ) -> Self {
        debug_assert!(!body.is_empty(), "snake needs a head");
        Self {
            board,
            body,
            direction,
            input_queue: VecDeque::new(),
            apple,
            frame_counter: 0,
            frames_per_move: FRAMES_PER_MOVE,
            paused: false,
            score: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn with_frames_per_move(mut self, frames: u32) -> Self {
        self.frames_per_move = frames.max(1);
        self
    }

    // ============== Read-only accessors ==============

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn body(&self) -> &[Pos] {
        &self.body
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn apple(&self) -> Pos {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn pending_inputs(&self) -> usize {
        self.input_queue.len()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn frames_per_move(&self) -> u32 {
        self.frames_per_move
    }

    // ============== Input ==============

    /// Buffer a direction. Validation happens when the move tick consumes it.
    pub fn queue_direction(&mut self, dir: Direction) {
        self.input_queue.push_back(dir);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Apply a player action. Quitting works regardless of pause.
    pub fn apply_action(&mut self, action: SnakeAction) -> Status {
        match action {
            SnakeAction::Turn(dir) => self.queue_direction(dir),
            SnakeAction::TogglePause => self.toggle_pause(),
            SnakeAction::Quit => return Status::Quit,
        }
        Status::Running
    }

    // ============== Simulation ==============

    /// Per-frame update. Runs a move tick every `frames_per_move` frames.
    pub fn update(&mut self) -> Status {
        if self.paused {
            return Status::Running;
        }

        if self.frame_counter == self.frames_per_move {
            self.frame_counter = 1;
            self.step()
        } else {
            self.frame_counter += 1;
            Status::Running
        }
    }

    /// One discrete move tick.
    pub fn step(&mut self) -> Status {
        if let Some(next) = self.input_queue.pop_front() {
            let reverses = self.direction.is_some_and(|cur| cur.is_opposite(next));
            if !reverses {
                self.direction = Some(next);
            }
        }

        let Some(dir) = self.direction else {
            return Status::Running;
        };

        let last_tail = self.body[self.body.len() - 1];

        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let (dx, dy) = dir.delta(self.board.tile);
        self.body[0] = self.body[0].offset(dx, dy);

        let status = self.check_collision();
        if status.is_terminal() {
            log::debug!("snake {} at {:?}", status.as_str(), self.body[0]);
            return status;
        }

        if self.body[0] == self.apple {
            self.body.push(last_tail);
            self.score += 1;
            match self.random_apple_position() {
                Some(apple) => self.apple = apple,
                None => return Status::Won,
            }
        }

        Status::Running
    }

    fn check_collision(&self) -> Status {
        let head = self.body[0];

        if !self.board.contains(head) {
            return Status::WallCollision;
        }

        if self.body[1..].contains(&head) {
            return Status::SelfCollision;
        }

        Status::Running
    }

    fn random_apple_position(&mut self) -> Option<Pos> {
        let free = self.board.free_cells(&self.body);
        self.rng.pick(&free).copied()
    }
}
