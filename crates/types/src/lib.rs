//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, terminal rendering, metrics endpoint).
//!
//! # Canvas
//!
//! Every demo draws onto the same logical canvas:
//!
//! - **Width**: 640 pixels
//! - **Height**: 480 pixels
//!
//! Views scale the canvas into whatever terminal viewport is available.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal loops (~60 FPS) |
//! | `TICKS_PER_SECOND` | 60 | Fixed simulation rate of BunnyMark |
//! | `FRAMES_PER_MOVE` | 5 | Snake move cadence (lower is faster) |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, SCREEN_WIDTH, TILE_SIZE};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert!(dir.is_opposite(Direction::Down));
//! assert_eq!(dir.delta(TILE_SIZE), (0, -20));
//!
//! assert_eq!(SCREEN_WIDTH / TILE_SIZE, 32);
//! ```

/// Canvas width in pixels
pub const SCREEN_WIDTH: i32 = 640;

/// Canvas height in pixels
pub const SCREEN_HEIGHT: i32 = 480;

/// Snake tile size in pixels. Every segment and apple sits on a multiple of it.
pub const TILE_SIZE: i32 = 20;

/// Rendered frames between two snake moves.
pub const FRAMES_PER_MOVE: u32 = 5;

/// Frame interval of the terminal loops in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fixed BunnyMark simulation rate.
pub const TICKS_PER_SECOND: u32 = 60;

/// Distance from the top of the canvas where rising bunnies lose energy.
pub const UPPER_BOUND: f32 = 40.0;

/// Per-axis sprite scale for bunnies.
pub const BUNNY_SCALE: f32 = 0.2;

/// Default gravity (ebiten variant). The phaser variant used 0.75.
pub const GRAVITY: f32 = 0.7;

/// Vertical velocity factor applied inside the upper bound zone.
pub const DAMPING: f32 = 0.7;

/// Bunnies present when a benchmark starts.
pub const INITIAL_BUNNIES: usize = 10;

/// Bunnies added by a flat spawn (left button).
pub const SPAWN_BATCH: usize = 10;


/// A grid-aligned snake coordinate in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A 2D float vector used for particle position, velocity and scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

/// Axis-aligned movement direction.
///
/// The delta of each direction is one tile; `Up` moves towards y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit move scaled by `tile`.
    pub fn delta(&self, tile: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -tile),
            Direction::Down => (0, tile),
            Direction::Left => (-tile, 0),
            Direction::Right => (tile, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` would reverse this direction in place.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Snake actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    /// Queue a direction change for a future move tick
    Turn(Direction),
    /// Toggle pause state
    TogglePause,
    /// Leave the game immediately, even while paused
    Quit,
}

/// Particle spawn request.
///
/// `RoundUpTo(step)` tops the population up to the next multiple of `step`.
/// When the count already is a multiple, a full `step` is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRequest {
    Flat(usize),
    RoundUpTo(usize),
}

impl SpawnRequest {
    /// Number of particles this request adds to a population of `current`.
    ///
    /// ```
    /// use tui_arcade_types::SpawnRequest;
    ///
    /// assert_eq!(SpawnRequest::Flat(10).count_for(37), 10);
    /// assert_eq!(SpawnRequest::RoundUpTo(100).count_for(37), 63);
    /// assert_eq!(SpawnRequest::RoundUpTo(100).count_for(200), 100);
    /// ```
    pub fn count_for(&self, current: usize) -> usize {
        match *self {
            SpawnRequest::Flat(n) => n,
            SpawnRequest::RoundUpTo(0) => 0,
            SpawnRequest::RoundUpTo(step) => step - (current % step),
        }
    }
}

/// Outcome of an update step.
///
/// Everything except `Running` ends the session; the host loop decides what
/// to do with it (the snake binary prints the message and exits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Won,
    WallCollision,
    SelfCollision,
    Quit,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Running)
    }

    /// Message printed to stdout when the session ends.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Status::Won => Some("Congratulations! You've won!"),
            Status::WallCollision => Some("You ran into the wall! Game Over."),
            Status::SelfCollision => Some("You ran into yourself! Game Over."),
            Status::Running | Status::Quit => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Won => "won",
            Status::WallCollision => "wall_collision",
            Status::SelfCollision => "self_collision",
            Status::Quit => "quit",
        }
    }
}

/// Benchmark readout exposed to the screen and to an embedding host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSnapshot {
    pub fps: f64,
    pub tps: f64,
    pub bunnies: u64,
}
