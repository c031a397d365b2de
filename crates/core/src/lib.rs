//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation of every demo in the workspace.
//! It has **zero dependencies** on UI, terminals, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`snake`]: grid snake with buffered input, collisions and apple placement
//! - [`bunny`]: BunnyMark particles with gravity, bounce and spawn stepping
//! - [`rng`]: small LCG used for apple placement and spawning
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::SnakeGame;
//! use tui_arcade_types::{Direction, Status};
//!
//! let mut game = SnakeGame::new(12345);
//! game.queue_direction(Direction::Right);
//! assert_eq!(game.step(), Status::Running);
//! assert_eq!(game.direction(), Some(Direction::Right));
//! ```
//!
//! # Update model
//!
//! The host calls an update step once per rendered frame and a draw step that
//! only borrows the state. Update steps return a [`types::Status`]; nothing in
//! this crate exits the process.

pub mod bunny;
pub mod rng;
pub mod snake;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use bunny::{Bunny, BunnyConfig, BunnyWorld};
pub use rng::SimpleRng;
pub use snake::{Board, SnakeGame};
