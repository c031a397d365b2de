//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::SnakeAction`] values, mouse
//! buttons into [`crate::types::SpawnRequest`]s, and tracks the held pointer
//! for the streaming spawn mode.

pub mod handler;
pub mod map;

pub use tui_arcade_types as types;

pub use handler::PointerTracker;
pub use map::{should_quit, snake_action, spawn_for_button, spawn_for_key};
