//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Views are pure: they read game state and write cells. Only
//! [`TerminalRenderer`] touches the terminal.
//!
//! The 640x480 canvas is mapped onto cells by [`CanvasLayout`]; the snake board
//! uses a fixed 2x1 cells per tile instead.

pub mod bunny_view;
pub mod canvas;
pub mod fb;
pub mod image_view;
pub mod render_throttle;
pub mod renderer;
pub mod snake_view;

pub use tui_arcade_core as core;
pub use tui_arcade_engine as engine;
pub use tui_arcade_types as types;

pub use bunny_view::BunnyView;
pub use canvas::{CanvasLayout, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use image_view::ImageView;
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::{SnakeView, PAUSE_TEXT, TOO_SMALL_TEXT};
