//! TUI Arcade (workspace facade crate).
//!
//! Terminal Snake, the BunnyMark particle benchmark and a sprite viewer. The
//! implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_arcade::{adapter,core,engine,input,term,types}`
//! and hosts the binaries.

pub use tui_arcade_adapter as adapter;
pub use tui_arcade_core as core;
pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
