//! Runtime support shared by the game binaries.
//!
//! Everything here sits between the pure `core` crate and the terminal:
//!
//! - [`clock`]: fixed-timestep accumulator for the simulation rate
//! - [`stats`]: fps/tps counters feeding the on-screen readout and the metrics endpoint
//! - [`perf`]: frame time and input latency monitor, reported once per second
//! - [`asset`]: sprite loading (bundled or from disk)
//! - [`config`]: environment-driven settings
//! - [`logging`]: `env_logger` setup that keeps the terminal clean

pub mod asset;
pub mod clock;
pub mod config;
pub mod logging;
pub mod perf;
pub mod stats;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use asset::Sprite;
pub use clock::FixedStep;
pub use config::{BunnyMarkConfig, SnakeConfig, SpawnMode};
pub use perf::{PerfMonitor, PerfReport};
pub use stats::RateCounter;
