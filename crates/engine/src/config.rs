//! Runtime configuration from environment variables.
//!
//! - `SNAKE_SEED`: RNG seed (default: wall clock)
//! - `SNAKE_FRAMES_PER_MOVE`: frames between moves (default 5)
//! - `BUNNYMARK_MODE`: `burst` (clicks spawn) or `stream` (held button spawns every tick)
//! - `BUNNYMARK_GRAVITY`: gravity per tick (default 0.7)
//! - `BUNNYMARK_INITIAL`: bunnies at start (default 10)
//! - `BUNNYMARK_SPRITE`: sprite path (default: bundled bunny)
//! - `BUNNYMARK_SEED`: RNG seed (default: wall clock)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::asset::Sprite;
use crate::core::BunnyConfig;
use crate::types::{FRAMES_PER_MOVE, GRAVITY, INITIAL_BUNNIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeConfig {
    pub seed: Option<u32>,
    pub frames_per_move: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frames_per_move: FRAMES_PER_MOVE,
        }
    }
}

impl SnakeConfig {
    pub fn from_env() -> Self {
        Self {
            seed: parse_var("SNAKE_SEED"),
            frames_per_move: parse_var("SNAKE_FRAMES_PER_MOVE")
                .filter(|v: &u32| *v > 0)
                .unwrap_or(FRAMES_PER_MOVE),
        }
    }
}

/// How input turns into new bunnies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnMode {
    /// Each click adds a batch (left +10, right/middle round up to 100/1000).
    Burst,
    /// Holding the left button adds a batch every tick.
    Stream,
}

impl SpawnMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "burst" => Some(SpawnMode::Burst),
            "stream" => Some(SpawnMode::Stream),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnMode::Burst => "burst",
            SpawnMode::Stream => "stream",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BunnyMarkConfig {
    pub mode: SpawnMode,
    pub gravity: f32,
    pub initial: usize,
    pub sprite: Option<PathBuf>,
    pub seed: Option<u32>,
}

impl Default for BunnyMarkConfig {
    fn default() -> Self {
        Self {
            mode: SpawnMode::Burst,
            gravity: GRAVITY,
            initial: INITIAL_BUNNIES,
            sprite: None,
            seed: None,
        }
    }
}

impl BunnyMarkConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mode = match env::var("BUNNYMARK_MODE") {
            Ok(v) => SpawnMode::from_str(&v).unwrap_or_else(|| {
                log::warn!("unknown BUNNYMARK_MODE {:?}, using burst", v);
                SpawnMode::Burst
            }),
            Err(_) => defaults.mode,
        };

        let sprite = env::var("BUNNYMARK_SPRITE")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            mode,
            gravity: parse_var("BUNNYMARK_GRAVITY")
                .filter(|g: &f32| g.is_finite())
                .unwrap_or(defaults.gravity),
            initial: parse_var("BUNNYMARK_INITIAL").unwrap_or(defaults.initial),
            sprite,
            seed: parse_var("BUNNYMARK_SEED"),
        }
    }

    /// Physics parameters for a world drawing `sprite`.
    pub fn world_config(&self, sprite: &Sprite) -> BunnyConfig {
        BunnyConfig::default()
            .with_sprite_size(sprite.width(), sprite.height())
            .with_gravity(self.gravity)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_mode_parsing() {
        assert_eq!(SpawnMode::from_str("Stream"), Some(SpawnMode::Stream));
        assert_eq!(SpawnMode::from_str(" burst "), Some(SpawnMode::Burst));
        assert_eq!(SpawnMode::from_str("x"), None);
        assert_eq!(SpawnMode::Stream.as_str(), "stream");
    }

    #[test]
    fn defaults() {
        let c = BunnyMarkConfig::default();
        assert_eq!(c.mode, SpawnMode::Burst);
        assert_eq!(c.initial, 10);
        assert!(c.sprite.is_none());
        assert_eq!(SnakeConfig::default().frames_per_move, 5);
    }

    #[test]
    fn world_config_uses_sprite_size_and_gravity() {
        let sprite = Sprite::bundled_bunny().unwrap();
        let cfg = BunnyMarkConfig {
            gravity: 0.75,
            ..BunnyMarkConfig::default()
        }
        .world_config(&sprite);
        assert_eq!(cfg.sprite_width, 26.0);
        assert_eq!(cfg.sprite_height, 37.0);
        assert_eq!(cfg.gravity, 0.75);
    }
}
