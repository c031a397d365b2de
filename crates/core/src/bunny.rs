//! BunnyMark world - gravity and edge-bounce particles
//!
//! All benchmark flavours share one representation: a flat `Vec<Bunny>`
//! stepped in place once per fixed tick. The flavours only differ in
//! [`BunnyConfig`] values and in how the host turns input into spawn requests.

use crate::rng::SimpleRng;
use crate::types::{
    SpawnRequest, Vec2, BUNNY_SCALE, DAMPING, GRAVITY, SCREEN_HEIGHT, SCREEN_WIDTH, UPPER_BOUND,
};

/// Physics and spawn parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BunnyConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Unscaled sprite size in pixels.
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub scale: Vec2,
    pub gravity: f32,
    pub upper_bound: f32,
    pub damping: f32,
    /// Spawn position is uniform in `[0, spawn_spread)` on both axes.
    pub spawn_spread: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for BunnyConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH as f32,
            screen_height: SCREEN_HEIGHT as f32,
            sprite_width: 26.0,
            sprite_height: 37.0,
            scale: Vec2::splat(BUNNY_SCALE),
            gravity: GRAVITY,
            upper_bound: UPPER_BOUND,
            damping: DAMPING,
            spawn_spread: 5.0,
            min_speed: 2.0,
            max_speed: 4.0,
        }
    }
}

impl BunnyConfig {
    pub fn with_sprite_size(mut self, width: u32, height: u32) -> Self {
        self.sprite_width = width as f32;
        self.sprite_height = height as f32;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Right-most x a bunny can reach while fully on screen.
    pub fn max_x(&self) -> f32 {
        self.screen_width - self.sprite_width * self.scale.x
    }

    /// Lowest y a bunny can reach while fully on screen.
    pub fn max_y(&self) -> f32 {
        self.screen_height - self.sprite_height * self.scale.y
    }
}

/// A single particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bunny {
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: Vec2,
}

impl Bunny {
    /// Advance one tick and resolve bounces against the canvas edges.
    pub fn step(&mut self, cfg: &BunnyConfig) {
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
        self.vel.y += cfg.gravity;

        let max_x = cfg.screen_width - cfg.sprite_width * self.scale.x;
        let max_y = cfg.screen_height - cfg.sprite_height * self.scale.y;

        // Clamping keeps the flip to one per crossing.
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = -self.vel.y;
        } else if self.pos.y < cfg.upper_bound && self.vel.y < 0.0 {
            self.vel.y *= cfg.damping;
        }
    }
}

/// The particle population plus its spawner.
#[derive(Debug, Clone)]
pub struct BunnyWorld {
    config: BunnyConfig,
    bunnies: Vec<Bunny>,
    rng: SimpleRng,
    ticks: u64,
}

impl BunnyWorld {
    pub fn new(config: BunnyConfig, seed: u32) -> Self {
        Self {
            config,
            bunnies: Vec::new(),
            rng: SimpleRng::new(seed),
            ticks: 0,
        }
    }

    pub fn config(&self) -> &BunnyConfig {
        &self.config
    }

    pub fn bunnies(&self) -> &[Bunny] {
        &self.bunnies
    }

    pub fn len(&self) -> usize {
        self.bunnies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bunnies.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Append `count` bunnies with randomized position and velocity.
    pub fn spawn(&mut self, count: usize) {
        self.bunnies.reserve(count);
        let cfg = self.config;
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.next_f32() * cfg.spawn_spread,
                self.rng.next_f32() * cfg.spawn_spread,
            );
            let vel = Vec2::new(
                self.rng.range_f32(cfg.min_speed, cfg.max_speed),
                self.rng.range_f32(cfg.min_speed, cfg.max_speed),
            );
            self.bunnies.push(Bunny {
                pos,
                vel,
                scale: cfg.scale,
            });
        }
    }

    /// Resolve a spawn request against the current population.
    ///
    /// Returns the number of bunnies added.
    pub fn request(&mut self, req: SpawnRequest) -> usize {
        let count = req.count_for(self.bunnies.len());
        self.spawn(count);
        log::debug!("spawned {} bunnies ({} total)", count, self.bunnies.len());
        count
    }

    /// Insert a bunny as-is.
    pub fn push(&mut self, bunny: Bunny) {
        self.bunnies.push(bunny);
    }

    /// One fixed simulation tick.
    pub fn step(&mut self) {
        let cfg = self.config;
        for bunny in &mut self.bunnies {
            bunny.step(&cfg);
        }
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_ranges() {
        let mut world = BunnyWorld::new(BunnyConfig::default(), 42);
        world.spawn(500);
        assert_eq!(world.len(), 500);
        for b in world.bunnies() {
            assert!((0.0..5.0).contains(&b.pos.x));
            assert!((0.0..5.0).contains(&b.pos.y));
            assert!((2.0..4.0).contains(&b.vel.x));
            assert!((2.0..4.0).contains(&b.vel.y));
            assert_eq!(b.scale, Vec2::splat(BUNNY_SCALE));
        }
    }

    #[test]
    fn gravity_accelerates_downwards() {
        let cfg = BunnyConfig::default();
        let mut b = Bunny {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(0.0, 0.0),
            scale: cfg.scale,
        };
        b.step(&cfg);
        assert_eq!(b.pos, Vec2::new(100.0, 100.0));
        assert!((b.vel.y - cfg.gravity).abs() < 1e-6);
        b.step(&cfg);
        assert!((b.pos.y - (100.0 + cfg.gravity)).abs() < 1e-4);
    }

    #[test]
    fn floor_bounce_clamps_and_reflects() {
        let cfg = BunnyConfig::default();
        let mut b = Bunny {
            pos: Vec2::new(100.0, cfg.max_y() - 1.0),
            vel: Vec2::new(0.0, 3.0),
            scale: cfg.scale,
        };
        b.step(&cfg);
        assert_eq!(b.pos.y, cfg.max_y());
        assert!(b.vel.y < 0.0);
        assert!((b.vel.y + (3.0 + cfg.gravity)).abs() < 1e-5);
    }

    #[test]
    fn rising_bunny_near_top_is_damped() {
        let cfg = BunnyConfig::default();
        let mut b = Bunny {
            pos: Vec2::new(100.0, 30.0),
            vel: Vec2::new(0.0, -5.0),
            scale: cfg.scale,
        };
        b.step(&cfg);
        // y = 25, vy = (-5 + 0.7) * 0.7
        assert!((b.vel.y - (-4.3 * 0.7)).abs() < 1e-5);
    }

    #[test]
    fn left_edge_bounce() {
        let cfg = BunnyConfig::default();
        let mut b = Bunny {
            pos: Vec2::new(1.0, 200.0),
            vel: Vec2::new(-3.0, 0.0),
            scale: cfg.scale,
        };
        b.step(&cfg);
        assert_eq!(b.pos.x, 0.0);
        assert_eq!(b.vel.x, 3.0);
    }

    #[test]
    fn step_counts_ticks() {
        let mut world = BunnyWorld::new(BunnyConfig::default(), 1);
        world.spawn(3);
        world.step();
        world.step();
        assert_eq!(world.ticks(), 2);
    }
}
