//! World state
//!
//! The World exclusively owns every entity collection, the score, and the
//! RNG that drives asteroid geometry and fragment spread.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Asteroid, Body, EntityKind, Projectile, Ship};
use super::vector::Vector2;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Toroidal wrap extents (width, height)
    bounds: (f32, f32),
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Frames advanced so far
    pub frame: u64,
}

impl World {
    /// World with the default seed ring: four max-level asteroids at 45°,
    /// 135°, 225° and 315° around the center, ship parked in the middle.
    pub fn new(width: f32, height: f32, seed: u64) -> Result<Self> {
        let mut world = Self::empty(width, height, seed, SHIP_THRUST_SPEED)?;
        world.seed_asteroids()?;
        log::info!(
            "World {}x{} created with seed {} ({} asteroids)",
            width,
            height,
            seed,
            world.asteroids.len()
        );
        Ok(world)
    }

    /// World built from settings; a missing seed is drawn from OS entropy
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut world = Self::empty(settings.width, settings.height, seed, settings.thrust_speed)?;
        world.seed_asteroids()?;
        log::info!(
            "World {}x{} created from settings with seed {}",
            settings.width,
            settings.height,
            seed
        );
        Ok(world)
    }

    /// World with only the ship; tests and custom scenarios populate it by hand
    pub fn empty(width: f32, height: f32, seed: u64, thrust_speed: f32) -> Result<Self> {
        validate_bounds(width, height)?;
        let center = Vector2::new(width / 2.0, height / 2.0);
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds: (width, height),
            ship: Ship::new(center, Vector2::ZERO, thrust_speed)?,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            frame: 0,
        })
    }

    fn seed_asteroids(&mut self) -> Result<()> {
        let center = self.center();
        for angle in (SEED_RING_START_ANGLE..360).step_by(90) {
            let position = center + Vector2::from_angle(angle as f32) * SEED_RING_RADIUS;
            let drift = Vector2::new(self.rng.random(), self.rng.random());
            let velocity = drift.normalize() * SEED_ASTEROID_SPEED;
            let asteroid = Asteroid::new(position, velocity, MAX_ASTEROID_LEVEL, &mut self.rng)?;
            self.asteroids.push(asteroid);
        }
        Ok(())
    }

    pub fn bounds(&self) -> (f32, f32) {
        self.bounds
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.bounds.0 / 2.0, self.bounds.1 / 2.0)
    }

    /// Shared RNG for anything that needs world-consistent randomness
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Spawn an asteroid drawing spin and outline from the world RNG
    pub fn spawn_asteroid(&mut self, position: Vector2, velocity: Vector2, level: u32) -> Result<()> {
        let asteroid = Asteroid::new(position, velocity, level, &mut self.rng)?;
        self.asteroids.push(asteroid);
        Ok(())
    }

    pub fn spawn_projectile(&mut self, position: Vector2, velocity: Vector2) {
        self.projectiles.push(Projectile::new(position, velocity));
    }

    /// Every live entity for drawing: ship first, then asteroids, then projectiles
    pub fn bodies(&self) -> impl Iterator<Item = (EntityKind, &Body)> {
        std::iter::once((EntityKind::Ship, &self.ship.body))
            .chain(self.asteroids.iter().map(|a| (EntityKind::Asteroid, &a.body)))
            .chain(self.projectiles.iter().map(|p| (EntityKind::Projectile, &p.body)))
    }
}

fn validate_bounds(width: f32, height: f32) -> Result<()> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(Error::InvalidArgument(format!(
            "world bounds must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}
