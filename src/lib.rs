//! Asteroids - A wrap-around arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation core (vectors, entities, collisions, fragmentation, world step)
//! - `renderer`: Drawing boundary handed to an external canvas
//! - `platform`: Input decoding and frame timing
//! - `settings`: Data-driven world configuration
//! - `app`: Poll, advance, draw loop

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::Application;
pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default world bounds
    pub const WORLD_WIDTH: f32 = 640.0;
    pub const WORLD_HEIGHT: f32 = 480.0;

    /// Pause between loop iterations (milliseconds)
    pub const FRAME_SLEEP_MS: u64 = 16;

    /// Ship defaults
    pub const SHIP_THRUST_SPEED: f32 = 30.0;
    /// Degrees per rotate key press
    pub const SHIP_ROTATE_STEP: f32 = 5.0;

    /// Projectile spawn distance ahead of the ship
    pub const MUZZLE_OFFSET: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 50.0;
    /// Seconds a projectile lives if it hits nothing
    pub const PROJECTILE_LIFE: f32 = 5.0;

    /// Largest asteroid tier, used for the seed ring
    pub const MAX_ASTEROID_LEVEL: u32 = 4;
    /// Seed asteroids sit every 90 degrees starting here
    pub const SEED_RING_START_ANGLE: u32 = 45;
    /// Distance of the seed asteroids from the world center
    pub const SEED_RING_RADIUS: f32 = 200.0;
    pub const SEED_ASTEROID_SPEED: f32 = 30.0;
    /// Spin rates are drawn from [-SPIN_RANGE/2, SPIN_RANGE/2) degrees per second
    pub const ASTEROID_SPIN_RANGE: f32 = 60.0;

    /// Fragment fan: first angle, step range (inclusive), and child speed
    pub const FRAGMENT_START_ANGLE: u32 = 45;
    pub const FRAGMENT_MIN_STEP: u32 = 90;
    pub const FRAGMENT_MAX_STEP: u32 = 135;
    pub const FRAGMENT_SPEED: f32 = 30.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    wrap_coordinate(angle, 360.0)
}

/// Reduce a coordinate modulo `extent`, landing in [0, extent) even for negative input
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative values
    if wrapped >= extent { 0.0 } else { wrapped }
}
