//! Moving shapes: ship, asteroids and projectiles
//!
//! Every entity carries a [`Body`] (position, velocity, orientation, outline,
//! color). Outlines are generated once at construction by [`generate_outline`]
//! and never change afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::{wrap_coordinate, wrap_degrees};

/// RGB color, presentational only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const ASTEROID: Color = Color(0xf4b300);
    pub const SHIP: Color = Color(0x78ba00);
    pub const PROJECTILE: Color = Color(0x78ba00);
    pub const BACKGROUND: Color = Color(0x252525);
    pub const LABEL: Color = Color(0x78ba00);

    /// Parse a `#rrggbb` string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        // from_str_radix alone would let a leading sign through
        Some(digits)
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|d| u32::from_str_radix(d, 16).ok())
            .map(Color)
            .ok_or_else(|| Error::Validation(format!("color '{hex}' is not #rrggbb")))
    }

    /// Components as floats in [0, 1], alpha always 1
    pub fn to_rgba(self) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b, 1.0]
    }
}

/// Entity variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Asteroid,
    Projectile,
}

/// Outline parameters per variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Ship,
    Projectile,
    Asteroid { radius: f32, segments: u32 },
}

/// Build the local-space outline polygon for a shape.
///
/// Ship and projectile outlines are fixed. Asteroid outlines place `segments`
/// points evenly around `radius`, each jittered by up to `radius / 8` on both
/// axes.
pub fn generate_outline<R: Rng + ?Sized>(shape: Shape, rng: &mut R) -> Vec<Vector2> {
    match shape {
        Shape::Ship => ship_outline(),
        Shape::Projectile => projectile_outline(),
        Shape::Asteroid { radius, segments } => {
            let step = 360.0 / segments as f32;
            let jitter = radius / 4.0;
            (0..segments)
                .map(|i| {
                    let point = Vector2::from_angle(i as f32 * step) * radius;
                    let dx = (rng.random::<f32>() - 0.5) * jitter;
                    let dy = (rng.random::<f32>() - 0.5) * jitter;
                    Vector2::new(point.x + dx, point.y + dy)
                })
                .collect()
        }
    }
}

fn ship_outline() -> Vec<Vector2> {
    vec![
        Vector2::new(0.0, -8.0),
        Vector2::new(-4.0, 4.0),
        Vector2::new(4.0, 4.0),
    ]
}

fn projectile_outline() -> Vec<Vector2> {
    vec![
        Vector2::new(-1.5, -1.5),
        Vector2::new(-1.5, 1.5),
        Vector2::new(1.5, 1.5),
        Vector2::new(1.5, -1.5),
    ]
}

/// State shared by every entity variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub position: Vector2,
    pub velocity: Vector2,
    /// Degrees, kept in [0, 360)
    pub orientation: f32,
    outline: Vec<Vector2>,
    pub color: Color,
}

impl Body {
    pub fn new(position: Vector2, velocity: Vector2, outline: Vec<Vector2>, color: Color) -> Self {
        Self {
            position,
            velocity,
            orientation: 0.0,
            outline,
            color,
        }
    }

    /// Local-space closed polygon
    pub fn outline(&self) -> &[Vector2] {
        &self.outline
    }

    /// Where the body will be after `dt` seconds, before wrapping
    #[inline]
    pub fn projected(&self, dt: f32) -> Vector2 {
        self.position + self.velocity * dt
    }

    /// Integrate position by velocity, then wrap into the world bounds
    pub fn integrate(&mut self, dt: f32, bounds: (f32, f32)) {
        self.position = self.projected(dt);
        self.wrap(bounds);
    }

    pub fn wrap(&mut self, (width, height): (f32, f32)) {
        self.position.x = wrap_coordinate(self.position.x, width);
        self.position.y = wrap_coordinate(self.position.y, height);
    }
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    pub thrust_speed: f32,
}

impl Ship {
    pub fn new(position: Vector2, velocity: Vector2, thrust_speed: f32) -> Result<Self> {
        if !thrust_speed.is_finite() || thrust_speed < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "ship thrust speed must be a non-negative number, got {thrust_speed}"
            )));
        }
        Ok(Self {
            body: Body::new(position, velocity, ship_outline(), Color::SHIP),
            thrust_speed,
        })
    }

    /// Turn by `degrees`, wrapping to [0, 360)
    pub fn rotate(&mut self, degrees: f32) {
        self.body.orientation = wrap_degrees(self.body.orientation + degrees);
    }

    /// Screen-space facing direction
    pub fn direction(&self) -> Vector2 {
        Vector2::heading(self.body.orientation)
    }

    /// Add an impulse of `thrust_speed` along the facing direction (no cap)
    pub fn thrust(&mut self) {
        self.body.velocity = self.body.velocity + self.direction() * self.thrust_speed;
    }

    /// Spawn a projectile ahead of the nose; ship state is untouched
    pub fn shoot(&self) -> Projectile {
        let direction = self.direction();
        Projectile::new(
            self.body.position + direction * MUZZLE_OFFSET,
            direction * PROJECTILE_SPEED,
        )
    }

    pub fn update(&mut self, dt: f32, bounds: (f32, f32)) {
        self.body.integrate(dt, bounds);
    }
}

/// A rock of a given size tier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AsteroidRecord")]
pub struct Asteroid {
    pub body: Body,
    level: u32,
    /// Degrees per second
    pub spin_rate: f32,
    pub destroyed: bool,
}

impl Asteroid {
    /// Create an asteroid with a random spin and jittered outline.
    ///
    /// Fails with `InvalidArgument` when `level` is zero.
    pub fn new<R: Rng + ?Sized>(
        position: Vector2,
        velocity: Vector2,
        level: u32,
        rng: &mut R,
    ) -> Result<Self> {
        Self::check_level(level)?;
        let spin_rate = (rng.random::<f32>() - 0.5) * ASTEROID_SPIN_RANGE;
        let outline = generate_outline(
            Shape::Asteroid {
                radius: Self::radius_for(level),
                segments: Self::segments_for(level),
            },
            rng,
        );
        Ok(Self {
            body: Body::new(position, velocity, outline, Color::ASTEROID),
            level,
            spin_rate,
            destroyed: false,
        })
    }

    fn check_level(level: u32) -> Result<()> {
        if level < 1 {
            return Err(Error::InvalidArgument(
                "asteroid level must be at least 1".to_string(),
            ));
        }
        // 4 << level has to fit in a u32
        if level >= 30 {
            return Err(Error::InvalidArgument(format!(
                "asteroid level {level} is too large"
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn radius_for(level: u32) -> f32 {
        (4u32 << level) as f32
    }

    #[inline]
    pub fn segments_for(level: u32) -> u32 {
        4 + 4 * level
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn radius(&self) -> f32 {
        Self::radius_for(self.level)
    }

    pub fn segment_count(&self) -> u32 {
        Self::segments_for(self.level)
    }

    /// Spin, move and wrap
    pub fn update(&mut self, dt: f32, bounds: (f32, f32)) {
        self.body.orientation = wrap_degrees(self.body.orientation + self.spin_rate * dt);
        self.body.integrate(dt, bounds);
    }
}

/// Serialized form of an [`Asteroid`]; the level is checked on the way in
#[derive(Deserialize)]
struct AsteroidRecord {
    body: Body,
    level: u32,
    spin_rate: f32,
    destroyed: bool,
}

impl TryFrom<AsteroidRecord> for Asteroid {
    type Error = Error;

    fn try_from(record: AsteroidRecord) -> Result<Self> {
        Asteroid::check_level(record.level)?;
        Ok(Self {
            body: record.body,
            level: record.level,
            spin_rate: record.spin_rate,
            destroyed: record.destroyed,
        })
    }
}

/// A shot fired by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Seconds left before the projectile is reaped
    pub remaining_life: f32,
}

impl Projectile {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self::with_life(position, velocity, PROJECTILE_LIFE)
    }

    pub fn with_life(position: Vector2, velocity: Vector2, remaining_life: f32) -> Self {
        Self {
            body: Body::new(position, velocity, projectile_outline(), Color::PROJECTILE),
            remaining_life,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0.0
    }
}
