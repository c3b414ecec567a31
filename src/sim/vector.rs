//! 2D vector value type
//!
//! Thin value wrapper over `glam::Vec2` that carries the game's screen-space
//! conventions: `from_angle(0)` points "up" the y axis, and `rotate` composes
//! two directions like complex multiplication instead of taking an angle.

use std::ops::{Add, Mul, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    fn vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        (self.vec2() + other.vec2()).into()
    }

    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        (self.vec2() - other.vec2()).into()
    }

    #[inline]
    pub fn scale(self, scalar: f32) -> Self {
        (self.vec2() * scalar).into()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.vec2().dot(other.vec2())
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.vec2().length()
    }

    #[inline]
    pub fn squared_length(self) -> f32 {
        self.vec2().length_squared()
    }

    /// Unit vector in the same direction, or zero for the zero vector
    #[inline]
    pub fn normalize(self) -> Self {
        self.vec2().normalize_or_zero().into()
    }

    /// Compose with another direction: `(x·ox − y·oy, x·oy + y·ox)`
    #[inline]
    pub fn rotate(self, other: Self) -> Self {
        self.vec2().rotate(other.vec2()).into()
    }

    /// Unit vector `(sin θ, cos θ)` for an angle in degrees
    #[inline]
    pub fn from_angle(degrees: f32) -> Self {
        Self::from_angle_in(degrees, false)
    }

    /// Unit vector `(sin θ, cos θ)`, θ in radians when `in_radians` is set
    pub fn from_angle_in(angle: f32, in_radians: bool) -> Self {
        let theta = if in_radians { angle } else { angle.to_radians() };
        let (sin, cos) = theta.sin_cos();
        Self::new(sin, cos)
    }

    /// Screen-space heading for an orientation in degrees (y axis points down)
    #[inline]
    pub fn heading(degrees: f32) -> Self {
        let direction = Self::from_angle(degrees);
        Self::new(direction.x, -direction.y)
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.subtract(other).length()
    }
}

impl From<Vec2> for Vector2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.vec2()
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}
