//! Simulation core
//!
//! All gameplay logic lives here. The module stays free of rendering and
//! platform code:
//! - Seeded RNG owned by the World, passed explicitly to generators
//! - Stable iteration order (insertion order of each collection)
//! - No I/O

pub mod collision;
pub mod entity;
pub mod fragment;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{clamp01, closest_point_on_segment, intersects};
pub use entity::{Asteroid, Body, Color, EntityKind, Projectile, Shape, Ship, generate_outline};
pub use fragment::fragment;
pub use state::World;
pub use tick::{Action, FrameSummary, advance, advance_with_step, apply_action, apply_action_with_step};
pub use vector::Vector2;
