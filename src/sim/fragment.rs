//! Asteroid breakup
//!
//! A destroyed asteroid of level N fans out into level N-1 children. The fan
//! starts at a fixed angle and advances by a random step, so the number of
//! children varies from frame to frame.

use rand::Rng;

use super::entity::Asteroid;
use super::vector::Vector2;
use crate::consts::*;

/// Angles (degrees) of the fragment fan for a given step
pub fn fan_angles(step: u32) -> impl Iterator<Item = u32> {
    (FRAGMENT_START_ANGLE..360).step_by(step.max(1) as usize)
}

/// Children spawned when `asteroid` is destroyed.
///
/// Level 1 asteroids leave nothing behind. Each child travels along the
/// parent's heading rotated by its fan angle, starting one parent radius out.
pub fn fragment<R: Rng + ?Sized>(asteroid: &Asteroid, rng: &mut R) -> Vec<Asteroid> {
    let level = asteroid.level() - 1;
    if level == 0 {
        return Vec::new();
    }

    let step = rng.random_range(FRAGMENT_MIN_STEP..=FRAGMENT_MAX_STEP);
    let heading = asteroid.body.velocity.normalize();
    let radius = asteroid.radius();

    fan_angles(step)
        .filter_map(|angle| {
            let direction = heading.rotate(Vector2::from_angle(angle as f32));
            let position = asteroid.body.position + direction * radius;
            match Asteroid::new(position, direction * FRAGMENT_SPEED, level, rng) {
                Ok(child) => Some(child),
                Err(err) => {
                    log::warn!("Dropping fragment: {}", err);
                    None
                }
            }
        })
        .collect()
}
