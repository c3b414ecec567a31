//! Per-frame simulation step
//!
//! Order within a frame:
//! 1. Apply queued ship actions (shots join the projectile list)
//! 2. Sweep each live projectile against the asteroids, first hit wins
//! 3. Reap spent projectiles
//! 4. Fragment and score destroyed asteroids
//! 5. Add fragments, then spin/move/wrap every asteroid
//! 6. Move the ship

use serde::{Deserialize, Serialize};

use super::collision::intersects;
use super::entity::{Projectile, Ship};
use super::fragment::fragment;
use super::state::World;
use crate::consts::SHIP_ROTATE_STEP;

/// Discrete ship commands decoded from input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
    Shoot,
}

/// What happened during one call to [`advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Projectiles that struck an asteroid
    pub hits: u32,
    /// Asteroids removed this frame
    pub destroyed: u32,
    /// Fragments added this frame
    pub spawned: u32,
    /// Projectiles reaped because their life ran out
    pub expired: u32,
    pub score_gained: u64,
}

/// Apply one action to the ship with the default rotate step.
///
/// Returns the new projectile for `Shoot`; the ship itself is left untouched
/// by shooting.
pub fn apply_action(ship: &mut Ship, action: Action) -> Option<Projectile> {
    apply_action_with_step(ship, action, SHIP_ROTATE_STEP)
}

pub fn apply_action_with_step(ship: &mut Ship, action: Action, rotate_step: f32) -> Option<Projectile> {
    match action {
        Action::RotateLeft => ship.rotate(-rotate_step),
        Action::RotateRight => ship.rotate(rotate_step),
        Action::Thrust => ship.thrust(),
        Action::Shoot => return Some(ship.shoot()),
    }
    None
}

/// Advance the world by `dt` seconds after applying `actions` in order
pub fn advance(world: &mut World, dt: f32, actions: &[Action]) -> FrameSummary {
    advance_with_step(world, dt, actions, SHIP_ROTATE_STEP)
}

/// [`advance`] with a configurable rotate step
pub fn advance_with_step(
    world: &mut World,
    dt: f32,
    actions: &[Action],
    rotate_step: f32,
) -> FrameSummary {
    let mut summary = FrameSummary::default();
    let bounds = world.bounds();

    for &action in actions {
        if let Some(projectile) = apply_action_with_step(&mut world.ship, action, rotate_step) {
            world.projectiles.push(projectile);
        }
    }

    // Swept collision against pre-frame asteroid positions
    for projectile in world.projectiles.iter_mut().filter(|p| p.is_alive()) {
        projectile.remaining_life -= dt;
        let start = projectile.body.position;
        let end = projectile.body.projected(dt);

        let target = world
            .asteroids
            .iter_mut()
            .find(|a| intersects(a.body.position, a.radius(), start, end));

        match target {
            Some(asteroid) => {
                asteroid.destroyed = true;
                projectile.remaining_life = 0.0;
                summary.hits += 1;
            }
            None => {
                projectile.body.position = end;
                projectile.body.wrap(bounds);
            }
        }
    }

    // Whatever leaves here without a hit ran out of life, this frame or earlier
    let before = world.projectiles.len();
    world.projectiles.retain(Projectile::is_alive);
    summary.expired = (before - world.projectiles.len()) as u32 - summary.hits;

    // Score and fragments use each asteroid's own level, read before removal
    let mut fragments = Vec::new();
    let mut survivors = Vec::with_capacity(world.asteroids.len());
    for asteroid in std::mem::take(&mut world.asteroids) {
        if !asteroid.destroyed {
            survivors.push(asteroid);
            continue;
        }
        let children = fragment(&asteroid, world.rng_mut());
        log::debug!(
            "Asteroid level {} destroyed at ({:.1}, {:.1}), {} fragments",
            asteroid.level(),
            asteroid.body.position.x,
            asteroid.body.position.y,
            children.len()
        );
        summary.destroyed += 1;
        summary.spawned += children.len() as u32;
        summary.score_gained += u64::from(asteroid.level());
        fragments.extend(children);
    }
    survivors.extend(fragments);
    world.asteroids = survivors;
    world.score += summary.score_gained;

    for asteroid in &mut world.asteroids {
        asteroid.update(dt, bounds);
    }

    world.ship.update(dt, bounds);
    world.frame += 1;

    log::trace!(
        "Frame {}: {} asteroids, {} projectiles, score {} ({:?})",
        world.frame,
        world.asteroids.len(),
        world.projectiles.len(),
        world.score,
        summary
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Vector2;

    fn empty_world() -> World {
        World::empty(WORLD_WIDTH, WORLD_HEIGHT, 12345, SHIP_THRUST_SPEED).unwrap()
    }

    #[test]
    fn test_rotate_actions() {
        let mut world = empty_world();
        advance(&mut world, 0.0, &[Action::RotateLeft]);
        assert!((world.ship.body.orientation - 355.0).abs() < 1e-4);
        advance(&mut world, 0.0, &[Action::RotateRight, Action::RotateRight]);
        assert!((world.ship.body.orientation - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_shoot_appends_projectile() {
        let mut world = empty_world();
        let summary = advance(&mut world, 0.0, &[Action::Shoot, Action::Shoot]);
        assert_eq!(world.projectiles.len(), 2);
        assert_eq!(summary.hits, 0);
        // Zero dt: nose of the ship, facing up
        let p = &world.projectiles[0];
        assert!((p.body.position.x - 320.0).abs() < 1e-3);
        assert!((p.body.position.y - 230.0).abs() < 1e-3);
    }

    #[test]
    fn test_apply_action_shoot_leaves_ship() {
        let mut world = empty_world();
        let before = world.ship.body.clone();
        let shot = apply_action(&mut world.ship, Action::Shoot);
        assert!(shot.is_some());
        assert_eq!(world.ship.body.velocity, before.velocity);
        assert_eq!(world.ship.body.orientation, before.orientation);
        assert!(apply_action(&mut world.ship, Action::Thrust).is_none());
    }

    #[test]
    fn test_projectile_expires() {
        let mut world = empty_world();
        world.projectiles.push(Projectile::with_life(
            Vector2::new(10.0, 10.0),
            Vector2::new(1.0, 0.0),
            0.1,
        ));
        let summary = advance(&mut world, 0.2, &[]);
        assert_eq!(summary.expired, 1);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_spent_projectile_counts_as_expired() {
        let mut world = empty_world();
        world.projectiles.push(Projectile::with_life(
            Vector2::new(10.0, 10.0),
            Vector2::new(1.0, 0.0),
            0.0,
        ));
        let summary = advance(&mut world, 0.1, &[]);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.hits, 0);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_hit_is_not_expiry() {
        let mut world = empty_world();
        world.spawn_asteroid(Vector2::new(100.0, 100.0), Vector2::ZERO, 1).unwrap();
        world.spawn_projectile(Vector2::new(80.0, 100.0), Vector2::new(100.0, 0.0));
        world.projectiles.push(Projectile::with_life(
            Vector2::new(10.0, 400.0),
            Vector2::ZERO,
            0.05,
        ));
        let summary = advance(&mut world, 0.2, &[]);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.expired, 1);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_moves_and_wraps() {
        let mut world = empty_world();
        world.spawn_projectile(Vector2::new(635.0, 10.0), Vector2::new(50.0, 0.0));
        advance(&mut world, 0.2, &[]);
        let p = &world.projectiles[0];
        assert!((p.body.position.x - 5.0).abs() < 1e-3);
        assert!((p.remaining_life - 4.8).abs() < 1e-4);
    }

    #[test]
    fn test_one_hit_per_projectile() {
        let mut world = empty_world();
        world.spawn_asteroid(Vector2::new(100.0, 100.0), Vector2::ZERO, 1).unwrap();
        world.spawn_asteroid(Vector2::new(100.0, 100.0), Vector2::ZERO, 1).unwrap();
        world.spawn_projectile(Vector2::new(80.0, 100.0), Vector2::new(100.0, 0.0));

        let summary = advance(&mut world, 0.2, &[]);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.destroyed, 1);
        assert_eq!(world.asteroids.len(), 1);
        assert_eq!(world.score, 1);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_miss_keeps_asteroids() {
        let mut world = empty_world();
        world.spawn_asteroid(Vector2::new(100.0, 300.0), Vector2::ZERO, 2).unwrap();
        world.spawn_projectile(Vector2::new(80.0, 100.0), Vector2::new(100.0, 0.0));
        let summary = advance(&mut world, 0.2, &[]);
        assert_eq!(summary, FrameSummary::default());
        assert_eq!(world.asteroids.len(), 1);
        assert_eq!(world.projectiles.len(), 1);
    }

    #[test]
    fn test_asteroid_spins_and_wraps() {
        let mut world = empty_world();
        world.spawn_asteroid(Vector2::new(-5.0, 470.0), Vector2::new(0.0, 100.0), 1).unwrap();
        let spin = world.asteroids[0].spin_rate;
        advance(&mut world, 0.1, &[]);
        let a = &world.asteroids[0];
        assert!((a.body.position.x - 635.0).abs() < 1e-3);
        assert!((a.body.position.y - 0.0).abs() < 1e-3);
        assert!((a.body.orientation - crate::wrap_degrees(spin * 0.1)).abs() < 1e-4);
    }

    #[test]
    fn test_ship_integrates_after_thrust() {
        let mut world = empty_world();
        advance(&mut world, 0.5, &[Action::Thrust]);
        assert!((world.ship.body.velocity.y + 30.0).abs() < 1e-3);
        assert!((world.ship.body.position.y - 225.0).abs() < 1e-3);
    }

    #[test]
    fn test_determinism() {
        // Same seed and inputs give the same world
        let mut a = World::new(WORLD_WIDTH, WORLD_HEIGHT, 99999).unwrap();
        let mut b = World::new(WORLD_WIDTH, WORLD_HEIGHT, 99999).unwrap();
        let inputs: [&[Action]; 4] = [
            &[Action::RotateLeft, Action::Shoot],
            &[Action::Thrust],
            &[Action::Shoot],
            &[],
        ];
        for _ in 0..50 {
            for input in &inputs {
                advance(&mut a, 1.0 / 60.0, input);
                advance(&mut b, 1.0 / 60.0, input);
            }
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.asteroids.len(), b.asteroids.len());
        assert_eq!(a.projectiles.len(), b.projectiles.len());
        assert_eq!(a.ship.body.position, b.ship.body.position);
    }
}
