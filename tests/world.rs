//! Whole-frame behaviour of the world step

use asteroids::consts::*;
use asteroids::sim::{Action, Projectile, Vector2, World, advance};

fn empty_world(seed: u64) -> World {
    World::empty(WORLD_WIDTH, WORLD_HEIGHT, seed, SHIP_THRUST_SPEED).unwrap()
}

#[test]
fn projectile_destroys_stationary_asteroid() {
    for seed in 0..16 {
        let mut world = empty_world(seed);
        world.spawn_asteroid(Vector2::new(100.0, 100.0), Vector2::ZERO, 2).unwrap();
        assert_eq!(world.asteroids[0].radius(), 16.0);
        world.spawn_projectile(Vector2::new(80.0, 100.0), Vector2::new(100.0, 0.0));

        let summary = advance(&mut world, 0.2, &[]);

        assert_eq!(summary.hits, 1);
        assert_eq!(summary.destroyed, 1);
        assert_eq!(world.score, 2);
        assert!(world.projectiles.is_empty(), "projectile is consumed by the hit");
        assert!(
            (3..=4).contains(&world.asteroids.len()),
            "seed {} gave {} fragments",
            seed,
            world.asteroids.len()
        );
        for child in &world.asteroids {
            assert_eq!(child.level(), 1);
            // A stationary parent has no heading, so children stay at its center
            assert!(child.body.position.distance(Vector2::new(100.0, 100.0)) < 1e-4);
        }
    }
}

#[test]
fn fragments_fan_out_from_moving_parent() {
    let mut world = empty_world(8);
    world.spawn_asteroid(Vector2::new(300.0, 200.0), Vector2::new(0.0, 10.0), 3).unwrap();
    world.spawn_projectile(Vector2::new(250.0, 200.0), Vector2::new(500.0, 0.0));

    let dt = 0.1;
    advance(&mut world, dt, &[]);

    assert_eq!(world.score, 3);
    // Parent at the hit moment was at (300, 200); children start one parent
    // radius (32) out and then travel for one frame at fragment speed
    let expected = 32.0 + FRAGMENT_SPEED * dt;
    for child in &world.asteroids {
        assert_eq!(child.level(), 2);
        let d = child.body.position.distance(Vector2::new(300.0, 200.0));
        assert!((d - expected).abs() < 1e-2, "distance {}", d);
    }
}

#[test]
fn score_uses_original_levels() {
    let mut world = empty_world(31);
    world.spawn_asteroid(Vector2::new(100.0, 100.0), Vector2::new(1.0, 0.0), 2).unwrap();
    world.spawn_asteroid(Vector2::new(400.0, 300.0), Vector2::new(0.0, 1.0), 3).unwrap();
    world.spawn_projectile(Vector2::new(80.0, 100.0), Vector2::new(100.0, 0.0));
    world.spawn_projectile(Vector2::new(380.0, 300.0), Vector2::new(100.0, 0.0));

    let summary = advance(&mut world, 0.2, &[]);

    assert_eq!(summary.destroyed, 2);
    assert_eq!(summary.score_gained, 5);
    assert_eq!(world.score, 5);
    assert_eq!(summary.spawned as usize, world.asteroids.len());
    assert!(world.asteroids.iter().all(|a| a.level() == 1 || a.level() == 2));
}

#[test]
fn expired_projectile_never_hits() {
    let mut world = empty_world(4);
    world.spawn_asteroid(Vector2::new(100.0, 100.0), Vector2::ZERO, 2).unwrap();
    world.projectiles.push(Projectile::with_life(
        Vector2::new(80.0, 100.0),
        Vector2::new(100.0, 0.0),
        0.0,
    ));

    let summary = advance(&mut world, 0.2, &[]);

    assert_eq!(summary.hits, 0);
    assert_eq!(world.asteroids.len(), 1);
    assert!(world.projectiles.is_empty());
    assert_eq!(world.score, 0);
}

#[test]
fn shot_fired_this_frame_can_hit() {
    let mut world = empty_world(6);
    // Ship faces up from (320, 240); muzzle at (320, 230), shot travels 50 px/s
    world.spawn_asteroid(Vector2::new(320.0, 200.0), Vector2::ZERO, 1).unwrap();

    let summary = advance(&mut world, 0.5, &[Action::Shoot]);

    assert_eq!(summary.hits, 1);
    assert!(world.asteroids.is_empty());
    assert_eq!(world.score, 1);
}

#[test]
fn level_one_asteroids_vanish() {
    let mut world = empty_world(12);
    world.spawn_asteroid(Vector2::new(100.0, 100.0), Vector2::new(5.0, 5.0), 1).unwrap();
    world.spawn_projectile(Vector2::new(80.0, 100.0), Vector2::new(100.0, 0.0));

    let summary = advance(&mut world, 0.2, &[]);

    assert_eq!(summary.spawned, 0);
    assert!(world.asteroids.is_empty());
    assert_eq!(world.score, 1);
}

#[test]
fn seeded_world_keeps_wrapping() {
    let mut world = World::new(WORLD_WIDTH, WORLD_HEIGHT, 555).unwrap();
    for _ in 0..600 {
        advance(&mut world, 1.0 / 30.0, &[Action::Thrust]);
        for (_, body) in world.bodies() {
            assert!((0.0..WORLD_WIDTH).contains(&body.position.x));
            assert!((0.0..WORLD_HEIGHT).contains(&body.position.y));
            assert!((0.0..360.0).contains(&body.orientation));
        }
    }
}
