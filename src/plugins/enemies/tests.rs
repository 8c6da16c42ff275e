//! Unit tests for the enemies module.
//!
//! Submodule tests so they can reach the private systems directly.

use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::{drain_messages, insert_state, run_system_once};

// -----------------------------------------------------------------------------
// Test utilities
// -----------------------------------------------------------------------------

fn time_with_delta(dt: Duration) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(dt);
    t
}

fn spawner_world(state: GameState) -> World {
    let tunables = Tunables { rng_seed: Some(7), ..default() };

    let mut world = World::new();
    world.insert_resource(SpawnTimer::new(tunables.enemy_spawn_interval_secs));
    world.insert_resource(SpawnRng::from_seed(tunables.rng_seed));
    world.insert_resource(tunables);
    world.init_resource::<Roster>();
    world.init_resource::<EnemyModelStatus>();
    world.init_resource::<Messages<SpawnEnemyRequest>>();
    insert_state(&mut world, state);
    world.spawn((Player, Transform::from_xyz(0.0, 0.0, 1.0)));
    world
}

fn run_spawner_for(world: &mut World, dt: Duration) {
    world.insert_resource(time_with_delta(dt));
    run_system_once(world, tick_spawner);
    run_system_once(world, spawn_requested_enemies);
}

// -----------------------------------------------------------------------------
// Spawner
// -----------------------------------------------------------------------------

#[test]
fn nothing_spawns_before_the_first_period() {
    let mut world = spawner_world(GameState::Playing);

    run_spawner_for(&mut world, Duration::from_millis(2999));

    assert!(world.resource::<Roster>().enemies().is_empty());
}

#[test]
fn n_periods_spawn_n_enemies_on_the_spawn_line() {
    let mut world = spawner_world(GameState::Playing);

    for _ in 0..4 {
        run_spawner_for(&mut world, Duration::from_secs(3));
    }

    let roster = world.resource::<Roster>();
    assert_eq!(roster.enemies().len(), 4);

    let enemies: Vec<Entity> = roster.enemies().iter().map(|e| e.0).collect();
    for e in enemies {
        let pos = world.get::<Transform>(e).unwrap().translation;
        assert_eq!(pos.y, 0.5);
        assert_eq!(pos.z, 1.0 - 50.0);
        assert!((-10.0..=10.0).contains(&pos.x), "x out of lane: {}", pos.x);
    }
}

#[test]
fn long_frame_spawns_one_enemy_per_elapsed_period() {
    let mut world = spawner_world(GameState::Playing);

    run_spawner_for(&mut world, Duration::from_secs(9));

    assert_eq!(world.resource::<Roster>().enemies().len(), 3);
}

#[test]
fn game_over_blocks_spawning_but_timer_keeps_running() {
    let mut world = spawner_world(GameState::GameOver);

    run_spawner_for(&mut world, Duration::from_secs(2));
    assert!(drain_messages::<SpawnEnemyRequest>(&mut world).is_empty());
    assert!(world.resource::<Roster>().enemies().is_empty());

    insert_state(&mut world, GameState::Playing);
    run_spawner_for(&mut world, Duration::from_secs(1));
    assert_eq!(world.resource::<Roster>().enemies().len(), 1);
}

#[test]
fn enemy_z_follows_player_at_creation_time() {
    let mut world = spawner_world(GameState::Playing);
    world
        .query_filtered::<&mut Transform, With<Player>>()
        .single_mut(&mut world)
        .unwrap()
        .translation
        .z = -2.0;

    world.write_message(SpawnEnemyRequest { x: 4.0 });
    run_system_once(&mut world, spawn_requested_enemies);

    let e = world.resource::<Roster>().enemies()[0].0;
    assert_eq!(world.get::<Transform>(e).unwrap().translation, Vec3::new(4.0, 0.5, -52.0));
}

#[test]
fn requests_are_dropped_once_the_enemy_model_failed() {
    let mut world = spawner_world(GameState::Playing);
    world.resource_mut::<EnemyModelStatus>().failed = true;

    world.write_message(SpawnEnemyRequest { x: 1.0 });
    world.write_message(SpawnEnemyRequest { x: -3.0 });
    run_system_once(&mut world, spawn_requested_enemies);

    assert!(world.resource::<Roster>().enemies().is_empty());
    assert_eq!(world.query::<&Enemy>().iter(&world).count(), 0);
}

#[test]
fn seeded_rng_is_reproducible() {
    let mut a = SpawnRng::from_seed(Some(42));
    let mut b = SpawnRng::from_seed(Some(42));
    for _ in 0..16 {
        assert_eq!(a.0.random_range(-10.0f32..=10.0), b.0.random_range(-10.0f32..=10.0));
    }
}

// -----------------------------------------------------------------------------
// Approach
// -----------------------------------------------------------------------------

fn spawn_enemy(world: &mut World, pos: Vec3) -> Entity {
    let e = world.spawn((Enemy, Transform::from_translation(pos))).id();
    world.resource_mut::<Roster>().push_enemy(EnemyEntity(e));
    e
}

#[test]
fn enemies_approach_the_player() {
    let mut world = spawner_world(GameState::Playing);
    let e = spawn_enemy(&mut world, Vec3::new(0.0, 0.5, -49.0));

    run_system_once(&mut world, advance_enemies);

    let z = world.get::<Transform>(e).unwrap().translation.z;
    assert!((z - -48.95).abs() < 1e-5);
}

#[test]
fn enemies_behind_the_player_are_kept_by_default() {
    let mut world = spawner_world(GameState::Playing);
    let e = spawn_enemy(&mut world, Vec3::new(9.0, 0.5, 30.0));

    run_system_once(&mut world, advance_enemies);

    assert_eq!(world.resource::<Roster>().enemies(), &[EnemyEntity(e)]);
}

#[test]
fn despawn_margin_removes_enemies_that_slipped_past() {
    let mut world = spawner_world(GameState::Playing);
    world.resource_mut::<Tunables>().enemy_despawn_behind = Some(5.0);
    let far = spawn_enemy(&mut world, Vec3::new(9.0, 0.5, 6.0));
    let near = spawn_enemy(&mut world, Vec3::new(9.0, 0.5, 5.0));

    run_system_once(&mut world, advance_enemies);

    assert_eq!(world.resource::<Roster>().enemies(), &[EnemyEntity(near)]);
    assert!(world.get_entity(far).is_err());
}
