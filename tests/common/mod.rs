//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime and time.
//! - `StatesPlugin` drives `GameState` transitions.
//! - time advances by a fixed step per `app.update()` so runs are repeatable.
//! - keyboard/mouse resources are inserted by hand; there is no `InputPlugin`
//!   clearing them, so tests call `clear()` between frames themselves.
//!
//! Then `lane_raider::game::configure_headless` installs the gameplay plugins.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use lane_raider::common::roster::{EnemyEntity, Roster};
use lane_raider::common::tunables::Tunables;
use lane_raider::plugins::enemies::Enemy;
use lane_raider::plugins::player::Player;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_with(Tunables { rng_seed: Some(1), ..Default::default() })
}

pub fn app_with(tunables: Tunables) -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.insert_resource(tunables);

    lane_raider::game::configure_headless(&mut app);

    // Run Startup so the player exists.
    app.update();
    app
}

pub fn tap_key(app: &mut App, key: KeyCode) {
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.press(key);
    keys.release(key);
}

pub fn clear_input(app: &mut App) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.world_mut().resource_mut::<ButtonInput<MouseButton>>().clear();
}

pub fn player_pos(app: &mut App) -> Vec3 {
    app.world_mut()
        .query_filtered::<&Transform, With<Player>>()
        .single(app.world())
        .unwrap()
        .translation
}

/// Place an enemy directly, bypassing the spawner.
pub fn place_enemy(app: &mut App, pos: Vec3) -> Entity {
    let e = app
        .world_mut()
        .spawn((Enemy, Transform::from_translation(pos), Visibility::Visible))
        .id();
    app.world_mut().resource_mut::<Roster>().push_enemy(EnemyEntity(e));
    e
}
