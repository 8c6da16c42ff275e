//! Enemies plugin: timer-driven spawning and straight-line approach.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED (ECS)
//! ---------------------------
//! The spawner is split into a producer and a consumer:
//!
//! 1) `tick_spawner` owns the wall-clock timer. Each completed period writes a
//!    `SpawnEnemyRequest` (with its random lane already rolled) while the game
//!    is playing. The timer keeps running during game over; those periods are
//!    simply skipped.
//!
//! 2) `spawn_requested_enemies` is the single writer that creates enemies and
//!    appends them to the `Roster`. It reads the player's z at creation time.
//!
//! Enemies have no visual of their own here. The render-only models plugin
//! attaches a glTF scene when an `Enemy` appears. If that model fails to load
//! it flags `EnemyModelStatus`, and from then on spawn requests are dropped:
//! an enemy that cannot be drawn never enters the field.

use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::roster::{EnemyEntity, Roster};
use crate::common::{sets::FrameSet, state::GameState, tunables::Tunables};
use crate::plugins::player::{Player, apply_movement};

// -----------------------------------------------------------------------------
// Components / resources / messages
// -----------------------------------------------------------------------------

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

#[derive(Resource, Debug)]
pub struct SpawnTimer(pub Timer);

impl SpawnTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self(Timer::from_seconds(interval_secs, TimerMode::Repeating))
    }
}

/// Lane randomness. Seeded from `Tunables::rng_seed` when set, so runs can be
/// replayed.
#[derive(Resource, Debug)]
pub struct SpawnRng(pub SmallRng);

impl SpawnRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(SmallRng::seed_from_u64(seed)),
            None => Self(SmallRng::from_os_rng()),
        }
    }
}

/// Set by the models plugin once the enemy model has failed to load.
/// Headless apps never load models and keep the default.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct EnemyModelStatus {
    pub failed: bool,
}

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnEnemyRequest {
    pub x: f32,
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

pub fn plugin(app: &mut App) {
    let tunables = app
        .world()
        .get_resource::<Tunables>()
        .cloned()
        .unwrap_or_default();

    app.init_resource::<EnemyModelStatus>()
        .insert_resource(SpawnTimer::new(tunables.enemy_spawn_interval_secs))
        .insert_resource(SpawnRng::from_seed(tunables.rng_seed))
        .add_message::<SpawnEnemyRequest>();

    app.add_systems(
        Update,
        (tick_spawner, spawn_requested_enemies)
            .chain()
            .in_set(FrameSet::Intents),
    );

    app.add_systems(
        Update,
        advance_enemies
            .in_set(FrameSet::Movement)
            .after(apply_movement),
    );
}

// -----------------------------------------------------------------------------
// Spawn
// -----------------------------------------------------------------------------

fn tick_spawner(
    time: Res<Time>,
    state: Res<State<GameState>>,
    tunables: Res<Tunables>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<SpawnRng>,
    mut writer: MessageWriter<SpawnEnemyRequest>,
) {
    timer.0.tick(time.delta());
    if !state.get().accepts_new_entities() {
        return;
    }

    let half = tunables.enemy_spawn_half_width;
    for _ in 0..timer.0.times_finished_this_tick() {
        let x = rng.0.random_range(-half..=half);
        writer.write(SpawnEnemyRequest { x });
    }
}

fn spawn_requested_enemies(
    mut commands: Commands,
    mut requests: MessageReader<SpawnEnemyRequest>,
    tunables: Res<Tunables>,
    model: Res<EnemyModelStatus>,
    mut roster: ResMut<Roster>,
    q_player: Query<&Transform, With<Player>>,
) {
    for req in requests.read() {
        if model.failed {
            debug!("enemy model unavailable, spawn request at x={} skipped", req.x);
            continue;
        }
        let Ok(player_tf) = q_player.single() else {
            debug!("spawn request without a player");
            continue;
        };

        let pos = Vec3::new(
            req.x,
            tunables.enemy_spawn_height,
            player_tf.translation.z - tunables.enemy_spawn_distance,
        );
        let e = commands
            .spawn((
                Name::new("Enemy"),
                Enemy,
                Transform::from_translation(pos),
                Visibility::Visible,
            ))
            .id();

        roster.push_enemy(EnemyEntity(e));
        debug!("enemy spawned at {pos}");
    }
}

// -----------------------------------------------------------------------------
// Approach
// -----------------------------------------------------------------------------

/// Move every enemy toward the player. Enemies that slip past are kept unless
/// `enemy_despawn_behind` is configured.
fn advance_enemies(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut roster: ResMut<Roster>,
    q_player: Query<&Transform, With<Player>>,
    mut q_enemies: Query<&mut Transform, (With<Enemy>, Without<Player>)>,
) {
    let player_z = q_player.single().ok().map(|tf| tf.translation.z);

    let mut passed = Vec::new();
    for &enemy in roster.enemies() {
        let Ok(mut tf) = q_enemies.get_mut(enemy.0) else {
            continue;
        };
        tf.translation.z += tunables.enemy_step;

        if let (Some(margin), Some(player_z)) = (tunables.enemy_despawn_behind, player_z) {
            if tf.translation.z > player_z + margin {
                passed.push(enemy);
            }
        }
    }

    for enemy in passed {
        roster.remove_enemy(enemy);
        commands.entity(enemy.0).despawn();
    }
}

#[cfg(test)]
mod tests;
