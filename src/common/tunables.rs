//! Tunable gameplay constants.
//!
//! Every per-frame delta is in world units per frame, not per second: the game
//! advances a fixed amount each rendered frame. Only the spawner and the blink
//! effect run on wall-clock seconds.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub player_step: f32,
    pub player_min_x: f32,
    pub player_max_x: f32,
    pub player_min_z: f32,
    pub player_max_z: f32,
    /// Where the player starts and where a restart puts it back.
    pub player_origin: Vec3,

    pub bullet_step: f32,
    /// Bullets farther than this ahead of the player are culled.
    pub bullet_range: f32,

    pub enemy_step: f32,
    pub enemy_spawn_interval_secs: f32,
    pub enemy_spawn_half_width: f32,
    pub enemy_spawn_height: f32,
    pub enemy_spawn_distance: f32,
    /// `None` keeps enemies that slip past the player forever.
    pub enemy_despawn_behind: Option<f32>,

    pub contact_radius: f32,
    pub starting_lives: u32,
    pub restart_clears_bullets: bool,

    pub blink_interval_secs: f32,
    pub blink_toggles: u8,

    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            player_step: 0.1,
            player_min_x: -10.0,
            player_max_x: 10.0,
            player_min_z: -2.0,
            player_max_z: 2.0,
            player_origin: Vec3::new(0.0, 0.0, 2.0),

            bullet_step: 0.2,
            bullet_range: 40.0,

            enemy_step: 0.05,
            enemy_spawn_interval_secs: 3.0,
            enemy_spawn_half_width: 10.0,
            enemy_spawn_height: 0.5,
            enemy_spawn_distance: 50.0,
            enemy_despawn_behind: None,

            contact_radius: 1.0,
            starting_lives: 3,
            restart_clears_bullets: false,

            blink_interval_secs: 0.1,
            blink_toggles: 6,

            rng_seed: None,
        }
    }
}
