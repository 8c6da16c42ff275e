//! Projectiles plugin: message-based producer -> consumer firing.
//!
//! # Data flow
//! ```text
//!   Update
//!┌──────────────────────────────────────────────────────────────┐
//!│  (A) Input: click / touch -> FireRequest message             │
//!│                                                              │
//!│  (B) Intents: fire_bullets                                   │
//!│      - reads: FireRequest, GameState, player Transform       │
//!│      - spawns: Bullet at player position                     │
//!│      - mutates: Roster.bullets (append)                      │
//!│      - writes: SfxCue::Shoot                                 │
//!│                                                              │
//!│  (C) Movement: advance_bullets (after the player step)       │
//!│      - z -= bullet_step                                      │
//!│      - cull when z < player.z - bullet_range                 │
//!│                                                              │
//!│  (D) Collision: see the collision plugin                     │
//!└──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never touch the roster. `fire_bullets` is its single bullet
//! writer apart from removals in flight and collision.

pub mod components;
pub mod fire;
pub mod flight;
pub mod messages;

use bevy::prelude::*;

use crate::common::sets::FrameSet;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::FireRequest>();

        app.add_systems(Update, fire::fire_bullets.in_set(FrameSet::Intents));

        app.add_systems(
            Update,
            flight::advance_bullets
                .in_set(FrameSet::Movement)
                .after(crate::plugins::player::apply_movement),
        );
    }
}
