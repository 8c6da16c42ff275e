//! Fire consumer: turn `FireRequest`s into bullets.
//!
//! A bullet starts at the player's current position. Requests are dropped
//! (not queued) while the game is over or before the player exists.

use bevy::prelude::*;

use crate::common::roster::{BulletEntity, Roster};
use crate::common::state::GameState;
use crate::plugins::audio::SfxCue;
use crate::plugins::player::Player;

use super::components::Bullet;
use super::messages::FireRequest;

pub fn fire_bullets(
    mut commands: Commands,
    mut requests: MessageReader<FireRequest>,
    state: Res<State<GameState>>,
    mut roster: ResMut<Roster>,
    q_player: Query<&Transform, With<Player>>,
    mut sfx: MessageWriter<SfxCue>,
) {
    for _ in requests.read() {
        if !state.get().accepts_new_entities() {
            continue;
        }
        let Ok(player_tf) = q_player.single() else {
            debug!("fire request without a player");
            continue;
        };

        let e = commands
            .spawn((
                Name::new("Bullet"),
                Bullet,
                Transform::from_translation(player_tf.translation),
                Visibility::Visible,
            ))
            .id();

        roster.push_bullet(BulletEntity(e));
        sfx.write(SfxCue::Shoot);
    }
}
