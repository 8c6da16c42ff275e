//! Bullet flight: advance along -z and cull once out of range.

use bevy::prelude::*;

use crate::common::roster::Roster;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

use super::components::Bullet;

/// True once a bullet has flown past the cull line ahead of the player.
#[inline]
pub fn out_of_range(bullet_z: f32, player_z: f32, range: f32) -> bool {
    bullet_z < player_z - range
}

pub fn advance_bullets(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut roster: ResMut<Roster>,
    q_player: Query<&Transform, With<Player>>,
    mut q_bullets: Query<&mut Transform, (With<Bullet>, Without<Player>)>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let player_z = player_tf.translation.z;

    let mut culled = Vec::new();
    for &bullet in roster.bullets() {
        let Ok(mut tf) = q_bullets.get_mut(bullet.0) else {
            continue;
        };
        tf.translation.z -= tunables.bullet_step;
        if out_of_range(tf.translation.z, player_z, tunables.bullet_range) {
            culled.push(bullet);
        }
    }

    for bullet in culled {
        roster.remove_bullet(bullet);
        commands.entity(bullet.0).despawn();
    }
}
