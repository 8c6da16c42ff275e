//! Collision plugin: fixed-radius proximity checks.
//!
//! Two passes per frame, in this order (score and lives depend on it):
//!
//! 1. bullet x enemy: bullets newest-first; for each bullet, the surviving
//!    enemies newest-first. The first enemy closer than `contact_radius` is
//!    destroyed together with the bullet. One enemy per bullet per frame.
//! 2. enemy x player: surviving enemies newest-first; every contact costs a
//!    life, even several in one frame.
//!
//! The scan itself lives in [`kernel`] and knows nothing about the ECS.
//! Collision keeps running during game over; lives stay at zero there.

pub mod kernel;

use bevy::prelude::*;

use crate::common::roster::Roster;
use crate::common::{sets::FrameSet, state::GameState, tunables::Tunables};
use crate::plugins::audio::SfxCue;
use crate::plugins::player::{Player, PlayerHit};
use crate::plugins::session::Session;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (resolve_bullet_hits, resolve_player_contacts)
            .chain()
            .in_set(FrameSet::Collision),
    );
}

pub fn resolve_bullet_hits(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut roster: ResMut<Roster>,
    mut session: ResMut<Session>,
    q_tf: Query<&Transform>,
    mut sfx: MessageWriter<SfxCue>,
) {
    let bullets: Vec<_> = roster
        .bullets()
        .iter()
        .filter_map(|&b| q_tf.get(b.0).ok().map(|tf| (b, tf.translation)))
        .collect();
    let enemies: Vec<_> = roster
        .enemies()
        .iter()
        .filter_map(|&e| q_tf.get(e.0).ok().map(|tf| (e, tf.translation)))
        .collect();

    for (bullet, enemy) in kernel::bullet_enemy_hits(&bullets, &enemies, tunables.contact_radius) {
        roster.remove_bullet(bullet);
        roster.remove_enemy(enemy);
        commands.entity(bullet.0).despawn();
        commands.entity(enemy.0).despawn();

        session.award_kill();
        sfx.write(SfxCue::Hit);
    }
}

pub fn resolve_player_contacts(
    mut commands: Commands,
    tunables: Res<Tunables>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut roster: ResMut<Roster>,
    mut session: ResMut<Session>,
    q_player: Query<&Transform, With<Player>>,
    q_tf: Query<&Transform, Without<Player>>,
    mut hits: MessageWriter<PlayerHit>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };

    let enemies: Vec<_> = roster
        .enemies()
        .iter()
        .filter_map(|&e| q_tf.get(e.0).ok().map(|tf| (e, tf.translation)))
        .collect();

    let touching =
        kernel::enemies_touching(&enemies, player_tf.translation, tunables.contact_radius);

    for enemy in touching {
        roster.remove_enemy(enemy);
        commands.entity(enemy.0).despawn();
        hits.write(PlayerHit);

        let out_of_lives = session.lose_life();
        debug!("player hit, {} lives left", session.lives);

        // Only the transition out of Playing counts; re-requesting GameOver
        // while already there would rerun its exit/enter hooks.
        if out_of_lives && *state.get() == GameState::Playing {
            next_state.set(GameState::GameOver);
        }
    }
}
