//! Session plugin: score, lives and the game-over / restart state machine.
//!
//! ```text
//! Playing --(lives reaches 0)--> GameOver --(RestartRequest)--> Playing
//! ```
//!
//! The collision pass requests `GameOver` through `NextState`. The restart
//! reset itself runs in `OnExit(GameOver)` so it happens exactly once per
//! transition, before the first `Playing` frame.

use bevy::prelude::*;

use crate::common::{roster::Roster, sets::FrameSet, state::GameState, tunables::Tunables};
use crate::plugins::player::{Blink, Player};

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
}

impl Session {
    pub fn new(lives: u32) -> Self {
        Self { score: 0, lives }
    }

    #[inline]
    pub fn award_kill(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Take one life (never below zero). Returns true when this hit left the
    /// player with no lives.
    #[inline]
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn reset(&mut self, lives: u32) {
        *self = Self::new(lives);
    }
}

/// Intent: leave `GameOver` and start a new round.
#[derive(Message, Clone, Copy, Debug)]
pub struct RestartRequest;

pub fn plugin(app: &mut App) {
    let lives = app
        .world()
        .get_resource::<Tunables>()
        .map_or(Tunables::default().starting_lives, |t| t.starting_lives);

    app.insert_resource(Session::new(lives))
        .add_message::<RestartRequest>()
        .add_systems(Update, handle_restart_requests.in_set(FrameSet::Intents))
        .add_systems(OnEnter(GameState::GameOver), announce_game_over)
        .add_systems(OnExit(GameState::GameOver), restart_round);
}

fn handle_restart_requests(
    mut requests: MessageReader<RestartRequest>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    // Several Enter presses in one frame still mean one restart.
    if requests.read().count() == 0 {
        return;
    }
    if state.get().accepts_restart() {
        next.set(GameState::Playing);
    }
}

fn announce_game_over(session: Res<Session>) {
    info!("game over, final score {}", session.score);
}

/// Reset the round. Enemies always go; bullets only when configured to.
fn restart_round(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
    mut roster: ResMut<Roster>,
    mut q_player: Query<(&mut Transform, &mut Visibility, &mut Blink), With<Player>>,
) {
    session.reset(tunables.starting_lives);

    for enemy in roster.take_enemies() {
        commands.entity(enemy.0).despawn();
    }
    if tunables.restart_clears_bullets {
        for bullet in roster.take_bullets() {
            commands.entity(bullet.0).despawn();
        }
    }

    if let Ok((mut tf, mut vis, mut blink)) = q_player.single_mut() {
        tf.translation = tunables.player_origin;
        *vis = Visibility::Visible;
        blink.cancel();
    }

    info!("restarted with {} lives", session.lives);
}
