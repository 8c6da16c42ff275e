//! Player plugin.
//!
//! Pipeline:
//! - Startup: spawn the player at `Tunables::player_origin`
//! - Update/Movement: apply held `InputState` flags, hard-clamped to bounds
//! - Update/Feedback: start and advance the hit blink
//!
//! The player persists across rounds; a restart only moves it back to the
//! origin (see the session plugin).

use bevy::prelude::*;

use crate::common::{sets::FrameSet, tunables::Tunables};
use crate::plugins::input::InputState;

#[derive(Component)]
pub struct Player;

/// Emitted once per enemy contact.
#[derive(Message, Clone, Copy, Debug)]
pub struct PlayerHit;

/// Hit flicker. Purely visual: the player still takes hits while blinking.
///
/// Always present on the player; inactive when `toggles_left == 0`.
#[derive(Component, Debug, Clone, Default)]
pub struct Blink {
    timer: Timer,
    toggles_left: u8,
}

impl Blink {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.toggles_left > 0
    }

    /// Start a blink unless one is already running.
    pub fn start(&mut self, interval_secs: f32, toggles: u8) {
        if self.is_active() {
            return;
        }
        self.timer = Timer::from_seconds(interval_secs, TimerMode::Repeating);
        self.toggles_left = toggles;
    }

    pub fn cancel(&mut self) {
        self.toggles_left = 0;
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<PlayerHit>()
        .add_systems(Startup, spawn)
        .add_systems(Update, apply_movement.in_set(FrameSet::Movement))
        .add_systems(
            Update,
            (start_blink, tick_blink).chain().in_set(FrameSet::Feedback),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("Player"),
        Player,
        Transform::from_translation(tunables.player_origin),
        Visibility::Visible,
        Blink::default(),
    ));
}

/// One frame of player movement.
///
/// Each axis moves only while inside its bound and the step is clamped, so
/// the position can never leave the box.
pub fn step_player(pos: &mut Vec3, input: &InputState, t: &Tunables) {
    if input.forward && pos.z > t.player_min_z {
        pos.z = (pos.z - t.player_step).max(t.player_min_z);
    }
    if input.backward && pos.z < t.player_max_z {
        pos.z = (pos.z + t.player_step).min(t.player_max_z);
    }
    if input.left && pos.x > t.player_min_x {
        pos.x = (pos.x - t.player_step).max(t.player_min_x);
    }
    if input.right && pos.x < t.player_max_x {
        pos.x = (pos.x + t.player_step).min(t.player_max_x);
    }
}

pub fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<InputState>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut tf) = q_player.single_mut() else {
        return;
    };
    step_player(&mut tf.translation, &input, &tunables);
}

fn start_blink(
    mut hits: MessageReader<PlayerHit>,
    tunables: Res<Tunables>,
    mut q_player: Query<&mut Blink, With<Player>>,
) {
    if hits.read().count() == 0 {
        return;
    }
    let Ok(mut blink) = q_player.single_mut() else {
        return;
    };
    blink.start(tunables.blink_interval_secs, tunables.blink_toggles);
}

fn tick_blink(time: Res<Time>, mut q_player: Query<(&mut Blink, &mut Visibility), With<Player>>) {
    let Ok((mut blink, mut vis)) = q_player.single_mut() else {
        return;
    };
    if !blink.is_active() {
        return;
    }

    blink.timer.tick(time.delta());
    for _ in 0..blink.timer.times_finished_this_tick() {
        *vis = match *vis {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
        blink.toggles_left -= 1;
        if blink.toggles_left == 0 {
            *vis = Visibility::Visible;
            break;
        }
    }
}
