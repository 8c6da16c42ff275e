//! Input plugin.
//!
//! Pipeline (Update, `FrameSet::Input`):
//! - keyboard edges -> `InputState` flags (set on press, cleared on release)
//! - Enter -> `RestartRequest`
//! - left click / touch start -> `FireRequest`
//!
//! The input layer never touches the roster or the session. It only records
//! held flags and enqueues intents for the consumers in `FrameSet::Intents`.

use bevy::prelude::*;

use crate::common::sets::FrameSet;
use crate::plugins::projectiles::messages::FireRequest;
use crate::plugins::session::RestartRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Restart,
}

/// Map a physical key to a game action. Arrows and WASD are equivalent.
pub fn action_for(key: KeyCode) -> Option<KeyAction> {
    let action = match key {
        KeyCode::ArrowUp | KeyCode::KeyW => KeyAction::Move(Direction::Forward),
        KeyCode::ArrowDown | KeyCode::KeyS => KeyAction::Move(Direction::Backward),
        KeyCode::ArrowLeft | KeyCode::KeyA => KeyAction::Move(Direction::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => KeyAction::Move(Direction::Right),
        KeyCode::Enter => KeyAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// Currently-held movement keys.
///
/// Flags are independent: opposing directions may both be held and the
/// movement step applies both.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set_direction(&mut self, direction: Direction, pressed: bool) {
        let flag = match direction {
            Direction::Forward => &mut self.forward,
            Direction::Backward => &mut self.backward,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *flag = pressed;
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<InputState>().add_systems(
        Update,
        (read_keyboard, read_fire_buttons).in_set(FrameSet::Input),
    );
}

fn read_keyboard(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<InputState>,
    mut restart: MessageWriter<RestartRequest>,
) {
    let Some(keys) = keys else { return; };

    for &key in keys.get_just_pressed() {
        match action_for(key) {
            Some(KeyAction::Move(dir)) => input.set_direction(dir, true),
            Some(KeyAction::Restart) => {
                restart.write(RestartRequest);
            }
            None => {}
        }
    }

    for &key in keys.get_just_released() {
        if let Some(KeyAction::Move(dir)) = action_for(key) {
            input.set_direction(dir, false);
        }
    }
}

fn read_fire_buttons(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut fire: MessageWriter<FireRequest>,
) {
    let clicked = buttons.is_some_and(|b| b.just_pressed(MouseButton::Left));
    let tapped = touches.is_some_and(|t| t.any_just_pressed());

    if clicked || tapped {
        fire.write(FireRequest);
    }
}
