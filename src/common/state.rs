//! Global state machine.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}

impl GameState {
    /// Firing and spawning are only allowed while playing.
    #[inline]
    pub fn accepts_new_entities(self) -> bool {
        self == Self::Playing
    }

    #[inline]
    pub fn accepts_restart(self) -> bool {
        self == Self::GameOver
    }
}
