//! Frame pipeline ordering.
//!
//! ```text
//! Update:  Input -> Intents -> Movement -> Collision -> Feedback -> Presentation
//! ```
//!
//! Producers (input, spawner timer) only write messages in `Input`/`Intents`.
//! Every structural change to the roster happens in a single consumer system.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Intents,
    Movement,
    Collision,
    Feedback,
    Presentation,
}

pub fn configure(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Intents,
            FrameSet::Movement,
            FrameSet::Collision,
            FrameSet::Feedback,
            FrameSet::Presentation,
        )
            .chain(),
    );
}
