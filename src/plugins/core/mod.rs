//! Core plugin: shared resources, frame ordering and global settings.

use bevy::prelude::*;

use crate::common::{roster::Roster, sets, tunables::Tunables};
use crate::plugins::audio::SfxCue;

/// Day-sky blue behind the scene.
const SKY: Color = Color::srgb(0.53, 0.78, 0.95);

pub fn plugin(app: &mut App) {
    // A config file loaded by `main` may already have inserted these.
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }
    app.init_resource::<Roster>();
    app.insert_resource(ClearColor(SKY));
    // Written by gameplay, played by the render-only audio plugin.
    app.add_message::<SfxCue>();
    sets::configure(app);
}
