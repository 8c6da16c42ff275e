//! Audio cues.
//!
//! Gameplay only writes `SfxCue` messages (registered by the core plugin so
//! headless apps accept them). This render-side plugin turns each cue into a
//! one-shot `AudioPlayer` that despawns itself when done.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::common::sets::FrameSet;

const SHOOT_SOUND: &str = "sounds/shoot.ogg";
const HIT_SOUND: &str = "sounds/hit.ogg";
const SFX_VOLUME: f32 = 0.5;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SfxCue {
    Shoot,
    Hit,
}

#[derive(Resource, Debug)]
struct SfxHandles {
    shoot: Handle<AudioSource>,
    hit: Handle<AudioSource>,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, load_sounds)
        .add_systems(Update, play_cues.in_set(FrameSet::Presentation));
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SfxHandles {
        shoot: asset_server.load(SHOOT_SOUND),
        hit: asset_server.load(HIT_SOUND),
    });
}

fn play_cues(mut commands: Commands, mut cues: MessageReader<SfxCue>, handles: Res<SfxHandles>) {
    for cue in cues.read() {
        let source = match cue {
            SfxCue::Shoot => handles.shoot.clone(),
            SfxCue::Hit => handles.hit.clone(),
        };
        commands.spawn((
            AudioPlayer::new(source),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(SFX_VOLUME)),
        ));
    }
}
