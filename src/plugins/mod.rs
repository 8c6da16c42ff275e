//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod collision;
pub mod core;
pub mod enemies;
pub mod input;
pub mod player;
pub mod projectiles;
pub mod session;

// Render-only
pub mod audio;
pub mod camera;
pub mod hud;
pub mod lighting;
pub mod models;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    session::plugin(app);
    input::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    collision::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    lighting::plugin(app);
    models::plugin(app);
    hud::plugin(app);
    audio::plugin(app);
}
