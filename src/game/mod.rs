//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: DefaultPlugins (window/render/audio/log) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins;

/// Launch-time options collected by `main`.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub tunables: Tunables,
    pub verbose: bool,
}

pub fn run(options: LaunchOptions) -> AppExit {
    let mut app = App::new();
    app.insert_resource(options.tunables);
    configure_full(&mut app, options.verbose);
    app.run()
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App, verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: "Lane Raider".into(),
                resolution: WindowResolution::new(1280, 720),
                ..default()
            }),
            ..default()
        })
        .set(LogPlugin {
            level,
            filter: "wgpu=error,naga=warn".into(),
            ..default()
        });

    app.add_plugins(default_plugins);

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera/models/hud/audio).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
