//! HUD plugin (render-only): score, lives, game-over banner, restart prompt.

use bevy::prelude::*;

use crate::common::{sets::FrameSet, state::GameState};
use crate::plugins::session::Session;

const HUD_FONT: f32 = 28.0;
const BANNER_FONT: f32 = 64.0;
const BANNER_MAX_SCALE: f32 = 2.0;
const BANNER_SCALE_STEP: f32 = 0.1;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct LivesText;

/// "Game Over" text; grows from 1x to 2x one step per frame after game over.
#[derive(Component, Debug)]
pub struct GameOverBanner {
    scale: f32,
}

#[derive(Component)]
pub struct RestartPrompt;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(
            Update,
            (
                refresh_counters.run_if(resource_changed::<Session>),
                grow_banner.run_if(in_state(GameState::GameOver)),
            )
                .in_set(FrameSet::Presentation),
        )
        .add_systems(OnEnter(GameState::GameOver), show_game_over)
        .add_systems(OnEnter(GameState::Playing), hide_game_over);
}

fn hud_text(text: impl Into<String>, size: f32) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont { font_size: size, ..default() },
        TextColor(Color::WHITE),
    )
}

fn spawn_hud(mut commands: Commands, session: Res<Session>) {
    commands.spawn((
        Name::new("ScoreText"),
        ScoreText,
        hud_text(format!("Score: {}", session.score), HUD_FONT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(24.0),
            ..default()
        },
    ));

    commands.spawn((
        Name::new("LivesText"),
        LivesText,
        hud_text(format!("Lives: {}", session.lives), HUD_FONT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(24.0),
            ..default()
        },
    ));

    commands
        .spawn((
            Name::new("GameOverPanel"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(35.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn((
                GameOverBanner { scale: 1.0 },
                hud_text("Game Over", BANNER_FONT),
                Visibility::Hidden,
            ));
            panel.spawn((
                RestartPrompt,
                hud_text("Press Enter to Restart", HUD_FONT),
                Visibility::Hidden,
            ));
        });
}

fn refresh_counters(
    session: Res<Session>,
    mut q_score: Query<&mut Text, (With<ScoreText>, Without<LivesText>)>,
    mut q_lives: Query<&mut Text, (With<LivesText>, Without<ScoreText>)>,
) {
    for mut text in &mut q_score {
        text.0 = format!("Score: {}", session.score);
    }
    for mut text in &mut q_lives {
        text.0 = format!("Lives: {}", session.lives);
    }
}

fn show_game_over(
    mut q_vis: Query<&mut Visibility, Or<(With<GameOverBanner>, With<RestartPrompt>)>>,
    mut q_banner: Query<(&mut GameOverBanner, &mut TextFont)>,
) {
    for mut vis in &mut q_vis {
        *vis = Visibility::Visible;
    }
    for (mut banner, mut font) in &mut q_banner {
        banner.scale = 1.0;
        font.font_size = BANNER_FONT;
    }
}

fn hide_game_over(
    mut q_vis: Query<&mut Visibility, Or<(With<GameOverBanner>, With<RestartPrompt>)>>,
) {
    for mut vis in &mut q_vis {
        *vis = Visibility::Hidden;
    }
}

fn grow_banner(mut q_banner: Query<(&mut GameOverBanner, &mut TextFont)>) {
    for (mut banner, mut font) in &mut q_banner {
        if banner.scale < BANNER_MAX_SCALE {
            banner.scale = (banner.scale + BANNER_SCALE_STEP).min(BANNER_MAX_SCALE);
            font.font_size = BANNER_FONT * banner.scale;
        }
    }
}
