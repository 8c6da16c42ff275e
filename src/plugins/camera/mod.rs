//! Camera plugin (render-only).
//!
//! A fixed chase view: the camera sits above and behind the player's lane
//! and looks down -z toward the spawn line. It does not follow the player.

use bevy::prelude::*;

const FOV_DEGREES: f32 = 75.0;
const CAMERA_POS: Vec3 = Vec3::new(0.0, 3.0, 10.0);

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(CAMERA_POS),
        AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            ..default()
        },
    ));
}
