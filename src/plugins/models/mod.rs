//! Models plugin (render-only): attach visuals to logical entities.
//!
//! Logical entities (player, enemies, bullets) are created by gameplay with a
//! `Transform` only. When one appears, this plugin attaches its presentation:
//! a glTF scene as a child (so the model can be rotated independently of the
//! gameplay transform) or, for bullets, a small sphere mesh.
//!
//! Scenes load asynchronously. Until a load completes the entity simply has
//! nothing to draw. A failed load is reported once; for the enemy model it
//! also flags `EnemyModelStatus` so no undrawable enemies are spawned.

use std::f32::consts::PI;

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::{roster::Roster, sets::FrameSet};
use crate::plugins::enemies::{Enemy, EnemyModelStatus};
use crate::plugins::player::Player;
use crate::plugins::projectiles::components::Bullet;

const PLAYER_MODEL: &str = "models/player.glb";
const ENEMY_MODEL: &str = "models/enemy.glb";
const BULLET_RADIUS: f32 = 0.1;

#[derive(Resource, Debug)]
pub struct ModelHandles {
    player: Handle<Scene>,
    player_clip: Handle<AnimationClip>,
    enemy: Handle<Scene>,
    bullet_mesh: Handle<Mesh>,
    bullet_material: Handle<StandardMaterial>,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, load_models).add_systems(
        Update,
        (
            attach_player_model,
            attach_enemy_models,
            attach_bullet_meshes,
            start_player_animation,
            report_failed_loads,
        )
            .in_set(FrameSet::Presentation),
    );
}

fn load_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ModelHandles {
        player: asset_server.load(GltfAssetLabel::Scene(0).from_asset(PLAYER_MODEL)),
        player_clip: asset_server.load(GltfAssetLabel::Animation(0).from_asset(PLAYER_MODEL)),
        enemy: asset_server.load(GltfAssetLabel::Scene(0).from_asset(ENEMY_MODEL)),
        bullet_mesh: meshes.add(Sphere::new(BULLET_RADIUS).mesh().uv(8, 8)),
        bullet_material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            unlit: true,
            ..default()
        }),
    });
}

fn attach_player_model(
    mut commands: Commands,
    handles: Res<ModelHandles>,
    q: Query<Entity, Added<Player>>,
) {
    for e in &q {
        commands.entity(e).with_child((
            SceneRoot(handles.player.clone()),
            Transform::from_rotation(Quat::from_rotation_y(PI)),
        ));
    }
}

fn attach_enemy_models(
    mut commands: Commands,
    handles: Res<ModelHandles>,
    q: Query<Entity, Added<Enemy>>,
) {
    for e in &q {
        commands.entity(e).with_child((
            SceneRoot(handles.enemy.clone()),
            Transform::from_rotation(Quat::from_rotation_y(3.0 * PI / 2.0)),
        ));
    }
}

fn attach_bullet_meshes(
    mut commands: Commands,
    handles: Res<ModelHandles>,
    q: Query<Entity, Added<Bullet>>,
) {
    for e in &q {
        commands.entity(e).insert((
            Mesh3d(handles.bullet_mesh.clone()),
            MeshMaterial3d(handles.bullet_material.clone()),
        ));
    }
}

/// Loop the first clip on the player's animation player once its scene has
/// been instantiated. Enemy scenes are left unanimated.
fn start_player_animation(
    mut commands: Commands,
    handles: Res<ModelHandles>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut q_anim: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
    q_parents: Query<&ChildOf>,
    q_player: Query<(), With<Player>>,
) {
    for (e, mut anim) in &mut q_anim {
        if !q_parents.iter_ancestors(e).any(|a| q_player.contains(a)) {
            continue;
        }

        let (graph, node) = AnimationGraph::from_clip(handles.player_clip.clone());
        anim.play(node).repeat();
        commands.entity(e).insert(AnimationGraphHandle(graphs.add(graph)));
    }
}

/// Warn once per failed asset. A failed enemy model also stops enemy
/// spawning and removes enemies spawned while it was still loading.
fn report_failed_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    handles: Res<ModelHandles>,
    mut enemy_model: ResMut<EnemyModelStatus>,
    mut roster: ResMut<Roster>,
    mut reported: Local<HashSet<UntypedAssetId>>,
) {
    let enemy_id = handles.enemy.id().untyped();
    let watched = [
        (PLAYER_MODEL, handles.player.id().untyped()),
        (PLAYER_MODEL, handles.player_clip.id().untyped()),
        (ENEMY_MODEL, enemy_id),
    ];

    for (path, id) in watched {
        if reported.contains(&id) {
            continue;
        }
        let Some(LoadState::Failed(err)) = asset_server.get_load_state(id) else {
            continue;
        };
        reported.insert(id);

        if id == enemy_id {
            warn!("could not load {path}, enemies will not spawn: {err}");
            enemy_model.failed = true;
            for enemy in roster.take_enemies() {
                commands.entity(enemy.0).despawn();
            }
        } else {
            warn!("could not load {path}, the player will stay invisible: {err}");
        }
    }
}
