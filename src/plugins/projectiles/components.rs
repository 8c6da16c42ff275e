use bevy::prelude::*;

/// A live projectile. Its position is the entity's `Transform`; its order in
/// the frame is its position in the `Roster`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Bullet;
