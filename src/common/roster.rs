//! Ordered entity lists.
//!
//! The ECS does not keep query results in creation order, but collision
//! tie-breaking does depend on it (the most recently spawned enemy is checked
//! first). The roster is the single ordered record of live bullets and enemies.

use bevy::prelude::*;

/// Newtype so bullet and enemy handles cannot be mixed up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BulletEntity(pub Entity);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnemyEntity(pub Entity);

#[derive(Resource, Debug, Default)]
pub struct Roster {
    bullets: Vec<BulletEntity>,
    enemies: Vec<EnemyEntity>,
}

impl Roster {
    #[inline]
    pub fn bullets(&self) -> &[BulletEntity] {
        &self.bullets
    }

    #[inline]
    pub fn enemies(&self) -> &[EnemyEntity] {
        &self.enemies
    }

    pub fn push_bullet(&mut self, e: BulletEntity) {
        self.bullets.push(e);
    }

    pub fn push_enemy(&mut self, e: EnemyEntity) {
        self.enemies.push(e);
    }

    pub fn remove_bullet(&mut self, e: BulletEntity) {
        self.bullets.retain(|b| *b != e);
    }

    pub fn remove_enemy(&mut self, e: EnemyEntity) {
        self.enemies.retain(|x| *x != e);
    }

    pub fn take_bullets(&mut self) -> Vec<BulletEntity> {
        std::mem::take(&mut self.bullets)
    }

    pub fn take_enemies(&mut self) -> Vec<EnemyEntity> {
        std::mem::take(&mut self.enemies)
    }
}
