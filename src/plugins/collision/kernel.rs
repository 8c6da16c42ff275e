//! Pure proximity scans over `(id, position)` lists in creation order.

use bevy::math::Vec3;

#[inline]
pub fn in_contact(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}

/// Pair bullets with the enemies they destroy this frame.
///
/// Scans bullets last-to-first, and for each bullet the enemies not yet
/// destroyed, last-to-first. A bullet destroys at most one enemy; an enemy
/// is destroyed at most once.
pub fn bullet_enemy_hits<B: Copy, E: Copy>(
    bullets: &[(B, Vec3)],
    enemies: &[(E, Vec3)],
    radius: f32,
) -> Vec<(B, E)> {
    let mut alive = vec![true; enemies.len()];
    let mut hits = Vec::new();

    for &(bullet, bullet_pos) in bullets.iter().rev() {
        let hit = enemies
            .iter()
            .enumerate()
            .rev()
            .find(|&(j, &(_, enemy_pos))| alive[j] && in_contact(bullet_pos, enemy_pos, radius));

        if let Some((j, &(enemy, _))) = hit {
            alive[j] = false;
            hits.push((bullet, enemy));
        }
    }
    hits
}

/// Enemies touching the player, last-to-first.
pub fn enemies_touching<E: Copy>(enemies: &[(E, Vec3)], player: Vec3, radius: f32) -> Vec<E> {
    enemies
        .iter()
        .rev()
        .filter(|&&(_, pos)| in_contact(pos, player, radius))
        .map(|&(e, _)| e)
        .collect()
}
