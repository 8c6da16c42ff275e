//! Loading `Tunables` from a RON file.
//!
//! Any field may be omitted; omitted fields keep their defaults.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::tunables::Tunables;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

pub fn load_tunables(path: &Path) -> Result<Tunables, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tunables(&contents)
}

pub fn parse_tunables(contents: &str) -> Result<Tunables, ConfigError> {
    let tunables: Tunables = ron::from_str(contents)?;
    validate(&tunables)?;
    Ok(tunables)
}

fn validate(t: &Tunables) -> Result<(), ConfigError> {
    let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

    if !(t.enemy_spawn_interval_secs > 0.0) {
        return invalid("enemy_spawn_interval_secs", "must be positive");
    }
    if !(t.blink_interval_secs > 0.0) {
        return invalid("blink_interval_secs", "must be positive");
    }
    if !(t.contact_radius > 0.0) {
        return invalid("contact_radius", "must be positive");
    }
    if !(t.enemy_spawn_half_width >= 0.0) {
        return invalid("enemy_spawn_half_width", "must not be negative");
    }
    if t.player_min_x > t.player_max_x {
        return invalid("player_min_x", "must not exceed player_max_x");
    }
    if t.player_min_z > t.player_max_z {
        return invalid("player_min_z", "must not exceed player_max_z");
    }
    let origin = t.player_origin;
    if !(t.player_min_x..=t.player_max_x).contains(&origin.x)
        || !(t.player_min_z..=t.player_max_z).contains(&origin.z)
    {
        return invalid("player_origin", "must lie inside the player bounds");
    }
    if t.starting_lives == 0 {
        return invalid("starting_lives", "must be at least 1");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec3;

    use super::*;

    #[test]
    fn empty_struct_yields_defaults() {
        let t = parse_tunables("()").unwrap();
        assert_eq!(t, Tunables::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let t = parse_tunables(
            "(starting_lives: 5, restart_clears_bullets: true, enemy_despawn_behind: Some(3.0))",
        )
        .unwrap();
        assert_eq!(t.starting_lives, 5);
        assert!(t.restart_clears_bullets);
        assert_eq!(t.enemy_despawn_behind, Some(3.0));
        assert_eq!(t.bullet_step, Tunables::default().bullet_step);
    }

    #[test]
    fn rejects_non_positive_spawn_interval() {
        let err = parse_tunables("(enemy_spawn_interval_secs: 0.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "enemy_spawn_interval_secs", .. }));
    }

    #[test]
    fn rejects_origin_outside_bounds() {
        let err = parse_tunables("(player_origin: (x: 0.0, y: 0.0, z: 5.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "player_origin", .. }));

        let err = parse_tunables("(player_origin: (x: -10.5, y: 0.0, z: 0.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "player_origin", .. }));
    }

    #[test]
    fn accepts_origin_on_the_bounds() {
        let t = parse_tunables("(player_origin: (x: 10.0, y: 0.0, z: -2.0))").unwrap();
        assert_eq!(t.player_origin, Vec3::new(10.0, 0.0, -2.0));
    }

    #[test]
    fn moved_bounds_can_admit_a_new_origin() {
        let t = parse_tunables("(player_max_z: 6.0, player_origin: (x: 0.0, y: 0.0, z: 5.0))").unwrap();
        assert_eq!(t.player_origin.z, 5.0);
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(matches!(parse_tunables("(starting_lives: )"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_tunables(Path::new("/definitely/not/here.ron")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("here.ron")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
