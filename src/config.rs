//! Data-driven tuning and campaign loading
//!
//! Balance numbers and level layouts can come from JSON text (the embedding
//! decides where that text comes from). Everything is validated here, fail
//! fast, so the simulation never sees malformed level data.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    ENEMY_SPEED, GRAVITY, JUMP_BOOST_MULTIPLIER, JUMP_BOOST_TICKS, PLAYER_JUMP_FORCE, PLAYER_SPEED,
    SPRINT_MULTIPLIER, STOMP_BOUNCE_DIVISOR,
};
use crate::sim::level::DEFAULT_PLAYER_SPAWN;
use crate::sim::{Aabb, EnemySpawn, Level};

/// Load-time failures; the simulation never starts on any of these
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("campaign JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("campaign contains no levels")]
    EmptyCampaign,
    #[error("level {0} has no goal")]
    MissingGoal(usize),
    #[error("level {0} has no power-up")]
    MissingPowerUp(usize),
    #[error("level {index}: {what} rectangle has non-positive extent")]
    BadExtent { index: usize, what: &'static str },
}

/// Physics and game-feel numbers; the defaults are the shipped balance.
/// All speeds and forces are pixels per tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick (px/tick²)
    pub gravity: f32,
    /// Player base horizontal speed
    pub player_speed: f32,
    /// Upward impulse on jump
    pub jump_force: f32,
    /// Sprint speed multiplier
    pub sprint_multiplier: f32,
    /// Patrol speed for enemy records that omit one
    pub enemy_speed: f32,
    /// Jump power-up force multiplier
    pub boost_multiplier: f32,
    /// Jump power-up duration in ticks
    pub boost_ticks: u32,
    /// Stomp bounce is -jump_force divided by this
    pub stomp_bounce_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            sprint_multiplier: SPRINT_MULTIPLIER,
            enemy_speed: ENEMY_SPEED,
            boost_multiplier: JUMP_BOOST_MULTIPLIER,
            boost_ticks: JUMP_BOOST_TICKS,
            stomp_bounce_divisor: STOMP_BOUNCE_DIVISOR,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; absent fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Raw rectangle record as written in level JSON (world pixels)
#[derive(Debug, Clone, Copy, Deserialize)]
struct RectSpec {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PointSpec {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct EnemyRecord {
    x: f32,
    y: f32,
    #[serde(default)]
    speed: Option<f32>,
}

/// Raw level record; optional fields are checked during validation
#[derive(Debug, Clone, Deserialize)]
struct LevelSpec {
    #[serde(default)]
    platforms: Vec<RectSpec>,
    #[serde(default)]
    enemies: Vec<EnemyRecord>,
    goal: Option<RectSpec>,
    powerup: Option<RectSpec>,
    player_spawn: Option<PointSpec>,
}

/// Parse and validate a whole campaign from JSON text
pub fn load_campaign(text: &str, tuning: &Tuning) -> Result<Vec<Level>, ConfigError> {
    let specs: Vec<LevelSpec> = serde_json::from_str(text)?;
    if specs.is_empty() {
        return Err(ConfigError::EmptyCampaign);
    }
    let levels = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| validate_level(index, spec, tuning))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("loaded campaign: {} levels", levels.len());
    Ok(levels)
}

fn validate_level(index: usize, spec: &LevelSpec, tuning: &Tuning) -> Result<Level, ConfigError> {
    let goal = spec.goal.ok_or(ConfigError::MissingGoal(index))?;
    let powerup = spec.powerup.ok_or(ConfigError::MissingPowerUp(index))?;

    let rect = |what: &'static str, r: RectSpec| -> Result<Aabb, ConfigError> {
        if r.width <= 0.0 || r.height <= 0.0 {
            return Err(ConfigError::BadExtent { index, what });
        }
        Ok(Aabb::new(r.x, r.y, r.width, r.height))
    };

    let platforms = spec
        .platforms
        .iter()
        .map(|&r| rect("platform", r))
        .collect::<Result<Vec<_>, _>>()?;
    let enemies = spec
        .enemies
        .iter()
        .map(|e| EnemySpawn {
            pos: Vec2::new(e.x, e.y),
            speed: e.speed.unwrap_or(tuning.enemy_speed),
        })
        .collect();
    let player_spawn = spec
        .player_spawn
        .map(|p| Vec2::new(p.x, p.y))
        .unwrap_or(DEFAULT_PLAYER_SPAWN);

    Ok(Level::new(
        platforms,
        enemies,
        rect("goal", goal)?,
        rect("powerup", powerup)?,
        player_spawn,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[{
        "platforms": [{"x": 0, "y": 480, "width": 640, "height": 32}],
        "enemies": [{"x": 256, "y": 416}, {"x": 400, "y": 416, "speed": 3.0}],
        "goal": {"x": 600, "y": 448, "width": 32, "height": 32},
        "powerup": {"x": 500, "y": 448, "width": 32, "height": 32},
        "player_spawn": {"x": 32, "y": 448}
    }]"#;

    #[test]
    fn test_load_valid_campaign() {
        let tuning = Tuning::default();
        let levels = load_campaign(VALID, &tuning).unwrap();
        assert_eq!(levels.len(), 1);

        let level = &levels[0];
        assert_eq!(level.world_width(), 640.0);
        assert_eq!(level.enemies.len(), 2);
        // Omitted speed falls back to the tuning default
        assert_eq!(level.enemies[0].speed, tuning.enemy_speed);
        assert_eq!(level.enemies[1].speed, 3.0);
        assert_eq!(level.player_spawn, Vec2::new(32.0, 448.0));
    }

    #[test]
    fn test_missing_goal_fails_fast() {
        let text = r#"[{
            "platforms": [{"x": 0, "y": 480, "width": 640, "height": 32}],
            "powerup": {"x": 500, "y": 448, "width": 32, "height": 32}
        }]"#;
        let err = load_campaign(text, &Tuning::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingGoal(0)));
    }

    #[test]
    fn test_missing_powerup_fails_fast() {
        let text = r#"[{
            "goal": {"x": 600, "y": 448, "width": 32, "height": 32}
        }]"#;
        let err = load_campaign(text, &Tuning::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPowerUp(0)));
    }

    #[test]
    fn test_empty_campaign_fails() {
        let err = load_campaign("[]", &Tuning::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCampaign));
    }

    #[test]
    fn test_non_positive_extent_fails() {
        let text = r#"[{
            "platforms": [{"x": 0, "y": 480, "width": 0, "height": 32}],
            "goal": {"x": 600, "y": 448, "width": 32, "height": 32},
            "powerup": {"x": 500, "y": 448, "width": 32, "height": 32}
        }]"#;
        let err = load_campaign(text, &Tuning::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BadExtent {
                index: 0,
                what: "platform"
            }
        ));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(matches!(
            load_campaign("not json", &Tuning::default()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_tuning_overrides_merge_with_defaults() {
        let tuning = Tuning::from_json(r#"{"gravity": 0.8, "boost_ticks": 300}"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.boost_ticks, 300);
        // Untouched fields keep the shipped balance
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
        assert_eq!(tuning.jump_force, PLAYER_JUMP_FORCE);
    }
}
