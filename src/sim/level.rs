//! Static level data
//!
//! A level is an immutable bundle of platforms, enemy spawn points, a goal
//! and a jump power-up. Platform order matters: it is the order collision
//! resolution walks each tick, and later platforms win disputes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Aabb;
use crate::consts::{ENEMY_SPEED, TILE_SIZE, VIEWPORT_WIDTH};

/// Player start pose used by levels that do not declare their own
pub const DEFAULT_PLAYER_SPAWN: Vec2 = Vec2::new(TILE_SIZE, 14.0 * TILE_SIZE);

/// Where an enemy starts and how fast it patrols
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub pos: Vec2,
    /// Patrol speed (px/tick)
    pub speed: f32,
}

/// Immutable description of one level
#[derive(Debug, Clone)]
pub struct Level {
    /// Platforms in declared order
    pub platforms: Vec<Aabb>,
    pub enemies: Vec<EnemySpawn>,
    pub goal: Aabb,
    pub powerup: Aabb,
    /// Player start pose for this level
    pub player_spawn: Vec2,
    world_width: f32,
}

impl Level {
    pub fn new(
        platforms: Vec<Aabb>,
        enemies: Vec<EnemySpawn>,
        goal: Aabb,
        powerup: Aabb,
        player_spawn: Vec2,
    ) -> Self {
        let world_width = world_width_of(&platforms);
        Self {
            platforms,
            enemies,
            goal,
            powerup,
            player_spawn,
            world_width,
        }
    }

    /// Horizontal extent of the level, precomputed from the platforms
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.world_width
    }
}

/// Rightmost platform edge; a level with no platforms spans one viewport
pub fn world_width_of(platforms: &[Aabb]) -> f32 {
    if platforms.is_empty() {
        return VIEWPORT_WIDTH;
    }
    platforms.iter().map(Aabb::right).fold(0.0, f32::max)
}

/// The built-in campaign, in play order
pub fn campaign() -> Vec<Level> {
    vec![level_one(), level_two()]
}

fn level_one() -> Level {
    let t = TILE_SIZE;
    let platforms = vec![
        Aabb::from_tiles(0, 15, 20, 1), // ground
        Aabb::from_tiles(6, 12, 3, 1),
        Aabb::from_tiles(10, 14, 3, 1),
        Aabb::from_tiles(15, 10, 4, 1),
        Aabb::from_tiles(22, 8, 3, 1),
        Aabb::from_tiles(26, 11, 4, 1),
        Aabb::from_tiles(30, 14, 5, 1),
        Aabb::from_tiles(36, 12, 4, 1),
        Aabb::from_tiles(41, 9, 3, 1),
        Aabb::from_tiles(45, 7, 5, 1),
        Aabb::from_tiles(52, 12, 3, 1),
        Aabb::from_tiles(56, 14, 4, 1),
        Aabb::from_tiles(66, 14, 4, 1),
    ];
    let enemies = vec![
        EnemySpawn {
            pos: Vec2::new(8.0 * t, 13.0 * t),
            speed: ENEMY_SPEED,
        },
        EnemySpawn {
            pos: Vec2::new(24.0 * t, 7.0 * t),
            speed: ENEMY_SPEED,
        },
        EnemySpawn {
            pos: Vec2::new(38.0 * t, 11.0 * t),
            speed: ENEMY_SPEED,
        },
    ];
    Level::new(
        platforms,
        enemies,
        Aabb::from_tiles(66, 13, 1, 1),
        Aabb::from_tiles(16, 9, 1, 1),
        DEFAULT_PLAYER_SPAWN,
    )
}

fn level_two() -> Level {
    let t = TILE_SIZE;
    let platforms = vec![
        Aabb::from_tiles(0, 15, 12, 1), // shorter ground, gaps start earlier
        Aabb::from_tiles(14, 13, 3, 1),
        Aabb::from_tiles(19, 11, 3, 1),
        Aabb::from_tiles(24, 9, 4, 1),
        Aabb::from_tiles(30, 12, 4, 1),
        Aabb::from_tiles(36, 10, 3, 1),
        Aabb::from_tiles(41, 13, 6, 1),
        Aabb::from_tiles(49, 11, 3, 1),
        Aabb::from_tiles(54, 9, 4, 1),
        Aabb::from_tiles(60, 12, 5, 1),
    ];
    let enemies = vec![
        EnemySpawn {
            pos: Vec2::new(4.0 * t, 14.0 * t),
            speed: ENEMY_SPEED,
        },
        EnemySpawn {
            pos: Vec2::new(26.0 * t, 8.0 * t),
            speed: ENEMY_SPEED,
        },
        EnemySpawn {
            pos: Vec2::new(43.0 * t, 12.0 * t),
            speed: 2.5,
        },
    ];
    Level::new(
        platforms,
        enemies,
        Aabb::from_tiles(63, 11, 1, 1),
        Aabb::from_tiles(25, 8, 1, 1),
        DEFAULT_PLAYER_SPAWN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_width_is_rightmost_platform_edge() {
        let level = level_one();
        // Rightmost platform spans tiles 66..70
        assert_eq!(level.world_width(), 70.0 * TILE_SIZE);
        // Not the last-declared platform by accident: reverse the list
        let mut platforms = level.platforms.clone();
        platforms.reverse();
        assert_eq!(world_width_of(&platforms), 70.0 * TILE_SIZE);
    }

    #[test]
    fn test_empty_level_spans_one_viewport() {
        assert_eq!(world_width_of(&[]), VIEWPORT_WIDTH);
    }

    #[test]
    fn test_campaign_levels_are_self_consistent() {
        let levels = campaign();
        assert!(levels.len() >= 2);
        for level in &levels {
            assert!(!level.platforms.is_empty());
            assert!(level.goal.right() <= level.world_width());
            assert!(level.powerup.right() <= level.world_width());
            assert!(level.player_spawn.x >= 0.0);
            for spawn in &level.enemies {
                assert!(spawn.speed > 0.0);
                assert!(spawn.pos.x + TILE_SIZE <= level.world_width());
            }
        }
    }
}
