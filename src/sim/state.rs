//! Simulation state and core types
//!
//! Everything the tick mutates lives here, owned by a single [`SimState`];
//! there are no ambient globals. The external renderer never touches the
//! state directly, it only sees the [`Snapshot`] handed back by `advance`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{EnemySpawn, Level};
use super::rect::Aabb;
use crate::config::{ConfigError, Tuning};
use crate::consts::{TILE_SIZE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; waiting for confirm
    Start,
    /// Active simulation
    Playing,
    /// Frozen mid-run; pause toggles back
    Paused,
    /// Run ended; confirm restarts the current level
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Fell below the bottom of the viewport
    FellOffWorld,
    /// Touched an enemy from the side or below
    EnemyContact,
}

/// Things that happened during a tick, surfaced to the embedding layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player reached the goal of the given level index
    LevelCompleted(usize),
    /// The last level was completed; the campaign loops back to the first
    CampaignCompleted,
    EnemyStomped,
    PowerUpCollected,
    JumpBoostExpired,
    PlayerKilled(DeathCause),
}

/// The player avatar; one instance, owned by the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Aabb,
    pub vel: Vec2,
    /// Base horizontal speed (px/tick)
    pub speed: f32,
    /// Upward impulse applied on jump; raised while the jump boost runs
    pub jump_force: f32,
    pub default_jump_force: f32,
    pub grounded: bool,
}

impl Player {
    pub fn spawn(at: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Aabb::new(at.x, at.y, TILE_SIZE, TILE_SIZE),
            vel: Vec2::ZERO,
            speed: tuning.player_speed,
            jump_force: tuning.jump_force,
            default_jump_force: tuning.jump_force,
            grounded: false,
        }
    }

    /// Reset to a level-start pose; also restores the default jump force
    pub fn respawn(&mut self, at: Vec2) {
        self.body.pos = at;
        self.vel = Vec2::ZERO;
        self.jump_force = self.default_jump_force;
        self.grounded = false;
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Aabb,
    /// Vertical velocity; horizontal motion is `speed * direction`
    pub vel_y: f32,
    pub speed: f32,
    /// Patrol direction, -1.0 or 1.0
    pub direction: f32,
    pub grounded: bool,
    /// Cleared by a stomp; dead enemies are compacted out after the
    /// interaction pass, never removed mid-iteration
    pub alive: bool,
}

impl Enemy {
    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        Self {
            body: Aabb::new(spawn.pos.x, spawn.pos.y, TILE_SIZE, TILE_SIZE),
            vel_y: 0.0,
            speed: spawn.speed,
            direction: 1.0,
            grounded: false,
            alive: true,
        }
    }
}

/// The level's jump power-up pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub body: Aabb,
    /// Cleared on pickup for the remainder of the level's life
    pub active: bool,
}

/// Scroll offset derived from the player each frame; x is the only part
/// that ever moves
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Camera {
    /// Center on the player, clamped to the world's horizontal extent.
    /// A world narrower than the viewport pins the camera at zero.
    pub fn follow(&mut self, player: &Aabb, world_width: f32) {
        let centered = player.left() - self.width / 2.0 + player.size.x / 2.0;
        let max_x = (world_width - self.width).max(0.0);
        self.x = centered.clamp(0.0, max_x);
    }
}

/// Complete simulation state, owned by the embedding driver
#[derive(Debug, Clone)]
pub struct SimState {
    levels: Vec<Level>,
    /// Index into the campaign of the level being played
    pub level_index: usize,
    pub phase: GamePhase,
    /// Ticks simulated so far (Playing ticks only)
    pub tick: u64,
    pub tuning: Tuning,
    /// Data of the current level
    pub level: Level,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub powerup: PowerUp,
    /// Jump boost ticks remaining; 0 means no boost is running
    pub boost_ticks: u32,
    pub camera: Camera,
}

impl SimState {
    /// Create a simulation over the given campaign, starting at the title
    /// screen of its first level
    pub fn new(levels: Vec<Level>, tuning: Tuning) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::EmptyCampaign);
        }
        let first = levels[0].clone();
        let mut state = Self {
            player: Player::spawn(first.player_spawn, &tuning),
            enemies: Vec::new(),
            powerup: PowerUp {
                body: first.powerup,
                active: true,
            },
            level: first,
            levels,
            level_index: 0,
            phase: GamePhase::Start,
            tick: 0,
            tuning,
            boost_ticks: 0,
            camera: Camera::default(),
        };
        state.load_level(0);
        Ok(state)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Switch to the given level and reset every per-level entity: player
    /// back to the spawn pose with the default jump force, enemies rebuilt
    /// fresh from the level's spawns, power-up re-armed, boost countdown
    /// cancelled. An out-of-range index is clamped to the last level.
    pub fn load_level(&mut self, index: usize) {
        let index = index.min(self.levels.len() - 1);
        self.level_index = index;
        self.level = self.levels[index].clone();
        self.player.respawn(self.level.player_spawn);
        self.enemies = self.level.enemies.iter().map(Enemy::from_spawn).collect();
        self.powerup = PowerUp {
            body: self.level.powerup,
            active: true,
        };
        self.boost_ticks = 0;
        self.camera = Camera::default();
    }

    /// Assemble the frame description handed to the external renderer
    pub fn snapshot(&self, events: Vec<GameEvent>) -> Snapshot {
        Snapshot {
            phase: self.phase,
            level_index: self.level_index,
            tick: self.tick,
            platforms: self.level.platforms.clone(),
            player: self.player.body,
            enemies: self
                .enemies
                .iter()
                .filter(|e| e.alive)
                .map(|e| e.body)
                .collect(),
            goal: self.level.goal,
            powerup: self.powerup.body,
            powerup_active: self.powerup.active,
            camera_x: self.camera.x,
            boost_ticks: self.boost_ticks,
            events,
        }
    }
}

/// Everything an external renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub level_index: usize,
    pub tick: u64,
    pub platforms: Vec<Aabb>,
    pub player: Aabb,
    /// Bodies of the enemies still alive
    pub enemies: Vec<Aabb>,
    pub goal: Aabb,
    pub powerup: Aabb,
    pub powerup_active: bool,
    pub camera_x: f32,
    /// Jump boost ticks remaining; 0 when no boost is running
    pub boost_ticks: u32,
    /// Events raised during this tick
    pub events: Vec<GameEvent>,
}
