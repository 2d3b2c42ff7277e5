//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (units are pixels per tick)
//! - No wall-clock timers; timed effects are tick countdowns
//! - Stable iteration order (level-declared platform order, spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

/// Re-exported so embedders can build level data without their own glam dep
pub use glam::Vec2;

pub use collision::{Side, resolve};
pub use level::{EnemySpawn, Level, campaign, world_width_of};
pub use rect::Aabb;
pub use state::{
    Camera, DeathCause, Enemy, GameEvent, GamePhase, Player, PowerUp, SimState, Snapshot,
};
pub use tick::{TickInput, advance, tick};
