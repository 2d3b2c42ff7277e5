//! Ledge Runner - a side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Data-driven tuning and campaign loading
//!
//! Rendering, raw input capture and frame scheduling live outside this crate.
//! An embedding drives the core through [`sim::advance`] once per display
//! frame, handing in the current input flags and drawing whatever the
//! returned snapshot contains.

pub mod config;
pub mod sim;

pub use config::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Nominal rate of the external tick driver (display frames per second)
    pub const TICK_HZ: u32 = 60;

    /// Level geometry is authored on this grid (pixels)
    pub const TILE_SIZE: f32 = 32.0;

    /// Viewport dimensions (pixels)
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 512.0;

    /// Downward acceleration applied to airborne actors (px/tick²)
    pub const GRAVITY: f32 = 0.5;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_FORCE: f32 = 12.0;
    /// Sprint multiplies horizontal speed
    pub const SPRINT_MULTIPLIER: f32 = 1.5;

    /// Enemy patrol speed (px/tick)
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Jump power-up force multiplier
    pub const JUMP_BOOST_MULTIPLIER: f32 = 1.5;
    /// Jump power-up duration
    pub const JUMP_BOOST_TICKS: u32 = 600; // 10 seconds at 60 Hz

    /// Stomp bounce is -jump_force divided by this (slightly more than a jump)
    pub const STOMP_BOUNCE_DIVISOR: f32 = 0.9;
}
