//! Neon Breaker - a brick-breaking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `highscores`: Single-integer high score persistence
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input translation and audio live in an external shell: it
//! feeds `sim::TickInput` commands in and reads `sim::Snapshot` back out,
//! once per tick, and never holds a mutable reference into the core.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::{FileHighScores, HighScoreStore, MemoryHighScores};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Height of the score header; the playfield starts below it
    pub const HUD_HEIGHT: f32 = 100.0;

    /// Ball defaults (speeds are in units per tick)
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Minimum ball speed (bounces can't slow it below this)
    pub const BALL_MIN_SPEED: f32 = 4.0;
    /// Maximum ball speed
    pub const BALL_MAX_SPEED: f32 = 15.0;

    /// Paddle defaults
    pub const PADDLE_START_X: f32 = 350.0;
    pub const PADDLE_Y: f32 = 550.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 20.0;
    pub const PADDLE_MIN_WIDTH: f32 = 40.0;
    pub const PADDLE_MAX_WIDTH: f32 = 200.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: u32 = 6;
    pub const BRICK_ROW_GAP: f32 = 5.0;
    /// Vertical offset of the first brick row below the header
    pub const BRICK_TOP_OFFSET: f32 = 20.0;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const POWER_UP_FALL_SPEED: f32 = 3.0;

    /// Session defaults
    pub const START_LIVES: u32 = 3;
    /// Highest level reachable through a direct jump
    pub const MAX_LEVEL: u32 = 9;

    /// Brick flash decay, in ticks (0.2 s)
    pub const FLASH_TICKS: u32 = 12;
    /// Score multiplier duration, in ticks (10 s)
    pub const MULTIPLIER_TICKS: u32 = 600;
    /// Strong paddle duration, in ticks (10 s)
    pub const STRONG_TICKS: u32 = 600;
}
