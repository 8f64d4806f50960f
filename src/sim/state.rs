//! Game state and core simulation types
//!
//! The `GameState` exclusively owns every entity in play. External code
//! mutates it only through `tick()` commands and reads it through snapshots.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

use super::level::bricks_for_level;
use super::rect::Rect;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// All lives spent
    GameOver,
    /// Every brick in the level destroyed
    Victory,
}

/// The moving physical actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in units per tick
    pub vel: Vec2,
}

impl Ball {
    /// Spawn centered horizontally just below the header, moving upward with
    /// a random horizontal sign.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let mut vel = Vec2::new(BALL_BASE_SPEED, -BALL_BASE_SPEED);
        if rng.random_bool(0.5) {
            vel.x = -vel.x;
        }
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH - BALL_SIZE) / 2.0,
                HUD_HEIGHT + 100.0,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel,
        }
    }

    /// Current speed magnitude.
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one tick: move by the velocity, bounce off the side and top
    /// walls, then renormalize speed. The bottom edge has no wall; balls
    /// leaving there are reported by [`Ball::is_out`].
    pub fn advance(&mut self) {
        self.rect.pos += self.vel;

        if self.rect.left() <= 0.0 {
            self.rect.set_left(0.0);
            self.vel.x = self.vel.x.abs();
        } else if self.rect.right() >= SCREEN_WIDTH {
            self.rect.set_right(SCREEN_WIDTH);
            self.vel.x = -self.vel.x.abs();
        }
        if self.rect.top() <= HUD_HEIGHT {
            self.rect.set_top(HUD_HEIGHT);
            self.vel.y = self.vel.y.abs();
        }

        self.clamp_speed();
    }

    /// Renormalize speed into `[BALL_MIN_SPEED, BALL_MAX_SPEED]` by scaling
    /// both components.
    ///
    /// A degenerate zero velocity would divide by zero when scaling up to
    /// the minimum; it is reset to a straight upward serve instead.
    pub fn clamp_speed(&mut self) {
        let speed = self.vel.length();
        if speed < f32::EPSILON {
            self.vel = Vec2::new(0.0, -BALL_MIN_SPEED);
        } else if speed > BALL_MAX_SPEED {
            self.vel *= BALL_MAX_SPEED / speed;
        } else if speed < BALL_MIN_SPEED {
            self.vel *= BALL_MIN_SPEED / speed;
        }
    }

    /// True once the ball's top edge has passed the bottom of the screen.
    pub fn is_out(&self) -> bool {
        self.rect.top() >= SCREEN_HEIGHT
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal movement per tick while a direction is held
    pub speed: f32,
    strong: bool,
    strong_ticks: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(PADDLE_START_X, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            strong: false,
            strong_ticks: 0,
        }
    }

    /// Shift by the movement speed per held direction, then clamp to the
    /// screen. The clamp runs every tick, so width changes can never leave
    /// the paddle hanging off the edge.
    pub fn advance(&mut self, left: bool, right: bool) {
        if left {
            self.rect.pos.x -= self.speed;
        }
        if right {
            self.rect.pos.x += self.speed;
        }
        self.clamp_to_screen();
    }

    fn clamp_to_screen(&mut self) {
        let max_x = SCREEN_WIDTH - self.rect.width();
        self.rect.pos.x = self.rect.pos.x.clamp(0.0, max_x);
    }

    /// Resize, keeping the width inside `[PADDLE_MIN_WIDTH, PADDLE_MAX_WIDTH]`.
    pub fn set_width(&mut self, width: f32) {
        self.rect.size.x = width.clamp(PADDLE_MIN_WIDTH, PADDLE_MAX_WIDTH);
        self.clamp_to_screen();
    }

    pub fn is_strong(&self) -> bool {
        self.strong
    }

    /// Arm the strong state; it wears off on its own after ten seconds.
    pub fn make_strong(&mut self) {
        self.strong = true;
        self.strong_ticks = STRONG_TICKS;
    }

    /// Age the strong timer one tick.
    pub fn update(&mut self) {
        if self.strong {
            self.strong_ticks = self.strong_ticks.saturating_sub(1);
            if self.strong_ticks == 0 {
                self.strong = false;
            }
        }
    }
}

/// Cosmetic color band derived from a brick's point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickTier {
    Low,
    Mid,
    High,
}

/// A static destructible obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub points: u32,
    pub active: bool,
    pub flashing: bool,
    flash_ticks: u32,
}

impl Brick {
    pub fn new(rect: Rect, points: u32) -> Self {
        Self {
            rect,
            points,
            active: true,
            flashing: false,
            flash_ticks: 0,
        }
    }

    /// Destroy the brick and kick off the flash. Destruction is
    /// instantaneous; the flash is a cosmetic decay on top of it.
    pub fn start_flash(&mut self) {
        self.flashing = true;
        self.flash_ticks = FLASH_TICKS;
        self.active = false;
    }

    /// Age the flash timer one tick.
    pub fn update(&mut self) {
        if self.flashing {
            self.flash_ticks = self.flash_ticks.saturating_sub(1);
            if self.flash_ticks == 0 {
                self.flashing = false;
            }
        }
    }

    pub fn tier(&self) -> BrickTier {
        if self.points <= 5 {
            BrickTier::Low
        } else if self.points <= 10 {
            BrickTier::Mid
        } else {
            BrickTier::High
        }
    }
}

/// Power-up types; bonuses and maluses share the same pickup mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    ExtraLife,
    IncreasePaddle,
    DecreasePaddle,
    SpeedUpBall,
    SlowBall,
    PointsMultiplier,
}

/// A falling pickup; its kind is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self {
            rect: Rect::new(x, y, POWER_UP_SIZE, POWER_UP_SIZE),
            kind,
        }
    }

    /// Fall one tick at the constant drop speed.
    pub fn fall(&mut self) {
        self.rect.pos.y += POWER_UP_FALL_SPEED;
    }

    /// True once the pickup's top edge has passed the bottom of the screen.
    pub fn is_out(&self) -> bool {
        self.rect.top() >= SCREEN_HEIGHT
    }
}

/// Complete state for one game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// False once the shell has been asked to quit
    pub running: bool,
    pub score: u64,
    pub high_score: u64,
    /// 1 normally, 2 while the points multiplier is active
    pub score_multiplier: u32,
    multiplier_ticks: u32,
    pub level: u32,
    pub lives: u32,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    /// At most one power-up is in play at a time
    pub power_ups: Vec<PowerUp>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tick at which the current level was cleared
    pub victory_tick: Option<u64>,
    pub tuning: Tuning,
    rng: Pcg32,
}

impl GameState {
    /// Create a session at level 1 with the given seed. The high score is
    /// whatever the store collaborator loaded at startup.
    pub fn new(seed: u64, tuning: Tuning, high_score: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            running: true,
            score: 0,
            high_score,
            score_multiplier: 1,
            multiplier_ticks: 0,
            level: 1,
            lives: START_LIVES,
            paddle: Paddle::new(),
            balls: Vec::new(),
            bricks: Vec::new(),
            power_ups: Vec::new(),
            time_ticks: 0,
            victory_tick: None,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.enter_level(1);
        state
    }

    /// Rebuild the level entities: fresh paddle, a single new ball, a full
    /// brick batch, nothing falling.
    fn enter_level(&mut self, level: u32) {
        self.level = level;
        self.paddle = Paddle::new();
        self.balls.clear();
        self.spawn_ball();
        self.bricks = bricks_for_level(level);
        self.power_ups.clear();
        self.victory_tick = None;
        self.phase = GamePhase::Playing;
    }

    /// Full restart: back to level 1 with fresh score, lives and multiplier.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.score_multiplier = 1;
        self.multiplier_ticks = 0;
        self.enter_level(1);
    }

    /// Move on to the next level; score, lives and multiplier carry over.
    pub fn advance_level(&mut self) {
        self.enter_level(self.level + 1);
    }

    /// Jump straight to a level in `1..=MAX_LEVEL`; anything else is ignored.
    pub fn jump_to_level(&mut self, level: u32) {
        if !(1..=MAX_LEVEL).contains(&level) {
            log::warn!("ignoring jump to out-of-range level {level}");
            return;
        }
        self.enter_level(level);
    }

    /// Put a fresh ball in play (level start, or respawn after a lost life).
    pub fn spawn_ball(&mut self) {
        let ball = Ball::spawn(&mut self.rng);
        self.balls.push(ball);
    }

    /// Count bricks still standing.
    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Roll the drop chance for a destroyed brick and spawn the pickup below
    /// it. Suppressed while another power-up is already in play.
    pub(crate) fn maybe_drop_power_up(&mut self, x: f32, y: f32) {
        if !self.power_ups.is_empty() {
            return;
        }
        if self.rng.random::<f32>() >= self.tuning.drop_chance {
            return;
        }
        if let Some(kind) = self.tuning.power_ups.draw(&mut self.rng) {
            self.power_ups.push(PowerUp::new(x, y, kind));
        }
    }

    /// Apply a collected power-up to the session.
    pub fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::ExtraLife => self.lives += 1,
            PowerUpKind::IncreasePaddle => {
                let width = self.paddle.rect.width();
                self.paddle.set_width(width + 40.0);
            }
            PowerUpKind::DecreasePaddle => {
                let width = self.paddle.rect.width();
                self.paddle.set_width(width - 20.0);
            }
            PowerUpKind::SpeedUpBall => {
                for ball in &mut self.balls {
                    ball.vel *= 1.5;
                    ball.clamp_speed();
                }
            }
            PowerUpKind::SlowBall => {
                for ball in &mut self.balls {
                    ball.vel *= 0.7;
                    ball.clamp_speed();
                }
            }
            PowerUpKind::PointsMultiplier => {
                self.score_multiplier = 2;
                self.multiplier_ticks = MULTIPLIER_TICKS;
            }
        }
    }

    /// Expire the timed score multiplier.
    pub(crate) fn update_effects(&mut self) {
        if self.score_multiplier > 1 {
            self.multiplier_ticks = self.multiplier_ticks.saturating_sub(1);
            if self.multiplier_ticks == 0 {
                self.score_multiplier = 1;
            }
        }
    }
}
