//! Read-only state surface for the presentation layer
//!
//! The shell renders from a [`Snapshot`] and feeds commands back through
//! [`super::TickInput`]; it never holds a mutable reference into the core.

use serde::Serialize;

use super::rect::Rect;
use super::state::{BrickTier, GamePhase, GameState, PowerUpKind};

/// Paddle as the presentation layer sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaddleView {
    pub rect: Rect,
    pub strong: bool,
}

/// Brick as the presentation layer sees it. Inactive bricks stay listed so
/// the shell can draw the flash fading out.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BrickView {
    pub rect: Rect,
    pub active: bool,
    pub flashing: bool,
    pub tier: BrickTier,
}

/// Power-up as the presentation layer sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PowerUpView {
    pub rect: Rect,
    pub kind: PowerUpKind,
}

/// One frame's worth of drawable state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub lives: u32,
    pub multiplier: u32,
    pub phase: GamePhase,
    pub paddle: PaddleView,
    pub balls: Vec<Rect>,
    pub bricks: Vec<BrickView>,
    pub power_ups: Vec<PowerUpView>,
}

impl GameState {
    /// Capture the current frame for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            lives: self.lives,
            multiplier: self.score_multiplier,
            phase: self.phase,
            paddle: PaddleView {
                rect: self.paddle.rect,
                strong: self.paddle.is_strong(),
            },
            balls: self.balls.iter().map(|ball| ball.rect).collect(),
            bricks: self
                .bricks
                .iter()
                .map(|brick| BrickView {
                    rect: brick.rect,
                    active: brick.active,
                    flashing: brick.flashing,
                    tier: brick.tier(),
                })
                .collect(),
            power_ups: self
                .power_ups
                .iter()
                .map(|power_up| PowerUpView {
                    rect: power_up.rect,
                    kind: power_up.kind,
                })
                .collect(),
        }
    }
}
