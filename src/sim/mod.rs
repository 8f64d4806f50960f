//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BrickHit, first_brick_hit, paddle_bounce};
pub use level::bricks_for_level;
pub use rect::Rect;
pub use snapshot::{BrickView, PaddleView, PowerUpView, Snapshot};
pub use state::{Ball, Brick, BrickTier, GamePhase, GameState, Paddle, PowerUp, PowerUpKind};
pub use tick::{TickInput, tick};
