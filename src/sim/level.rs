//! Level layout factory
//!
//! Brick batches are a pure function of the level number: `level + 2` rows
//! of six bricks each, spaced to leave seven equal gaps across the screen,
//! with the top rows worth the most points.

use crate::consts::*;

use super::rect::Rect;
use super::state::Brick;

/// Build the brick batch for a level.
pub fn bricks_for_level(level: u32) -> Vec<Brick> {
    let rows = level + 2;
    let gap = (SCREEN_WIDTH - BRICK_COLUMNS as f32 * BRICK_WIDTH) / (BRICK_COLUMNS + 1) as f32;
    let start_y = HUD_HEIGHT + BRICK_TOP_OFFSET;

    let mut bricks = Vec::with_capacity((rows * BRICK_COLUMNS) as usize);
    for row in 0..rows {
        let y = start_y + row as f32 * (BRICK_HEIGHT + BRICK_ROW_GAP);
        let points = (rows - row) * 5;
        for col in 0..BRICK_COLUMNS {
            let x = gap + col as f32 * (BRICK_WIDTH + gap);
            bricks.push(Brick::new(
                Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                points,
            ));
        }
    }
    bricks
}
