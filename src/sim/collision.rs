//! Collision detection and response
//!
//! Paddle bounces depend on where the ball lands along the paddle; brick
//! hits resolve against the side with the smallest penetration and snap the
//! ball out of the overlap so a single impact cannot trigger twice.

use super::rect::Rect;
use super::state::{Ball, Brick, Paddle};

/// Outcome of a resolved brick impact
#[derive(Debug, Clone, Copy)]
pub struct BrickHit {
    /// Point value of the destroyed brick
    pub points: u32,
    /// Drop point for a spawned power-up (brick center x, brick bottom)
    pub drop_x: f32,
    pub drop_y: f32,
}

/// Bounce the ball off the paddle if they overlap.
///
/// The bounce angle is impact-position-dependent: dead center sends the ball
/// straight up, edges deflect it sideways in proportion to the offset.
/// Vertical speed is forced upward at 0.9x the current speed, and the ball
/// is re-seated on the paddle top so it cannot trigger again next tick.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect.intersects(&paddle.rect) {
        return false;
    }

    let relative_x = (ball.rect.center().x - paddle.rect.left()) / paddle.rect.width();
    let speed = ball.speed();
    ball.vel.y = -(speed * 0.9).abs();
    ball.vel.x = speed * 0.7 * (relative_x - 0.5) * 2.0;
    ball.rect.set_bottom(paddle.rect.top());
    true
}

/// Resolve the ball against the first active brick it overlaps.
///
/// Only one brick is consumed per call; any others overlapped this tick are
/// left for subsequent ticks. The hit brick is destroyed and starts
/// flashing, and its point value and drop point are returned.
pub fn first_brick_hit(ball: &mut Ball, bricks: &mut [Brick]) -> Option<BrickHit> {
    for brick in bricks.iter_mut() {
        if !brick.active || !ball.rect.intersects(&brick.rect) {
            continue;
        }
        deflect(ball, &brick.rect);
        brick.start_flash();
        return Some(BrickHit {
            points: brick.points,
            drop_x: brick.rect.center().x,
            drop_y: brick.rect.bottom(),
        });
    }
    None
}

/// Negate the velocity component facing the impacted side and snap the ball
/// flush against that edge.
///
/// The side of impact is the smallest of the four penetration depths; ties
/// go to the horizontal branch, which is checked first.
fn deflect(ball: &mut Ball, brick: &Rect) {
    let overlap_left = ball.rect.right() - brick.left();
    let overlap_right = brick.right() - ball.rect.left();
    let overlap_top = ball.rect.bottom() - brick.top();
    let overlap_bottom = brick.bottom() - ball.rect.top();
    let min_overlap = overlap_left
        .min(overlap_right)
        .min(overlap_top)
        .min(overlap_bottom);

    if min_overlap == overlap_left || min_overlap == overlap_right {
        ball.vel.x = -ball.vel.x;
        if min_overlap == overlap_left {
            ball.rect.set_right(brick.left());
        } else {
            ball.rect.set_left(brick.right());
        }
    } else {
        ball.vel.y = -ball.vel.y;
        if min_overlap == overlap_top {
            ball.rect.set_bottom(brick.top());
        } else {
            ball.rect.set_top(brick.bottom());
        }
    }
}
