//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the whole playfield by a single 60 Hz step:
//! commands, paddle, timed effects, balls, power-ups, bricks, and the
//! terminal checks, in that order.

use crate::highscores::HighScoreStore;

use super::collision;
use super::state::{GamePhase, GameState, PowerUpKind};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Hold the paddle left
    pub move_left: bool,
    /// Hold the paddle right
    pub move_right: bool,
    /// Toggle pause
    pub toggle_pause: bool,
    /// Full restart of the session
    pub restart: bool,
    /// Rebuild entities for the next level
    pub advance_level: bool,
    /// Rebuild entities for a specific level (1..=9; others are ignored)
    pub jump_to_level: Option<u32>,
    /// Ask the shell to terminate the session
    pub quit: bool,
}

/// Advance the game state by one fixed timestep.
///
/// The store collaborator receives the new high score the moment the
/// running score surpasses it; that write is the only I/O in the step.
pub fn tick(state: &mut GameState, input: &TickInput, store: &mut dyn HighScoreStore) {
    // Control commands are honored from any phase.
    if input.quit {
        state.running = false;
        return;
    }
    if let Some(level) = input.jump_to_level {
        state.jump_to_level(level);
    }
    if input.restart {
        state.reset();
    }
    if input.advance_level {
        state.advance_level();
    }
    if input.toggle_pause {
        match state.phase {
            GamePhase::Playing => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    // Simulation only runs while actually playing.
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // Paddle input and timed-state aging.
    state.paddle.update();
    state.paddle.advance(input.move_left, input.move_right);

    // Timed session effects.
    state.update_effects();

    // Balls: move, collide, score. Drop rolls are deferred so the weighted
    // draw happens outside the ball borrow.
    let mut drops: Vec<(f32, f32)> = Vec::new();
    for ball in &mut state.balls {
        ball.advance();
        collision::paddle_bounce(ball, &state.paddle);
        if let Some(hit) = collision::first_brick_hit(ball, &mut state.bricks) {
            state.score += u64::from(hit.points) * u64::from(state.score_multiplier);
            if state.score > state.high_score {
                state.high_score = state.score;
                store.save(state.high_score);
            }
            drops.push((hit.drop_x, hit.drop_y));
        }
    }
    for (x, y) in drops {
        state.maybe_drop_power_up(x, y);
    }

    // A ball is lost once it falls past the bottom edge.
    state.balls.retain(|ball| !ball.is_out());
    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        if state.lives > 0 {
            state.spawn_ball();
        } else {
            state.phase = GamePhase::GameOver;
        }
    }

    // Power-ups: fall, collect on paddle contact, vanish off the bottom.
    // Effects are applied after the retain so they can touch the whole state.
    let mut collected: Vec<PowerUpKind> = Vec::new();
    let paddle_rect = state.paddle.rect;
    state.power_ups.retain_mut(|power_up| {
        power_up.fall();
        if power_up.rect.intersects(&paddle_rect) {
            collected.push(power_up.kind);
            return false;
        }
        !power_up.is_out()
    });
    for kind in collected {
        state.apply_power_up(kind);
    }

    // Brick cosmetic timers, then the victory check.
    for brick in &mut state.bricks {
        brick.update();
    }
    if state.active_bricks() == 0 {
        state.phase = GamePhase::Victory;
        state.victory_tick = Some(state.time_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::highscores::MemoryHighScores;
    use crate::sim::state::{Ball, PowerUp};
    use crate::sim::rect::Rect;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn test_state() -> GameState {
        GameState::new(7, Tuning::default(), 0)
    }

    /// Aim a ball so its next advance lands on the given brick from below.
    fn aim_at_brick(state: &mut GameState, brick_index: usize) {
        let brick = state.bricks[brick_index].rect;
        state.balls[0] = Ball {
            rect: Rect::new(
                brick.center().x - BALL_SIZE / 2.0,
                brick.bottom() + 2.0,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel: Vec2::new(0.0, -5.0),
        };
        // Keep the paddle out of the way.
        state.paddle.rect.pos.x = 0.0;
    }

    #[test]
    fn test_pause_toggles() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        let input = TickInput {
            toggle_pause: true,
            ..Default::default()
        };

        tick(&mut state, &input, &mut store);
        assert_eq!(state.phase, GamePhase::Paused);
        let ticks = state.time_ticks;

        // Paused: nothing advances.
        tick(&mut state, &TickInput::default(), &mut store);
        assert_eq!(state.time_ticks, ticks);

        tick(&mut state, &input, &mut store);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_quit_stops_the_session() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut store);
        assert!(!state.running);
    }

    #[test]
    fn test_brick_destruction_scores_and_saves_high_score() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        aim_at_brick(&mut state, 0);
        let points = state.bricks[0].points;

        tick(&mut state, &TickInput::default(), &mut store);

        assert_eq!(state.score, u64::from(points));
        assert_eq!(state.high_score, state.score);
        assert_eq!(store.stored, state.score);
        assert!(!state.bricks[0].active);
        assert!(state.bricks[0].flashing);
    }

    #[test]
    fn test_multiplier_doubles_brick_points() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        state.apply_power_up(PowerUpKind::PointsMultiplier);
        aim_at_brick(&mut state, 0);
        let points = state.bricks[0].points;

        tick(&mut state, &TickInput::default(), &mut store);
        assert_eq!(state.score, u64::from(points) * 2);
    }

    #[test]
    fn test_last_ball_out_with_one_life_is_game_over() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        state.lives = 1;
        state.balls[0].rect.pos.y = SCREEN_HEIGHT + 50.0;
        state.balls[0].vel = Vec2::new(0.0, 5.0);

        tick(&mut state, &TickInput::default(), &mut store);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);
        assert!(state.balls.is_empty());
    }

    #[test]
    fn test_ball_out_with_lives_left_respawns() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        state.lives = 2;
        state.balls[0].rect.pos.y = SCREEN_HEIGHT + 50.0;
        state.balls[0].vel = Vec2::new(0.0, 5.0);

        tick(&mut state, &TickInput::default(), &mut store);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 1);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].rect.pos, Vec2::new(390.0, 200.0));
    }

    #[test]
    fn test_victory_on_last_brick() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        for brick in &mut state.bricks[1..] {
            brick.start_flash();
        }
        aim_at_brick(&mut state, 0);

        // One active brick left: still playing.
        assert_eq!(state.active_bricks(), 1);
        tick(&mut state, &TickInput::default(), &mut store);

        assert_eq!(state.phase, GamePhase::Victory);
        assert_eq!(state.victory_tick, Some(state.time_ticks));
    }

    #[test]
    fn test_victory_not_triggered_early() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        for brick in &mut state.bricks[1..] {
            brick.start_flash();
        }
        // Ball away from the last brick.
        state.balls[0].rect.pos = Vec2::new(700.0, 400.0);
        state.balls[0].vel = Vec2::new(0.0, -5.0);

        tick(&mut state, &TickInput::default(), &mut store);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_jump_to_level_rebuilds_the_board() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        state.score = 123;
        let input = TickInput {
            jump_to_level: Some(4),
            ..Default::default()
        };

        tick(&mut state, &input, &mut store);

        assert_eq!(state.level, 4);
        assert_eq!(state.bricks.len(), 6 * (4 + 2));
        assert!(state.bricks.iter().all(|b| b.active));
        assert_eq!(state.balls.len(), 1);
        // Jumping keeps the running score.
        assert_eq!(state.score, 123);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        let input = TickInput {
            jump_to_level: Some(12),
            ..Default::default()
        };
        tick(&mut state, &input, &mut store);
        assert_eq!(state.level, 1);

        let input = TickInput {
            jump_to_level: Some(0),
            ..Default::default()
        };
        tick(&mut state, &input, &mut store);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        state.score = 500;
        state.high_score = 500;
        state.lives = 0;
        state.phase = GamePhase::GameOver;

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut store);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.score_multiplier, 1);
        // The high score survives a restart.
        assert_eq!(state.high_score, 500);
    }

    #[test]
    fn test_advance_level_from_victory() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        state.score = 90;
        state.lives = 2;
        state.phase = GamePhase::Victory;

        let input = TickInput {
            advance_level: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut store);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 2);
        assert_eq!(state.bricks.len(), 6 * (2 + 2));
        assert_eq!(state.score, 90);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_at_most_one_power_up_in_play() {
        let mut tuning = Tuning::default();
        tuning.drop_chance = 1.0; // Every destruction rolls a drop.
        let mut state = GameState::new(7, tuning, 0);
        let mut store = MemoryHighScores::default();

        // Two balls each destroying a brick in the same tick.
        let first = state.bricks[0].rect;
        let second = state.bricks[1].rect;
        state.balls.clear();
        for brick in [first, second] {
            state.balls.push(Ball {
                rect: Rect::new(
                    brick.center().x - BALL_SIZE / 2.0,
                    brick.bottom() + 2.0,
                    BALL_SIZE,
                    BALL_SIZE,
                ),
                vel: Vec2::new(0.0, -5.0),
            });
        }
        state.paddle.rect.pos.x = 0.0;

        tick(&mut state, &TickInput::default(), &mut store);
        assert!(!state.bricks[0].active);
        assert!(!state.bricks[1].active);
        assert_eq!(state.power_ups.len(), 1);

        // Another destruction while one is falling spawns nothing.
        aim_at_brick(&mut state, 2);
        tick(&mut state, &TickInput::default(), &mut store);
        assert!(!state.bricks[2].active);
        assert_eq!(state.power_ups.len(), 1);
    }

    #[test]
    fn test_power_up_collected_by_paddle() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        let lives = state.lives;
        let paddle = state.paddle.rect;
        state.power_ups.push(PowerUp::new(
            paddle.center().x - POWER_UP_SIZE / 2.0,
            paddle.top() - POWER_UP_SIZE - 1.0,
            PowerUpKind::ExtraLife,
        ));

        tick(&mut state, &TickInput::default(), &mut store);

        assert!(state.power_ups.is_empty());
        assert_eq!(state.lives, lives + 1);
    }

    #[test]
    fn test_missed_power_up_has_no_effect() {
        let mut state = test_state();
        let mut store = MemoryHighScores::default();
        let lives = state.lives;
        state
            .power_ups
            .push(PowerUp::new(10.0, SCREEN_HEIGHT - 1.0, PowerUpKind::ExtraLife));

        tick(&mut state, &TickInput::default(), &mut store);

        assert!(state.power_ups.is_empty());
        assert_eq!(state.lives, lives);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs evolve identically.
        let mut a = GameState::new(99999, Tuning::default(), 0);
        let mut b = GameState::new(99999, Tuning::default(), 0);
        let mut store_a = MemoryHighScores::default();
        let mut store_b = MemoryHighScores::default();

        let inputs = [
            TickInput {
                move_left: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                jump_to_level: Some(2),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..120 {
            for input in &inputs {
                tick(&mut a, input, &mut store_a);
                tick(&mut b, input, &mut store_b);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.balls, b.balls);
        assert_eq!(a.paddle.rect, b.paddle.rect);
        assert_eq!(store_a.stored, store_b.stored);
    }
}
