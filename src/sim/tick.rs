//! Per-frame simulation tick
//!
//! Advances the rally by exactly one step. The host calls this once per
//! display refresh; a tick is the unit of simulated time and nothing here is
//! scaled by wall-clock delta.

use crate::consts::*;

use super::collision::ball_paddle_collision;
use super::state::{Ball, GamePhase, GameState, Paddle};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer vertical position in arena units; the player paddle centers
    /// on it. `None` leaves the paddle where it is.
    pub cursor_y: Option<f32>,
    /// Restart request from the control surface (one-shot)
    pub restart: bool,
}

/// What happened during a tick, for the scoreboard and HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub player_scored: bool,
    pub computer_scored: bool,
    /// Set on the tick the winning point lands
    pub match_over: bool,
}

/// Advance the game state by one tick.
///
/// Restart is honored in any phase. Pointer tracking stays live even after
/// the match ends; everything else is a no-op outside `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    if input.restart {
        state.reset_match();
    }

    if let Some(cursor_y) = input.cursor_y {
        state.player.track_cursor(cursor_y);
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    // Integrate ball position, one fixed step
    state.ball.pos += state.ball.vel;

    // Computer paddle follows the ball vertically. Unlike the player paddle
    // it is never clamped to the arena, so it can overshoot the edges.
    let offset = state.ball.pos.y - state.computer.center_y();
    state.computer.y += offset * AI_FOLLOW_FACTOR;

    // Top/bottom wall bounce. Position is not clamped, so a fast ball can
    // sit past the wall for a tick before the bounce shows.
    if state.ball.pos.y + state.ball.radius > ARENA_HEIGHT
        || state.ball.pos.y - state.ball.radius < 0.0
    {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Whichever side the ball is on defends
    let on_player_half = state.ball.pos.x < ARENA_WIDTH / 2.0;
    let paddle = if on_player_half {
        &state.player
    } else {
        &state.computer
    };

    if ball_paddle_collision(&state.ball, paddle) {
        deflect(&mut state.ball, paddle, on_player_half);
    }

    // Scoring at the left/right boundaries
    if state.ball.pos.x - state.ball.radius < 0.0 {
        state.computer.score += 1;
        events.computer_scored = true;
        state.ball.reset();
    } else if state.ball.pos.x + state.ball.radius > ARENA_WIDTH {
        state.player.score += 1;
        events.player_scored = true;
        state.ball.reset();
    }

    // First side to the winning score ends the match
    if state.player.score >= WIN_SCORE || state.computer.score >= WIN_SCORE {
        state.phase = GamePhase::MatchOver;
        events.match_over = true;
    }

    events
}

/// Rebuild ball velocity from where it struck the paddle face.
///
/// Impacts near the paddle center leave flat, impacts near the edge deflect
/// up to `MAX_BOUNCE_ANGLE`; every return also speeds the ball up.
fn deflect(ball: &mut Ball, paddle: &Paddle, toward_computer: bool) {
    // Normalized impact offset; leaves [-1, 1] when the ball center is past
    // the paddle span.
    let hit = (ball.pos.y - paddle.center_y()) / (paddle.height / 2.0);
    let angle = hit * MAX_BOUNCE_ANGLE;

    let direction = if toward_computer { 1.0 } else { -1.0 };
    ball.vel.x = direction * ball.speed * angle.cos();
    ball.vel.y = ball.speed * angle.sin();
    ball.speed += BALL_SPEED_INCREMENT;
}
