//! Game state and core simulation types

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Rally in progress
    Playing,
    /// A side reached the winning score; the simulation is halted until an
    /// external restart
    MatchOver,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used to rebuild velocity on paddle impact. Equals
    /// `vel.length()` right after an impact, then drifts: wall bounces only
    /// negate one axis, and a serve reset leaves the components alone.
    pub speed: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            vel: Vec2::new(BALL_START_SPEED, BALL_START_SPEED),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        }
    }

    /// Recenter for the next serve. The horizontal direction flips so the
    /// serve goes back toward the side that just conceded; the vertical
    /// component carries over from the previous rally.
    pub fn reset(&mut self) {
        self.pos = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
        self.vel.x = -self.vel.x;
        self.speed = BALL_START_SPEED;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// One paddle, axis-aligned, fixed horizontally to its side of the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Left edge (fixed per side)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// New paddle at the given left edge, vertically centered, score zero
    pub fn new(x: f32) -> Self {
        Self {
            x,
            y: (ARENA_HEIGHT - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Center the paddle on `cursor_y`, clamped inside the arena
    pub fn track_cursor(&mut self, cursor_y: f32) {
        self.y = (cursor_y - self.height / 2.0).clamp(0.0, ARENA_HEIGHT - self.height);
    }
}

/// Complete game state, owned by the frame driver and mutated in place
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    /// Left paddle, driven by pointer input
    pub player: Paddle,
    /// Right paddle, driven by the follow controller in `tick`
    pub computer: Paddle,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Playing,
            ball: Ball::new(),
            player: Paddle::new(0.0),
            computer: Paddle::new(ARENA_WIDTH - PADDLE_WIDTH),
        }
    }

    /// Zero both scores, recenter the ball, and resume play
    pub fn reset_match(&mut self) {
        self.player.score = 0;
        self.computer.score = 0;
        self.ball.reset();
        self.phase = GamePhase::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_serve_layout() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.ball.speed, 5.0);
        assert_eq!(state.player.x, 0.0);
        assert_eq!(state.computer.x, 790.0);
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.computer.score, 0);
    }

    #[test]
    fn test_ball_reset_flips_serve_direction_only() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(12.0, 48.0);
        ball.vel = Vec2::new(-7.5, 3.25);
        ball.speed = 9.4;

        ball.reset();

        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(7.5, 3.25));
        assert_eq!(ball.speed, 5.0);
    }

    #[test]
    fn test_match_reset_zeroes_scores_and_resumes() {
        let mut state = GameState::new();
        state.player.score = 5;
        state.computer.score = 3;
        state.phase = GamePhase::MatchOver;
        state.ball.pos = Vec2::new(812.0, 90.0);

        state.reset_match();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.computer.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.speed, 5.0);
    }

    #[test]
    fn test_track_cursor_clamps_to_arena() {
        let mut paddle = Paddle::new(0.0);

        paddle.track_cursor(-200.0);
        assert_eq!(paddle.y, 0.0);

        paddle.track_cursor(5000.0);
        assert_eq!(paddle.y, ARENA_HEIGHT - PADDLE_HEIGHT);

        paddle.track_cursor(300.0);
        assert_eq!(paddle.y, 250.0);
    }
}
