//! Ball vs paddle collision detection
//!
//! The ball is tested by its axis-aligned bounding square against the paddle
//! rectangle. All four comparisons are strict, so edges that merely touch do
//! not count as contact.

use super::state::{Ball, Paddle};

/// Check whether the ball's bounding square overlaps the paddle rectangle.
///
/// Pure and total: no side effects, defined for every well-formed ball and
/// paddle.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    let paddle_top = paddle.y;
    let paddle_bottom = paddle.y + paddle.height;
    let paddle_left = paddle.x;
    let paddle_right = paddle.x + paddle.width;

    let ball_top = ball.pos.y - ball.radius;
    let ball_bottom = ball.pos.y + ball.radius;
    let ball_left = ball.pos.x - ball.radius;
    let ball_right = ball.pos.x + ball.radius;

    ball_right > paddle_left
        && ball_left < paddle_right
        && ball_bottom > paddle_top
        && ball_top < paddle_bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(x, y);
        ball
    }

    #[test]
    fn test_ball_inside_paddle_collides() {
        let paddle = Paddle::new(0.0);
        let ball = ball_at(5.0, paddle.center_y());
        assert!(ball_paddle_collision(&ball, &paddle));
    }

    #[test]
    fn test_distant_ball_misses() {
        let paddle = Paddle::new(0.0);
        let ball = ball_at(400.0, 300.0);
        assert!(!ball_paddle_collision(&ball, &paddle));
    }

    #[test]
    fn test_touching_right_edge_is_not_contact() {
        let paddle = Paddle::new(0.0);
        // Ball's left edge exactly on the paddle's right edge
        let touching = ball_at(paddle.width + 10.0, paddle.center_y());
        assert!(!ball_paddle_collision(&touching, &paddle));

        // Any overlap at all flips the result
        let overlapping = ball_at(paddle.width + 10.0 - 0.5, paddle.center_y());
        assert!(ball_paddle_collision(&overlapping, &paddle));
    }

    #[test]
    fn test_touching_top_edge_is_not_contact() {
        let paddle = Paddle::new(0.0);
        // Ball's bottom edge exactly on the paddle's top edge
        let touching = ball_at(5.0, paddle.y - 10.0);
        assert!(!ball_paddle_collision(&touching, &paddle));

        let overlapping = ball_at(5.0, paddle.y - 10.0 + 0.5);
        assert!(ball_paddle_collision(&overlapping, &paddle));
    }

    #[test]
    fn test_vertical_overlap_alone_misses() {
        // Right paddle, ball at matching height but mid-court
        let paddle = Paddle::new(790.0);
        let ball = ball_at(400.0, paddle.center_y());
        assert!(!ball_paddle_collision(&ball, &paddle));
    }
}
