//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame callback, no wall-clock scaling
//! - Fixed update order (ball, computer paddle, walls, paddles, scoring)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::ball_paddle_collision;
pub use state::{Ball, GamePhase, GameState, Paddle};
pub use tick::{TickEvents, TickInput, tick};
