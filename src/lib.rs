//! Net Pong - the classic two-paddle arcade game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `renderer`: Canvas 2D drawing (wasm only)
//! - `settings`: Display preferences persisted in LocalStorage

pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use settings::{Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions (canvas units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Speed gained on every paddle return; there is no upper cap
    pub const BALL_SPEED_INCREMENT: f32 = 0.2;
    /// Maximum deflection off a paddle edge (±45°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Proportional follow factor for the computer paddle, 0 to 1
    pub const AI_FOLLOW_FACTOR: f32 = 0.1;

    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 5;

    /// Center net: stripe width, dash height, dash repeat spacing
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_DASH_HEIGHT: f32 = 10.0;
    pub const NET_DASH_SPACING: f32 = 15.0;
}
