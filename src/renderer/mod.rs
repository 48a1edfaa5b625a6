//! Canvas 2D rendering
//!
//! Draws a whole frame from the current `GameState`: background, center net,
//! both paddles, and the ball. The simulation never draws; the frame driver
//! calls `render` once after each tick.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::settings::Theme;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    theme: Theme,
}

impl CanvasRenderer {
    /// Build a renderer over the canvas's 2D context
    pub fn new(canvas: &HtmlCanvasElement, theme: Theme) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, theme })
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_rect(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT, &self.theme.background);
        self.draw_net();

        let player = &state.player;
        self.draw_rect(player.x, player.y, player.width, player.height, &self.theme.player);
        let computer = &state.computer;
        self.draw_rect(
            computer.x,
            computer.y,
            computer.width,
            computer.height,
            &self.theme.computer,
        );

        self.draw_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius, &self.theme.ball)
    }

    fn draw_rect(&self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn draw_circle(&self, x: f32, y: f32, radius: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU)?;
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    /// Dashed stripe down the middle of the court
    fn draw_net(&self) {
        let x = ARENA_WIDTH / 2.0 - NET_WIDTH / 2.0;
        let mut y = 0.0;
        while y <= ARENA_HEIGHT {
            self.draw_rect(x, y, NET_WIDTH, NET_DASH_HEIGHT, &self.theme.net);
            y += NET_DASH_SPACING;
        }
    }
}
