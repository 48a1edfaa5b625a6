//! Net Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use net_pong::Settings;
    use net_pong::consts::*;
    use net_pong::renderer::CanvasRenderer;
    use net_pong::sim::{GamePhase, GameState, TickEvents, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        renderer: CanvasRenderer,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        /// Scoreboard DOM needs a refresh
        scoreboard_dirty: bool,
    }

    impl Game {
        fn new(renderer: CanvasRenderer, settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                input: TickInput::default(),
                renderer,
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                scoreboard_dirty: true,
            }
        }

        /// Run exactly one simulation tick and clear one-shot inputs
        fn update(&mut self) -> TickEvents {
            let restarted = self.input.restart;
            let events = tick(&mut self.state, &self.input);
            self.input.restart = false;

            if restarted || events.player_scored || events.computer_scored {
                self.scoreboard_dirty = true;
            }
            if events.match_over {
                log::info!(
                    "match over: player {} - {} computer",
                    self.state.player.score,
                    self.state.computer.score
                );
            }
            events
        }

        /// Rolling 60-frame FPS window
        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update scoreboard and overlays in the DOM
        fn update_hud(&mut self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if self.scoreboard_dirty {
                if let Some(el) = document.get_element_by_id("player-score") {
                    el.set_text_content(Some(&self.state.player.score.to_string()));
                }
                if let Some(el) = document.get_element_by_id("computer-score") {
                    el.set_text_content(Some(&self.state.computer.score.to_string()));
                }
                self.scoreboard_dirty = false;
            }

            // Show/hide the game-over overlay
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::MatchOver {
                    if let Some(winner) = document.get_element_by_id("winner") {
                        let text = if self.state.player.score >= WIN_SCORE {
                            "You win!"
                        } else {
                            "Computer wins!"
                        };
                        winner.set_text_content(Some(text));
                    }
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // FPS counter
            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Net Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);

        let settings = Settings::load();
        let renderer = CanvasRenderer::new(&canvas, settings.effective_theme())
            .expect("no 2d canvas context");

        let game = Rc::new(RefCell::new(Game::new(renderer, settings)));

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        // Paint the initial scoreboard before the first frame
        game.borrow_mut().update_hud();

        request_animation_frame(game);

        log::info!("Net Pong running!");
    }

    /// Map a vertical position in CSS pixels to arena units
    fn css_to_arena_y(css_y: f32, css_height: f32) -> f32 {
        if css_height > 0.0 {
            css_y * ARENA_HEIGHT / css_height
        } else {
            css_y
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let h = canvas_clone.client_height() as f32;
                let y = css_to_arena_y(event.offset_y() as f32, h);
                game.borrow_mut().input.cursor_y = Some(y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let css_y = touch.client_y() as f32 - rect.top() as f32;
                    let y = css_to_arena_y(css_y, rect.height() as f32);
                    game.borrow_mut().input.cursor_y = Some(y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.restart = true;
                log::info!("Restart requested");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation tick, one painted frame per display refresh
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.track_fps(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Net Pong (native) starting...");
    log::info!("Run with `trunk serve` for the browser version; playing a headless match");

    headless_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation to a finished match with the player paddle parked,
/// logging each point as it lands.
#[cfg(not(target_arch = "wasm32"))]
fn headless_match() {
    use net_pong::sim::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new();
    let input = TickInput::default();
    let mut ticks: u64 = 0;

    while state.phase == GamePhase::Playing && ticks < 1_000_000 {
        let events = tick(&mut state, &input);
        ticks += 1;
        if events.player_scored || events.computer_scored {
            log::info!(
                "point after {} ticks: player {} - {} computer",
                ticks,
                state.player.score,
                state.computer.score
            );
        }
    }

    println!(
        "final score: player {} - {} computer ({} ticks)",
        state.player.score, state.computer.score, ticks
    );
}
