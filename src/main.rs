//! Dash Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use dash_runner::platform::FrameLoop;
    use dash_runner::renderer::CanvasRenderer;
    use dash_runner::sim::{GameState, TickInput, tick};
    use dash_runner::tuning::Tuning;
    use dash_runner::ui;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        input: TickInput,
        renderer: CanvasRenderer,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(seed, &tuning),
                tuning,
                input: TickInput::default(),
                renderer,
            }
        }

        /// One display refresh: tick the sim, draw, update the HUD.
        /// Returns false once the run has terminated, stopping the loop.
        fn frame(&mut self) -> bool {
            let input = self.input.clone();
            tick(&mut self.state, &input, &self.tuning);
            // Clear one-shot inputs after processing
            self.input.jump = false;

            self.renderer.render(&self.state, &self.tuning);
            self.update_hud();

            if self.state.terminated() {
                self.show_game_over();
                false
            } else {
                true
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let document = document();
            if let Some(el) = document.get_element_by_id("score-value") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
        }

        /// Reveal the game-over overlay with the frozen final score
        fn show_game_over(&self) {
            let document = document();
            let score = self.state.score;

            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&score.to_string()));
                let _ = el.set_attribute("class", ui::tier_class(score));
            }
            if let Some(el) = document.get_element_by_id("final-verdict") {
                el.set_text_content(Some(ui::verdict(score)));
                let _ = el.set_attribute("class", ui::tier_class(score));
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", "overlay");
            }
        }

        fn hide_game_over(&self) {
            if let Some(el) = document().get_element_by_id("game-over") {
                let _ = el.set_attribute("class", "overlay hidden");
            }
        }

        /// Reset to a fresh run
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed, &self.tuning);
            self.input = TickInput::default();
            self.hide_game_over();
        }
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dash Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fit the field to narrow viewports, then fix it for the session
        let mut tuning = Tuning::default();
        if let Some(viewport_w) = window.inner_width().ok().and_then(|w| w.as_f64()) {
            let max_w = (viewport_w - 40.0) as f32;
            if max_w < tuning.field_width {
                tuning.field_width = max_w;
            }
        }
        canvas.set_width(tuning.field_width as u32);
        canvas.set_height(tuning.field_height as u32);

        let seed = js_sys::Date::now() as u64;
        let renderer = CanvasRenderer::new(&canvas);
        let game = Rc::new(RefCell::new(Game::new(seed, tuning, renderer)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());

        let frame_loop = Rc::new(FrameLoop::new());
        setup_restart_button(game.clone(), frame_loop.clone());

        start_loop(&frame_loop, &game);

        log::info!("Dash Runner running!");
    }

    /// Subscribe the game to the frame loop. `start` cancels any previous
    /// subscription first, so at most one loop is ever active.
    fn start_loop(frame_loop: &Rc<FrameLoop>, game: &Rc<RefCell<Game>>) {
        let game = game.clone();
        frame_loop.start(move |_time| game.borrow_mut().frame());
    }

    /// Collapse raw device events to the single jump signal; the sim
    /// never sees key codes or touch points.
    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard: Space is the jump key
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" {
                    game.borrow_mut().input.jump = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::TouchEvent| {
                game.borrow_mut().input.jump = true;
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>, frame_loop: Rc<FrameLoop>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                start_loop(&frame_loop, &game);
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dash_runner::sim::{GameState, TickInput, tick};
    use dash_runner::tuning::Tuning;

    env_logger::init();
    log::info!("Dash Runner (native) starting...");
    log::info!("Headless mode - run with `trunk serve` for the web version");

    let tuning = Tuning::default();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, &tuning);
    let mut input = TickInput::default();

    // Scripted pilot: jump whenever an obstacle is closing in
    for _ in 0..10_000 {
        input.jump = state.obstacles.iter().any(|o| {
            let gap = o.pos.x - state.runner.pos.x;
            gap > 0.0 && gap < 60.0
        });
        tick(&mut state, &input, &tuning);
        if state.terminated() {
            break;
        }
    }

    log::info!(
        "headless run: seed {}, {} ticks survived",
        seed,
        state.time_ticks
    );
    println!("Final score: {}", state.score);
}
