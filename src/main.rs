//! Doodle Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use doodle_hop::consts::*;
    use doodle_hop::render::canvas::CanvasRenderer;
    use doodle_hop::render::render;
    use doodle_hop::sim::{GamePhase, GameState, InputCode, InputEvent, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        /// Input events queued by key handlers, drained by the next tick.
        /// Single-threaded: handlers and the frame loop never overlap.
        pending: Vec<InputEvent>,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(seed),
                renderer,
                pending: Vec::new(),
                last_phase: GamePhase::Running,
            }
        }

        /// One animation frame: drain queued input, advance, draw
        fn frame(&mut self) {
            let events = std::mem::take(&mut self.pending);
            tick(&mut self.state, &events);
            render(&self.state, &mut self.renderer);

            if self.state.phase != self.last_phase {
                match self.state.phase {
                    GamePhase::GameOver => {
                        log::info!("game over, display score {}", self.state.score.display)
                    }
                    GamePhase::Running => {
                        log::info!("restarted with seed {}", self.state.seed)
                    }
                }
                self.last_phase = self.state.phase;
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Doodle Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .expect("no canvas")
            .dyn_into()?;
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .expect("no 2d context")
            .dyn_into()?;
        let renderer = CanvasRenderer::new(ctx)?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));
        log::info!("Game initialized with seed: {}", seed);

        setup_key_handler(game.clone())?;
        request_animation_frame(game);

        log::info!("Doodle Hop running!");
        Ok(())
    }

    fn setup_key_handler(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(code) = InputCode::from_key(&event.code()) {
                game.borrow_mut().pending.push(InputEvent::new(code));
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), wasm_bindgen::JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Doodle Hop (native) starting...");
    log::info!("Rendering targets the browser canvas - build with `trunk serve` for the web version");

    // Headless smoke run: a fresh state left alone must keep its platform
    // field stocked and eventually end the run
    let mut state = doodle_hop::sim::GameState::new(42);
    let mut ticks = 0u32;
    while state.phase == doodle_hop::sim::GamePhase::Running && ticks < 100_000 {
        doodle_hop::sim::tick(&mut state, &[]);
        ticks += 1;
    }
    log::info!(
        "headless run ended after {} ticks with display score {}",
        ticks,
        state.score.display
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
