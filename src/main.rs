//! Stash Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use stash_runner::audio::WebAudioSink;
    use stash_runner::hud::DomDisplay;
    use stash_runner::renderer::CanvasSurface;
    use stash_runner::sim::GRID;
    use stash_runner::{Session, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session<WebAudioSink, DomDisplay>,
        surface: CanvasSurface,
    }

    /// Milliseconds on the same clock as requestAnimationFrame timestamps
    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    /// Optional `<script id="tuning" type="application/json">` override
    fn load_tuning(document: &Document) -> Tuning {
        match document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        {
            Some(json) => Tuning::from_json_or_default(&json),
            None => Tuning::default(),
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Stash Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(GRID.width() as u32);
        canvas.set_height(GRID.height() as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let tuning = load_tuning(&document);
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(
            tuning,
            seed,
            now(),
            WebAudioSink::new(),
            DomDisplay::new(document.clone()),
        );
        let game = Rc::new(RefCell::new(Game {
            session,
            surface: CanvasSurface::new(ctx),
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_mute_button(&document, game.clone());
        setup_music_timer(game.clone());

        request_animation_frame(game);

        log::info!("Stash Runner running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let handled = game.borrow_mut().session.key_down(&event.key(), now());
                if handled {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer - only unlocks audio
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                game.borrow_mut().session.pointer_down();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_mute_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("muteBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().session.toggle_mute();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Fixed-period music steps, independent of the render loop
    fn setup_music_timer(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let step_ms = game.borrow().session.music_step_ms() as i32;
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().session.music_tick();
        });
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            step_ms,
        );
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let Game { session, surface } = &mut *g;
            session.frame(time, surface);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use stash_runner::Tuning;

    env_logger::init();
    log::info!("Stash Runner (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    // Optional tuning override: `stash-runner path/to/tuning.json`
    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Can't read {}: {} - using default tuning", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    headless::run(tuning, 60.0);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use stash_runner::audio::NullSink;
    use stash_runner::hud::LogDisplay;
    use stash_runner::renderer::DrawList;
    use stash_runner::sim::{GRID, GameState};
    use stash_runner::{Session, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Autopilot key interval, comfortably past the move gate
    const KEY_MS: f64 = 150.0;

    /// Key an eager (and traffic-blind) driver would press next
    fn autopilot_key(state: &GameState) -> &'static str {
        let p = &state.player;
        let (target_col, target_row) = if state.has_cargo {
            let col = GRID
                .drop_cols
                .iter()
                .copied()
                .min_by_key(|c| (c - p.col).abs())
                .unwrap_or(p.col);
            (col, 0)
        } else {
            ((GRID.stash.min_col + GRID.stash.max_col) / 2, GRID.stash.row)
        };

        if p.col < target_col {
            "ArrowRight"
        } else if p.col > target_col {
            "ArrowLeft"
        } else if p.row > target_row {
            "ArrowUp"
        } else {
            "ArrowDown"
        }
    }

    /// Simulate `seconds` of play at 60 fps with a scripted driver
    pub fn run(tuning: Tuning, seconds: f64) {
        let music_ms = tuning.music_step_ms as f64;
        let mut session = Session::new(tuning, 0x5eed, 0.0, NullSink, LogDisplay::new());
        let mut surface = DrawList::new();

        let mut now = 0.0;
        let mut next_key = 0.0;
        let mut next_step = 0.0;
        while now < seconds * 1000.0 {
            if now >= next_key {
                if session.state().is_over() {
                    break;
                }
                let key = autopilot_key(session.state());
                session.key_down(key, now);
                next_key += KEY_MS;
            }
            if now >= next_step {
                session.music_tick();
                next_step += music_ms;
            }

            surface.reset();
            session.frame(now, &mut surface);
            now += FRAME_MS;
        }

        let state = session.state();
        log::info!(
            "Demo finished after {:.1}s: {:?}, score {}, deliveries {}, lives {}",
            now / 1000.0,
            state.phase,
            state.score,
            state.deliveries,
            state.lives
        );
        log::info!("Last frame drew {} primitives", surface.len());
    }
}
