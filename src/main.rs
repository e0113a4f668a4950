//! Hop Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use hop_pong::input::Key;
    use hop_pong::renderer::CanvasPainter;
    use hop_pong::sim::Arena;
    use hop_pong::{InitError, Session, Settings};

    /// Id of the canvas element the page must provide
    const CANVAS_ID: &str = "gameCanvas";

    /// Game instance holding all state
    struct Game {
        session: Session,
        painter: CanvasPainter,
    }

    pub fn run() -> Result<(), InitError> {
        log::info!("Hop Pong starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| InitError::CanvasMissing(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(CANVAS_ID.to_string()))?;

        let painter = CanvasPainter::new(&canvas)?;
        let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(&settings, arena, seed);

        let game = Rc::new(RefCell::new(Game { session, painter }));

        setup_input_handlers(&window, game.clone())?;

        // Start game loop
        Scheduler::new(move |time| game.borrow_mut().frame(time)).start()?;

        log::info!("Hop Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), InitError> {
        let document = window.document().ok_or(InitError::NoDocument)?;

        // Movement and jumps act on press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().session.key_down(key);
                }
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|_| InitError::ListenerFailed("keydown"))?;
            closure.forget();
        }

        // Kicks act on release
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().session.key_up(key);
                }
            });
            document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(|_| InitError::ListenerFailed("keyup"))?;
            closure.forget();
        }

        Ok(())
    }

    /// Slot holding the page's single animation-frame callback
    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Runs a frame body once per animation frame
    ///
    /// Owns one persistent callback. After the body returns, the scheduler
    /// requests the next frame with that same callback.
    struct Scheduler {
        callback: FrameCallback,
    }

    impl Scheduler {
        fn new(mut on_frame: impl FnMut(f64) + 'static) -> Self {
            let callback: FrameCallback = Rc::new(RefCell::new(None));
            let next = callback.clone();
            *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                on_frame(time);
                if let Err(e) = Self::request(&next) {
                    log::error!("Stopping game loop: {}", e);
                }
            }));
            Self { callback }
        }

        /// Request the first frame. The callback keeps its own slot alive,
        /// so the loop outlives this value.
        fn start(self) -> Result<(), InitError> {
            Self::request(&self.callback)
        }

        fn request(callback: &FrameCallback) -> Result<(), InitError> {
            let window = web_sys::window().ok_or(InitError::NoWindow)?;
            let slot = callback.borrow();
            let Some(closure) = slot.as_ref() else {
                return Ok(());
            };
            window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .map(|_| ())
                .map_err(|_| InitError::FrameRequestFailed)
        }
    }

    impl Game {
        /// Frame body: step the match and paint the result
        fn frame(&mut self, time: f64) {
            let scene = self.session.frame(time);
            self.painter.paint(&scene);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated by the native demo when no count is given (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u64 = 3600;

/// Scripted key activity for the native demo: `(period, offset, key, pressed)`
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SCRIPT: [(u64, u64, hop_pong::input::Key, bool); 8] = {
    use hop_pong::input::Key;
    [
        (90, 0, Key::W, true),
        (90, 45, Key::ArrowUp, true),
        (240, 0, Key::D, true),
        (240, 120, Key::A, true),
        (240, 60, Key::ArrowLeft, true),
        (240, 180, Key::ArrowRight, true),
        (20, 0, Key::Space, false),
        (20, 10, Key::Enter, false),
    ]
};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hop_pong::renderer::Scene;
    use hop_pong::sim::Arena;
    use hop_pong::{Session, Settings};

    env_logger::init();
    log::info!("Hop Pong (native) starting...");
    log::info!("Native mode runs a headless scripted match - serve the wasm build for play");

    // Usage: hop-pong [FRAMES] [--keep-seed]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let frames = args
        .iter()
        .find_map(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEMO_FRAMES);
    let keep_seed = args.iter().any(|arg| arg == "--keep-seed");

    let mut settings = Settings::load();
    let clock_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut session = Session::new(&settings, Arena::default(), clock_seed);

    // Pin this match's seed so the next run replays it
    if keep_seed && settings.seed != Some(session.seed()) {
        settings.seed = Some(session.seed());
        settings.save();
    }

    for frame in 0..frames {
        for &(period, offset, key, pressed) in &DEMO_SCRIPT {
            if frame % period == offset {
                if pressed {
                    session.key_down(key);
                } else {
                    session.key_up(key);
                }
            }
        }
        session.advance();
    }

    let world = session.world();
    println!(
        "After {} frames: Left Player {} - Right Player {}",
        session.frames(),
        world.score.left,
        world.score.right
    );

    if log::log_enabled!(log::Level::Debug) {
        let scene = Scene::from_world(world, &Default::default(), None);
        match serde_json::to_string(&scene) {
            Ok(json) => log::debug!("Final scene: {}", json),
            Err(e) => log::warn!("Could not encode final scene: {}", e),
        }
    }
}
