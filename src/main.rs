//! Particle Field entry point
//!
//! The browser build wires the canvas, input listeners and the animation
//! frame loop. The native build runs the simulation headless and prints a
//! JSON report.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use glam::Vec2;
    use particle_field::Settings;
    use particle_field::renderer::CanvasSurface;
    use particle_field::sim::{InputEvent, SimState, Viewport, tick};

    /// Everything the frame loop and listeners share
    struct App {
        state: SimState,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Forward an input event, logging failures instead of aborting the loop
        fn apply(&mut self, event: InputEvent) {
            if let Err(e) = self.state.handle_input(&event) {
                log::error!("Input {:?} failed: {}", event, e);
            }
        }

        /// Match the canvas to the window; returns the new size if it changed
        fn sync_canvas_size(&mut self, window: &Window) -> Option<(u32, u32)> {
            let (width, height) = window_size(window);
            if width == self.canvas.width() && height == self.canvas.height() {
                return None;
            }
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            Some((width, height))
        }

        fn frame(&mut self) {
            if !self.state.is_running() {
                return;
            }
            if let Err(e) = tick(&mut self.state, &mut self.surface) {
                log::error!("Frame failed: {}", e);
            }
        }
    }

    fn window_size(window: &Window) -> (u32, u32) {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width as u32, height as u32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Particle Field starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let viewport = Viewport::new(width, height).expect("window has no area");
        let seed = js_sys::Date::now() as u64;
        let mut state = SimState::new(Settings::default(), viewport, seed).expect("default settings");
        if let Err(e) = state.initialize() {
            log::error!("Initial population failed: {}", e);
        }
        log::info!("Simulation seeded with {}", seed);

        let app = Rc::new(RefCell::new(App {
            state,
            surface: CanvasSurface::new(ctx),
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&window, &canvas, app.clone());

        request_animation_frame(app);

        log::info!("Particle Field running!");
    }

    fn setup_input_handlers(window: &Window, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Resize: refit canvas and repopulate
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let mut a = app.borrow_mut();
                let (width, height) = a.sync_canvas_size(&window).unwrap_or_else(|| window_size(&window));
                a.apply(InputEvent::Resize { width, height });
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Reset key: refit canvas, then repopulate
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let mut a = app.borrow_mut();
                if event.code() != a.state.settings.reset_key {
                    return;
                }
                match a.sync_canvas_size(&window) {
                    Some((width, height)) => a.apply(InputEvent::Resize { width, height }),
                    None => a.apply(InputEvent::Key(event.code())),
                }
            });
            if let Some(document) = window.document() {
                let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Mouse up: move the repelling pointer
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let at = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                app.borrow_mut().apply(InputEvent::PointerSet(at));
            });
            let _ = canvas.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse out: no repulsion
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().apply(InputEvent::PointerCleared);
            });
            let _ = window.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        // Next frame is requested before this one runs
        request_animation_frame(app.clone());
        app.borrow_mut().frame();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use particle_field::renderer::RecordingSurface;
    use particle_field::sim::{FrameStats, SimState, Viewport, tick};
    use particle_field::Settings;

    const DEFAULT_FRAMES: u64 = 600;
    const VIEWPORT: (u32, u32) = (1280, 720);

    #[derive(Serialize)]
    struct RunReport {
        seed: u64,
        viewport: Viewport,
        frames: u64,
        particles: usize,
        totals: FrameStats,
        mean_speed: f32,
    }

    /// `particle-field [settings.json] [frames]`
    pub fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        let settings = match args.first() {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                log::info!("Loaded settings from {}", path);
                Settings::from_json(&json)?
            }
            None => Settings::default(),
        };
        let frames = match args.get(1) {
            Some(n) => n.parse()?,
            None => DEFAULT_FRAMES,
        };

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let viewport = Viewport::new(VIEWPORT.0, VIEWPORT.1)?;
        let mut state = SimState::new(settings, viewport, seed)?;
        state.initialize()?;

        let mut surface = RecordingSurface::default();
        let mut totals = FrameStats::default();
        for _ in 0..frames {
            totals += tick(&mut state, &mut surface)?;
        }

        let report = RunReport {
            seed,
            viewport,
            frames,
            particles: state.particles.len(),
            totals,
            mean_speed: mean_speed(&state),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    fn mean_speed(state: &SimState) -> f32 {
        if state.particles.is_empty() {
            return 0.0;
        }
        let sum: f32 = state.particles.iter().map(|p| p.vel.length()).sum();
        sum / state.particles.len() as f32
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Particle Field (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the canvas version");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = headless::run(&args) {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}
