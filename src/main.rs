//! Wave Backdrop entry point
//!
//! On the web: creates a fixed full-window canvas behind the page and runs
//! the sequence from the animation-frame loop. Natively: runs the whole
//! sequence headlessly and reports what it drew.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_backdrop {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use wave_backdrop::consts::*;
    use wave_backdrop::renderer::Canvas2dSurface;
    use wave_backdrop::{AnimationController, FrameClock, Surface};

    /// Everything the frame loop and resize listener share
    struct Backdrop {
        controller: AnimationController,
        surface: Canvas2dSurface,
        clock: FrameClock,
    }

    impl Backdrop {
        fn frame(&mut self, time: f64) {
            for _ in 0..self.clock.advance(time) {
                self.controller.draw(&mut self.surface);
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.controller.resize(&mut self.surface, width, height);
            self.clock.reset();
            log::info!("Backdrop resized to {}x{}", width, height);
        }
    }

    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
        }

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("left", "0")?;
        style.set_property("top", "0")?;
        style.set_property("z-index", "-256")?;
        body.append_child(&canvas)?;

        let (width, height) = window_size(&window);
        let mut surface = Canvas2dSurface::new(canvas)?;
        surface.resize(width, height);
        surface.clear(CIRCLE_COLOR);

        let seed = js_sys::Date::now() as u64;
        let backdrop = Rc::new(RefCell::new(Backdrop {
            controller: AnimationController::new(width, height, seed),
            surface,
            clock: FrameClock::new(FRAME_RATE),
        }));
        log::info!("Backdrop {}x{} started with seed {}", width, height, seed);

        setup_resize_handler(&window, backdrop.clone())?;
        request_animation_frame(backdrop);
        Ok(())
    }

    fn setup_resize_handler(
        window: &web_sys::Window,
        backdrop: Rc<RefCell<Backdrop>>,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            backdrop.borrow_mut().resize(width, height);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(backdrop: Rc<RefCell<Backdrop>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            backdrop.borrow_mut().frame(time);
            request_animation_frame(backdrop);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_backdrop::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width = parse_arg(args.next(), "width", 800u32);
    let height = parse_arg(args.next(), "height", 600u32);
    let seed = parse_arg(args.next(), "seed", 42u64);

    log::info!("Wave Backdrop (native) preview {}x{} seed {}", width, height, seed);
    preview(width, height, seed);
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr + std::fmt::Display>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} {:?}, using {}", name, raw, default);
            default
        }),
    }
}

/// Run the sequence against a recording surface and report each phase
#[cfg(not(target_arch = "wasm32"))]
fn preview(width: u32, height: u32, seed: u64) {
    use wave_backdrop::consts::CIRCLE_COLOR;
    use wave_backdrop::surface::RecordingSurface;
    use wave_backdrop::{AnimationController, Surface};

    let mut surface = RecordingSurface::new(width, height);
    surface.clear(CIRCLE_COLOR);
    let mut controller = AnimationController::new(width, height, seed);

    while !controller.is_finished() {
        let state = controller.state();
        let mut frames = 0;
        while controller.state() == state {
            controller.draw(&mut surface);
            frames += 1;
        }
        let commands = surface.drain();
        log::info!(
            "{:>16}: {:>4} frames, {:>6} draw calls",
            state.as_str(),
            frames,
            commands.len()
        );
    }

    match serde_json::to_string_pretty(controller.scene()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize scene: {}", e),
    }
}
