//! Skyburst entry point
//!
//! Browser: wires the canvas, input, visibility and timers to the frame loop.
//! Native: runs a headless session against a recording surface.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_sky {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, VisibilityState, Window};

    use glam::Vec2;
    use skyburst::renderer::CanvasSurface;
    use skyburst::sim::{SkyState, frame};
    use skyburst::{Settings, SkyError, SpawnMode};

    /// Element id of the drawing canvas
    const CANVAS_ID: &str = "canvas";

    /// Animation instance: state plus the surface it draws on
    struct Sky {
        state: SkyState,
        surface: CanvasSurface,
    }

    impl Sky {
        fn render_frame(&mut self, time: f64) {
            frame(&mut self.state, time, &mut self.surface);
        }
    }

    fn window() -> Result<Window, SkyError> {
        web_sys::window().ok_or(SkyError::MissingHost("window"))
    }

    fn document() -> Result<Document, SkyError> {
        window()?.document().ok_or(SkyError::MissingHost("document"))
    }

    fn is_visible(document: &Document) -> bool {
        document.visibility_state() != VisibilityState::Hidden
    }

    /// Size the canvas backing store to the window
    fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> (f32, f32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.client_width() as f64);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.client_height() as f64);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        (w as f32, h as f32)
    }

    pub fn run() -> Result<(), SkyError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Skyburst starting...");

        let window = window()?;
        let document = document()?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| SkyError::MissingCanvas(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| SkyError::MissingCanvas(CANVAS_ID.to_string()))?;

        let settings = Settings::load();
        log::info!(
            "Quality {}, {:?} spawning",
            settings.quality.as_str(),
            settings.spawn_mode
        );

        let (width, height) = fit_canvas(&window, &canvas);
        let surface = CanvasSurface::new(&canvas, &settings.rose_sprite)?;

        let seed = js_sys::Date::now() as u64;
        let mut state = SkyState::new(settings, width, height, seed);
        state.set_visible(is_visible(&document));
        log::info!("Animation initialized with seed: {}", seed);

        let sky = Rc::new(RefCell::new(Sky { state, surface }));

        setup_input_handlers(&canvas, sky.clone());
        setup_auto_pause(&document, sky.clone());
        setup_resize(&window, &canvas, sky.clone());
        if sky.borrow().state.settings.spawn_mode == SpawnMode::Timers {
            setup_spawn_timers(&window, sky.clone());
        }

        request_animation_frame(sky);

        log::info!("Skyburst running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, sky: Rc<RefCell<Sky>>) {
        // Click - burst at the pointer
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
            sky.borrow_mut().state.launch_burst(pos);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(document: &Document, sky: Rc<RefCell<Sky>>) {
        // Visibility change (tab switch, minimize)
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let visible = is_visible(&document_clone);
            sky.borrow_mut().state.set_visible(visible);
        });
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }

    fn setup_resize(window: &Window, canvas: &HtmlCanvasElement, sky: Rc<RefCell<Sky>>) {
        let window_clone = window.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = fit_canvas(&window_clone, &canvas_clone);
            sky.borrow_mut().state.resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Fixed-period spawners running beside the frame loop
    fn setup_spawn_timers(window: &Window, sky: Rc<RefCell<Sky>>) {
        let settings = sky.borrow().state.settings.clone();
        let timers: [(bool, f64, fn(&mut SkyState) -> bool); 3] = [
            (settings.fireworks, settings.firework_interval_ms, SkyState::spawn_firework),
            (settings.balloons, settings.balloon_interval_ms, SkyState::spawn_balloon),
            (settings.roses, settings.rose_interval_ms, SkyState::spawn_rose),
        ];

        for (enabled, interval_ms, spawn) in timers {
            if !enabled {
                continue;
            }
            let sky = sky.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                spawn(&mut sky.borrow_mut().state);
            });
            if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms.round() as i32,
            ) {
                log::warn!("Failed to start spawn timer: {:?}", e);
            }
            closure.forget();
        }
    }

    fn request_animation_frame(sky: Rc<RefCell<Sky>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            sky_loop(sky, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn sky_loop(sky: Rc<RefCell<Sky>>, time: f64) {
        sky.borrow_mut().render_frame(time);

        // Keep scheduling while paused so a visible tab resumes immediately
        request_animation_frame(sky);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_sky::run() {
        log::error!("Skyburst failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use skyburst::Settings;
    use skyburst::consts::FRAME_MS;
    use skyburst::renderer::RecordingSurface;
    use skyburst::sim::{SkyState, frame};

    /// Ten seconds at 60 Hz
    const FRAMES: u64 = 600;
    /// Surface hidden for frames in this range
    const HIDDEN: std::ops::Range<u64> = 240..360;

    pub fn run(settings: Settings) {
        let mut state = SkyState::new(settings, 1280.0, 720.0, 0x5eed);
        let mut surface = RecordingSurface::new();
        let mut peak_live = 0;
        let mut draw_calls = 0;

        for i in 0..FRAMES {
            if i == HIDDEN.start {
                state.set_visible(false);
            } else if i == HIDDEN.end {
                state.set_visible(true);
            }
            surface.reset();
            frame(&mut state, i as f64 * FRAME_MS, &mut surface);
            draw_calls += surface.commands.len();
            peak_live = peak_live.max(state.live_count());
        }

        log::info!(
            "Ran {} frames ({} active): peak {} live entities, {} draw calls",
            FRAMES,
            state.frame_count,
            peak_live,
            draw_calls
        );
        println!(
            "frames={} active={} live=[fireworks {}, balloons {}, roses {}] peak={} draws={}",
            FRAMES,
            state.frame_count,
            state.fireworks.len(),
            state.balloons.len(),
            state.roses.len(),
            peak_live,
            draw_calls
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyburst::{QualityPreset, Settings};

    env_logger::init();
    log::info!("Skyburst (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    // Argument: a quality preset name or a settings JSON file
    let arg = std::env::args().nth(1);
    let settings = match arg.as_deref().map(|a| (a, QualityPreset::parse(a))) {
        Some((_, Some(preset))) => Ok(Settings::from_preset(preset)),
        Some((path, None)) => Settings::load_from(Some(std::path::Path::new(path))),
        None => Settings::load_from(None),
    };

    match settings {
        Ok(settings) => headless::run(settings),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("skyburst: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
