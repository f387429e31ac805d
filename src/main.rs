//! Mini Golf entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, Result, anyhow};
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, PointerEvent};

    use mini_golf::Settings;
    use mini_golf::consts::*;
    use mini_golf::platform::Viewport;
    use mini_golf::renderer::{HudText, RenderState, build_scene};
    use mini_golf::sim::{self, GameEvent, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        viewport: Viewport,
        accumulator: f32,
        last_time: f64,
        /// Last HUD written to the DOM, to skip redundant updates
        last_hud: Option<HudText>,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, canvas: HtmlCanvasElement, viewport: Viewport) -> Self {
            let mut state = GameState::new(seed, settings, viewport.logical_size());
            sim::generate_course(&mut state);
            Self {
                state,
                render_state: None,
                canvas,
                viewport,
                accumulator: 0.0,
                last_time: 0.0,
                last_hud: None,
            }
        }

        /// Pointer event to playfield coordinates
        fn event_pos(&self, event: &PointerEvent) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            self.viewport.client_to_surface(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            )
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                sim::tick(&mut self.state);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Drop the backlog rather than spiral
                self.accumulator = 0.0;
            }

            for event in self.state.drain_events() {
                log_event(&event);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(ref mut render_state) = self.render_state else {
                return;
            };
            let vertices = build_scene(&self.state);
            match render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, document: &Document) {
            let hud = HudText::from_state(&self.state);
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }

            for (id, text) in [
                ("hud-hole", &hud.hole),
                ("hud-strokes", &hud.strokes),
                ("hud-total", &hud.total),
            ] {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            }

            if let Some(el) = document.get_element_by_id("hud-complete") {
                match &hud.banner {
                    Some(banner) => {
                        el.set_text_content(Some(banner));
                        let _ = el.set_attribute("class", "");
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            self.last_hud = Some(hud);
        }

        /// Re-read the canvas layout and relay the course for it. Every
        /// window resize counts, even one that leaves the canvas size alone.
        fn handle_resize(&mut self, dpr: f64) {
            let viewport = Viewport::new(
                self.canvas.client_width() as f64,
                self.canvas.client_height() as f64,
                dpr,
            );
            self.viewport = viewport;

            let (width, height) = viewport.backing_size();
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            let logical = viewport.logical_size();
            log::info!(
                "Canvas resized to {}x{} ({}x{} device px)",
                logical.x,
                logical.y,
                width,
                height
            );

            sim::resize(&mut self.state, logical);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height, logical);
            }
        }
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::CourseGenerated {
                hole,
                obstacles,
                requested,
            } => log::debug!("Hole {} laid out: {}/{} obstacles", hole, obstacles, requested),
            GameEvent::StrokeTaken { .. } => {}
            GameEvent::HoleSunk {
                hole,
                strokes,
                total,
            } => log::debug!("Hole {} sunk in {} (total {})", hole, strokes, total),
            GameEvent::RoundCompleted { total } => {
                log::debug!("Round complete with {} strokes", total)
            }
        }
    }

    pub async fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow!("Failed to init logger: {}", e))?;

        log::info!("Mini Golf starting...");

        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("golfCanvas")
            .context("no #golfCanvas element")?
            .dyn_into()
            .map_err(|_| anyhow!("#golfCanvas is not a canvas"))?;

        // Set canvas size
        let viewport = Viewport::new(
            canvas.client_width() as f64,
            canvas.client_height() as f64,
            window.device_pixel_ratio(),
        );
        let (width, height) = viewport.backing_size();
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            settings,
            canvas.clone(),
            viewport,
        )));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to get adapter: {}", e))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, viewport.logical_size()).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, &canvas, game.clone())?;
        setup_resize(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Mini Golf running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down: start aiming and keep receiving events off-canvas
        {
            let game = game.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let _ = target.set_pointer_capture(event.pointer_id());
                let mut g = game.borrow_mut();
                let p = g.event_pos(&event);
                sim::pointer_down(&mut g.state, p);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move: track the drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                if !g.state.aim.is_aiming() {
                    return;
                }
                event.prevent_default();
                let p = g.event_pos(&event);
                sim::pointer_move(&mut g.state, p);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up: putt
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                let p = g.event_pos(&event);
                sim::pointer_up(&mut g.state, p);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer cancel: drop the gesture
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                sim::pointer_cancel(&mut game.borrow_mut().state);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Find a control button, creating it (and its container) when the page lacks it
    fn ensure_button(
        document: &Document,
        canvas: &HtmlCanvasElement,
        id: &str,
        label: &str,
    ) -> Result<web_sys::Element> {
        if let Some(btn) = document.get_element_by_id(id) {
            return Ok(btn);
        }

        let container = match document.get_element_by_id("golf-controls") {
            Some(el) => el,
            None => {
                let el = document
                    .create_element("div")
                    .map_err(|e| anyhow!("create controls: {:?}", e))?;
                el.set_id("golf-controls");
                canvas
                    .parent_node()
                    .context("canvas is not attached to the page")?
                    .insert_before(&el, canvas.next_sibling().as_ref())
                    .map_err(|e| anyhow!("insert controls: {:?}", e))?;
                el
            }
        };

        let btn = document
            .create_element("button")
            .map_err(|e| anyhow!("create button: {:?}", e))?;
        btn.set_id(id);
        btn.set_text_content(Some(label));
        container
            .append_child(&btn)
            .map_err(|e| anyhow!("append button: {:?}", e))?;
        log::debug!("Created missing #{} button", id);
        Ok(btn)
    }

    fn setup_buttons(
        document: &Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<()> {
        {
            let btn = ensure_button(document, canvas, "golf-restart", "Restart Course")?;
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                sim::restart_course(&mut game.borrow_mut().state);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let btn = ensure_button(document, canvas, "golf-new", "New Course")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                sim::new_course(&mut g.state);
                log::info!("New course started");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            game.borrow_mut().handle_resize(dpr);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Mini Golf failed to start: {:#}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Mini Golf (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);
    autoplay::play_round(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless round played by a bot that putts straight at the cup
#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use glam::Vec2;

    use mini_golf::{Settings, Tuning};
    use mini_golf::sim::{self, GameEvent, GamePhase, GameState};

    const FIELD: Vec2 = Vec2::new(800.0, 500.0);
    const GIVE_UP_STROKES: u32 = 15;
    /// Speed the bot wants left over when reaching the cup
    const ARRIVAL_SPEED: f32 = 0.3;
    const MAX_TICKS_PER_STROKE: u32 = 60 * 30;

    /// Drag length whose launch speed is `speed`
    fn drag_for_speed(speed: f32, tuning: &Tuning) -> f32 {
        // speed = len * launch_scale * min(len / power_divisor, max_power)
        let uncapped = (speed * tuning.power_divisor / tuning.launch_scale).sqrt();
        if uncapped / tuning.power_divisor <= tuning.max_power {
            uncapped
        } else {
            speed / (tuning.launch_scale * tuning.max_power)
        }
    }

    fn putt(state: &mut GameState) {
        let tuning = state.settings.tuning;
        let to_cup = state.hole.pos - state.ball.pos;
        let speed = to_cup.length() * (1.0 - tuning.friction) + ARRIVAL_SPEED;
        let drag = to_cup.normalize_or_zero() * drag_for_speed(speed, &tuning);

        let press = state.ball.pos;
        sim::pointer_down(state, press);
        sim::pointer_up(state, press - drag);
    }

    pub fn play_round(seed: u64) {
        let mut state = GameState::new(seed, Settings::default(), FIELD);
        sim::generate_course(&mut state);
        log::info!("Autoplay seed {} on a {}x{} field", seed, FIELD.x, FIELD.y);

        while state.phase != GamePhase::Completed {
            if state.strokes >= GIVE_UP_STROKES {
                log::warn!(
                    "Giving up on hole {} after {} strokes",
                    state.hole_number,
                    state.strokes
                );
                break;
            }

            putt(&mut state);
            let mut ticks = 0;
            while state.phase == GamePhase::Playing && !state.ball.is_stopped() {
                sim::tick(&mut state);
                ticks += 1;
                if ticks >= MAX_TICKS_PER_STROKE {
                    break;
                }
            }
            // Run out the sink delay
            while matches!(state.phase, GamePhase::Sinking { .. }) {
                sim::tick(&mut state);
            }

            for event in state.drain_events() {
                match event {
                    GameEvent::HoleSunk { hole, strokes, .. } => {
                        println!("Hole {}: {} strokes", hole, strokes)
                    }
                    GameEvent::RoundCompleted { total } => println!("Round total: {}", total),
                    _ => {}
                }
            }
        }

        log::info!("Scorecard: {:?}", state.scorecard);
    }
}
