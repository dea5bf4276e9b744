//! Kite Cut entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlCanvasElement,
        HtmlElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use kite_cut::share::{SharePayload, result_lines};
    use kite_cut::sim::autopilot::{self, LOW_STAMINA_PERCENT};
    use kite_cut::sim::{GameState, Outcome};
    use kite_cut::{GameLoop, InputTracker, Settings, Tuning};

    // Share sheet with clipboard fallback; rejects if both are unavailable or cancelled
    #[wasm_bindgen(inline_js = "
        export async function share_or_copy(title, text, url, fallback) {
            if (navigator.share) {
                await navigator.share({ title, text, url });
                return 'shared';
            }
            await navigator.clipboard.writeText(fallback);
            return 'copied';
        }
    ")]
    extern "C" {
        #[wasm_bindgen(catch)]
        async fn share_or_copy(
            title: &str,
            text: &str,
            url: &str,
            fallback: &str,
        ) -> Result<JsValue, JsValue>;
    }

    /// Game instance holding all state
    struct Game {
        driver: GameLoop,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
        input: Rc<InputTracker>,
        /// Autopilot plays instead of the pointer
        demo: bool,
        /// Pending animation frame request
        raf_id: Option<i32>,
        /// Bumped on every start so stale result timers can be ignored
        run: u32,
    }

    impl Game {
        /// Convert client coordinates to canvas-local ones
        fn to_canvas(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
            let rect = canvas.get_bounding_client_rect();
            (
                (client_x as f64 - rect.left()) as f32,
                (client_y as f64 - rect.top()) as f32,
            )
        }

        /// Match the canvas to the window and redraw whatever is on it
        fn fit_to_window(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            self.driver.resize(width as f32, height as f32);
            self.driver.redraw(&mut self.ctx);
        }

        /// Run one display frame; returns the outcome on the frame the run ends
        fn update(&mut self) -> Option<Outcome> {
            let input = if self.demo {
                autopilot::steer(self.driver.state())
            } else {
                self.input.snapshot()
            };
            let report = self.driver.frame(&input, &mut self.ctx);

            if report.wants_shake() && self.driver.settings().effective_screen_shake() {
                shake();
            }
            update_hud(self.driver.state());
            report.ended
        }
    }

    fn document() -> Result<Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if visible {
                classes.remove_1("hidden")
            } else {
                classes.add_1("hidden")
            };
        }
    }

    /// Restart the CSS shake animation on the play area
    fn shake() {
        let Ok(document) = document() else {
            return;
        };
        if let Some(el) = document.get_element_by_id("game") {
            let classes = el.class_list();
            let _ = classes.remove_1("shake");
            // Reading layout forces a reflow so re-adding the class restarts the animation
            if let Ok(html) = el.clone().dyn_into::<HtmlElement>() {
                let _ = html.offset_width();
            }
            let _ = classes.add_1("shake");
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(state: &GameState) {
        let Ok(document) = document() else {
            return;
        };

        if let Some(el) = document.get_element_by_id("hud-cuts") {
            el.set_text_content(Some(&state.cuts.to_string()));
        }

        if let Some(el) = document.get_element_by_id("stamina-fill") {
            if let Ok(bar) = el.dyn_into::<HtmlElement>() {
                let percent = state.hero.stamina_fraction(state.tuning.max_stamina) * 100.0;
                let color = if percent < LOW_STAMINA_PERCENT {
                    "red"
                } else {
                    "#00C853"
                };
                let style = bar.style();
                let _ = style.set_property("width", &format!("{:.1}%", percent));
                let _ = style.set_property("background", color);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Kite Cut starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = document()?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let tuning = Tuning::from_json_or_default(canvas.get_attribute("data-tuning").as_deref());
        let settings = Settings::from_query(&window.location().search().unwrap_or_default());
        log::info!("Settings: {:?}", settings);

        let game = Rc::new(RefCell::new(Game {
            driver: GameLoop::new(tuning, settings, Vec2::new(800.0, 600.0)),
            ctx,
            canvas: canvas.clone(),
            input: Rc::new(InputTracker::new()),
            demo: false,
            raf_id: None,
            run: 0,
        }));
        game.borrow_mut().fit_to_window();

        setup_resize(game.clone())?;
        setup_input_handlers(&canvas, game.clone())?;
        setup_boost_button(game.clone());
        setup_buttons(game.clone());

        set_visible(&document, "loading", false);
        set_visible(&document, "menu", true);

        log::info!("Kite Cut ready!");
        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().fit_to_window();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let input = game.borrow().input.clone();

        // Mouse move
        {
            let input = input.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = Game::to_canvas(&canvas, event.client_x(), event.client_y());
                input.on_pointer_move(x, y);
            });
            window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse press/release (desktop click-to-boost)
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                input.on_press();
            });
            window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                input.on_release();
            });
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move - not passive so the page doesn't scroll while playing
        {
            let input = input.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = Game::to_canvas(&canvas, touch.client_x(), touch.client_y());
                    input.on_pointer_move(x, y);
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let "i" | "I" = event.key().as_str() {
                    let mut g = game.borrow_mut();
                    g.demo = !g.demo;
                    log::info!("Demo mode: {}", g.demo);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// On-screen boost control for touch devices
    fn setup_boost_button(game: Rc<RefCell<Game>>) {
        let Ok(document) = document() else {
            return;
        };
        let Some(btn) = document.get_element_by_id("boost-btn") else {
            log::warn!("No #boost-btn; touch players can't boost");
            return;
        };
        let input = game.borrow().input.clone();

        for kind in ["mousedown", "touchstart"] {
            let input = input.clone();
            let el = btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                input.on_press();
                let _ = el.class_list().add_1("active");
            });
            let _ = btn.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for kind in ["mouseup", "touchend"] {
            let input = input.clone();
            let el = btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                input.on_release();
                let _ = el.class_list().remove_1("active");
            });
            let _ = btn.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Ok(document) = document() else {
            return;
        };

        // Start / fly again
        for id in ["start-btn", "again-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    start_run(game.clone());
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Share
        if let Some(btn) = document.get_element_by_id("share-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let (cuts, outcome) = {
                    let g = game.borrow();
                    (g.driver.state().cuts, g.driver.state().outcome)
                };
                let url = web_sys::window()
                    .and_then(|w| w.location().href().ok())
                    .unwrap_or_default();
                let payload = SharePayload::new(cuts, outcome, &url);
                wasm_bindgen_futures::spawn_local(share(payload));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    async fn share(payload: SharePayload) {
        let result = share_or_copy(
            &payload.title,
            &payload.text,
            &payload.url,
            &payload.clipboard_text(),
        )
        .await;
        match result {
            Ok(how) if how.as_string().as_deref() == Some("copied") => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Copied to clipboard! ☀️");
                }
            }
            Ok(_) => log::info!("Result shared"),
            Err(e) => log::warn!("Share failed: {:?}", e),
        }
    }

    fn start_run(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if let (Some(id), Some(window)) = (g.raf_id.take(), web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
            let seed = js_sys::Date::now() as u64;
            g.input.clear_boost();
            g.driver.start(seed);
            g.run = g.run.wrapping_add(1);
        }

        if let Ok(document) = document() {
            set_visible(&document, "menu", false);
            set_visible(&document, "result", false);
            set_visible(&document, "hud", true);
            set_visible(&document, "boost-btn", true);
        }

        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once_into_js({
            let game = game.clone();
            move |_time: f64| {
                game_loop(game);
            }
        });
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(id) => game.borrow_mut().raf_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let (ended, run, delay) = {
            let mut g = game.borrow_mut();
            g.raf_id = None;
            // Stale frame after the run stopped
            if !g.driver.is_running() {
                return;
            }
            let ended = g.update();
            (ended, g.run, g.driver.settings().result_delay_ms)
        };

        match ended {
            Some(outcome) => show_result_later(game, run, outcome, delay),
            None => request_animation_frame(game),
        }
    }

    /// Switch to the result view after the post-game delay
    fn show_result_later(game: Rc<RefCell<Game>>, run: u32, outcome: Outcome, delay_ms: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let g = game.borrow();
            if g.run != run {
                return;
            }
            let Ok(document) = document() else {
                return;
            };
            let (title, body) = result_lines(g.driver.state().cuts, Some(outcome));
            if let Some(el) = document.get_element_by_id("result-title") {
                el.set_text_content(Some(title));
            }
            if let Some(el) = document.get_element_by_id("result-text") {
                el.set_text_content(Some(&body));
            }
            set_visible(&document, "hud", false);
            set_visible(&document, "boost-btn", false);
            set_visible(&document, "result", true);
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        ) {
            log::error!("setTimeout failed: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Kite Cut failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kite Cut (native) starting...");
    log::info!("Native mode runs headless autopilot games - run with `trunk serve` to play");

    let runs: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);
    autopilot_runs(runs);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play `runs` headless games with the autopilot and report the results
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_runs(runs: u64) {
    use glam::Vec2;
    use kite_cut::Tuning;
    use kite_cut::sim::{GameState, Outcome, autopilot, tick};

    // Safety net: a run that never resolves is reported as unfinished
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    let mut wins = 0;
    for seed in 0..runs {
        let mut state = GameState::new(seed, Vec2::new(1280.0, 720.0), Tuning::default());
        while !state.is_over() && state.frame < MAX_FRAMES {
            let input = autopilot::steer(&state);
            tick(&mut state, &input);
        }
        match state.outcome {
            Some(Outcome::Win) => wins += 1,
            Some(Outcome::Loss) => {}
            None => log::warn!("Seed {} unfinished after {} frames", seed, state.frame),
        }
        println!(
            "seed {:>3}: {:<10} cuts={} frames={}",
            seed,
            state.outcome.map(|o| o.as_str()).unwrap_or("unfinished"),
            state.cuts,
            state.frame
        );
    }
    println!("\n{}/{} runs won", wins, runs);
}
