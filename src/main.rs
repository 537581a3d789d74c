//! Wortschlange entry point
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
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, PointerEvent, Window};

    use wortschlange::Hud;
    use wortschlange::Tuning;
    use wortschlange::platform::{Command, command_for_key, direction_for_tap, parse_direction, to_world};
    use wortschlange::renderer::{CanvasRenderer, scene};
    use wortschlange::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        /// Commands gathered since the last frame
        input: TickInput,
        /// Last HUD pushed to the DOM
        hud: Option<Hud>,
        document: Document,
    }

    impl Game {
        fn update(&mut self, now: f64) {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input, now);
            for event in &self.state.events {
                match event {
                    GameEvent::FruitEaten { .. } | GameEvent::SequenceAdvanced { .. } => {
                        log::debug!("{:?}", event)
                    }
                    _ => log::info!("{:?}", event),
                }
            }
        }

        fn render(&mut self, window: &Window, now: f64) {
            self.renderer.resize(window.device_pixel_ratio());
            let cmds = scene::build(&self.state, now);
            if let Err(e) = self.renderer.render(&cmds) {
                log::warn!("Render error: {:?}", e);
            }
        }

        fn update_hud(&mut self, now: f64) {
            let hud = Hud::from_state(&self.state);
            if self.hud.as_ref() != Some(&hud) {
                self.set_text("levelValue", &hud.level);
                self.set_text("livesValue", &hud.lives);
                self.set_text("seqValue", &hud.sequence);
                self.set_text("speedValue", &hud.speed);
                self.set_text("pauseBtn", hud.pause_button);
                self.hud = Some(hud);
            }
            let status = self.state.visible_status(now).unwrap_or("").to_string();
            self.set_text("statusMessage", &status);
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                if el.text_content().as_deref() != Some(text) {
                    el.set_text_content(Some(text));
                }
            }
        }
    }

    /// Optional overrides from `<script id="tuning" type="application/json">`
    fn load_tuning(document: &Document) -> Tuning {
        let Some(text) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&text) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning JSON: {}", e);
                Tuning::default()
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Wortschlange starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let mut renderer = CanvasRenderer::new(canvas.clone())?;
        renderer.resize(window.device_pixel_ratio());

        let tuning = load_tuning(&document);
        let seed = js_sys::Date::now() as u64;
        let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
        let state = GameState::with_tuning(seed, tuning, now);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            input: TickInput::default(),
            hud: None,
            document: document.clone(),
        }));

        setup_keyboard(&window, game.clone())?;
        setup_canvas_taps(&canvas, game.clone())?;
        setup_buttons(&document, game.clone())?;

        request_animation_frame(&window, game);

        log::info!("Wortschlange running!");
        Ok(())
    }

    fn setup_keyboard(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(command) = command_for_key(&event.key()) else {
                return;
            };
            event.prevent_default();
            command.apply(&mut game.borrow_mut().input);
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_canvas_taps(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            let rect = target.get_bounding_client_rect();
            let world = to_world(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            if let Some(direction) = direction_for_tap(world) {
                Command::Turn(direction).apply(&mut game.borrow_mut().input);
            }
        });
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn on_click(
        target: &web_sys::EventTarget,
        game: Rc<RefCell<Game>>,
        command: Command,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            command.apply(&mut game.borrow_mut().input);
        });
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let buttons = [
            ("speedUp", Command::Speed(1)),
            ("speedDown", Command::Speed(-1)),
            ("pauseBtn", Command::TogglePause),
            ("resetSeqBtn", Command::ResetSequence),
        ];
        for (id, command) in buttons {
            match document.get_element_by_id(id) {
                Some(btn) => on_click(&btn, game.clone(), command)?,
                None => log::warn!("Missing button #{}", id),
            }
        }

        let arrows = document.query_selector_all("[data-dir]")?;
        for i in 0..arrows.length() {
            let Some(node) = arrows.item(i) else { continue };
            let Ok(el) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let name = el.get_attribute("data-dir").unwrap_or_default();
            match parse_direction(&name) {
                Some(direction) => on_click(&el, game.clone(), Command::Turn(direction))?,
                None => log::warn!("Unknown data-dir {:?}", name),
            }
        }
        Ok(())
    }

    fn request_animation_frame(window: &Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render(&window, time);
            g.update_hud(time);
        }

        request_animation_frame(&window, game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Headless demo: the autopilot plays for a while and the log shows what
/// happened. `wortschlange [seed] [seconds]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use wortschlange::Hud;
    use wortschlange::sim::{GameState, TickInput, tick};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let seconds: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120.0);

    log::info!("Wortschlange (native) starting with seed {}", seed);

    let mut state = GameState::new(seed, 0.0);
    let idle = TickInput {
        toggle_idle: true,
        ..Default::default()
    };
    tick(&mut state, &idle, 0.0);

    let frame_ms = 1000.0 / 60.0;
    let mut now = 0.0;
    while now < seconds * 1000.0 && !state.is_ended() {
        now += frame_ms;
        tick(&mut state, &TickInput::default(), now);
        for event in &state.events {
            log::debug!("{:>8.0} ms {:?}", now, event);
        }
    }

    let hud = Hud::from_state(&state);
    println!(
        "{} | {} | {} | speed {} | {:?}",
        hud.level, hud.lives, hud.sequence, hud.speed, state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
