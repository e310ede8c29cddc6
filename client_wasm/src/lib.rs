//! Browser host for the Pong game
//!
//! Wires keyboard input, menu buttons, a canvas 2D renderer and
//! requestAnimationFrame scheduling to a `game_core::Session`.
//! DOM code only builds for wasm32; key mapping is portable.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod renderer;
#[cfg(target_arch = "wasm32")]
mod scheduler;
#[cfg(target_arch = "wasm32")]
mod ui;

#[cfg(target_arch = "wasm32")]
pub use wasm_app::init_client;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{Config, Difficulty, GameMode, InputState, MatchState, Session};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use crate::input::{get_key_from_event, handle_key_down, handle_key_up, is_back_key};
    use crate::renderer::CanvasRenderer;
    use crate::scheduler::AnimationFrameScheduler;
    use crate::ui::{Screen, Ui};

    thread_local! {
        static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
    }

    /// Main client state
    struct App {
        session: Session,
        scheduler: AnimationFrameScheduler,
        keys: InputState,
        renderer: CanvasRenderer,
        ui: Ui,
    }

    impl App {
        fn on_frame(&mut self) -> Result<(), JsValue> {
            let report = self.session.tick(&self.keys, &mut self.scheduler);
            if !report.ran {
                return Ok(());
            }

            self.renderer.draw(&self.session.frame())?;
            if report.score_changed() {
                self.ui.update_score(report.score);
            }
            if let Some(result) = report.result {
                self.ui.show_result(&result)?;
            }
            Ok(())
        }

        fn start(&mut self) -> Result<(), JsValue> {
            let settings = self.session.settings();
            if self.session.start(settings, &mut self.scheduler).success {
                self.enter_game()?;
            }
            Ok(())
        }

        fn play_again(&mut self) -> Result<(), JsValue> {
            if self.session.play_again(&mut self.scheduler).success {
                self.enter_game()?;
            }
            Ok(())
        }

        fn back_to_menu(&mut self) -> Result<(), JsValue> {
            self.session.back_to_menu(&mut self.scheduler);
            self.keys = InputState::new();
            self.ui.update_score(self.session.score());
            self.ui.show_screen(Screen::Menu)
        }

        fn enter_game(&mut self) -> Result<(), JsValue> {
            self.ui.update_score(self.session.score());
            self.ui.show_screen(Screen::Game)?;
            self.renderer.draw(&self.session.frame())
        }

        fn choose_mode(&mut self, mode: GameMode) -> Result<(), JsValue> {
            if self.session.select_mode(mode) {
                self.ui.reflect_menu(self.session.settings())?;
            }
            Ok(())
        }

        fn choose_difficulty(&mut self, value: &str) -> Result<(), JsValue> {
            let Some(difficulty) = Difficulty::parse(value) else {
                log::warn!("Unknown difficulty {:?}", value);
                return Ok(());
            };
            if self.session.select_difficulty(difficulty) {
                self.ui.reflect_menu(self.session.settings())?;
            }
            Ok(())
        }
    }

    fn report(result: Result<(), JsValue>) {
        if let Err(err) = result {
            log::error!("{:?}", err);
        }
    }

    fn on_click(
        target: &Element,
        app: &Rc<RefCell<App>>,
        action: impl Fn(&mut App) -> Result<(), JsValue> + 'static,
    ) -> Result<(), JsValue> {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            report(action(&mut app.borrow_mut()));
        });
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = get_key_from_event(&event);
                let mut app = app.borrow_mut();
                if pressed && is_back_key(&key) && app.session.state() == MatchState::Playing {
                    report(app.back_to_menu());
                    return;
                }
                let handled = if pressed {
                    handle_key_down(&mut app.keys, &key)
                } else {
                    handle_key_up(&mut app.keys, &key)
                };
                // Keep arrow keys from scrolling the page mid-match
                if handled && app.session.state() == MatchState::Playing {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_menu(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
        let (single, two, start, again, back, quit, difficulty_buttons) = {
            let a = app.borrow();
            (
                a.ui.single_player_btn.clone(),
                a.ui.two_player_btn.clone(),
                a.ui.start_game_btn.clone(),
                a.ui.play_again_btn.clone(),
                a.ui.back_to_menu_btn.clone(),
                a.ui.quit_game_btn.clone(),
                a.ui.difficulty_buttons.clone(),
            )
        };

        on_click(&single, app, |a| a.choose_mode(GameMode::Single))?;
        on_click(&two, app, |a| a.choose_mode(GameMode::Two))?;
        on_click(&start, app, App::start)?;
        on_click(&again, app, App::play_again)?;
        on_click(&back, app, App::back_to_menu)?;
        on_click(&quit, app, App::back_to_menu)?;

        for button in difficulty_buttons {
            let value = button.get_attribute("data-difficulty").unwrap_or_default();
            on_click(&button, app, move |a| a.choose_difficulty(&value))?;
        }
        Ok(())
    }

    /// Initialize the game on `canvas`. `config_json` optionally overrides
    /// tuning values (partial JSON, unspecified fields keep their defaults).
    #[wasm_bindgen]
    pub fn init_client(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A logger may already be installed by the embedding page
        let _ = console_log::init_with_level(log::Level::Info);

        if APP.with(|slot| slot.borrow().is_some()) {
            return Err(JsValue::from_str("Client already initialized"));
        }

        let config = match config_json {
            Some(json) => Config::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?,
            None => Config::new(),
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let seed = js_sys::Date::now() as u64;
        let renderer = CanvasRenderer::new(&canvas, config.arena_width, config.arena_height)?;
        let session =
            Session::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let ui = Ui::from_document(&document)?;

        let app = Rc::new(RefCell::new(App {
            session,
            scheduler: AnimationFrameScheduler::new(window.clone()),
            keys: InputState::new(),
            renderer,
            ui,
        }));

        // Frame callback holds a weak ref so the loop dies with the app
        let weak = Rc::downgrade(&app);
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(app) = weak.upgrade() {
                report(app.borrow_mut().on_frame());
            }
        });
        app.borrow_mut().scheduler.set_callback(on_frame);

        setup_keyboard(&window, &app)?;
        setup_menu(&app)?;

        {
            let a = app.borrow();
            a.ui.reflect_menu(a.session.settings())?;
            a.ui.update_score(a.session.score());
            a.ui.show_screen(Screen::Menu)?;
        }

        APP.with(|slot| *slot.borrow_mut() = Some(app));
        log::info!("Pong client initialized with seed {}", seed);
        Ok(())
    }
}
