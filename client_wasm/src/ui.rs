//! Screen and menu DOM wiring

use game_core::{MatchResult, MatchSettings, Score};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
    GameOver,
}

/// Handles to every element the game touches
pub struct Ui {
    pub menu_screen: Element,
    pub game_screen: Element,
    pub game_over_screen: Element,
    pub single_player_btn: Element,
    pub two_player_btn: Element,
    pub start_game_btn: Element,
    pub play_again_btn: Element,
    pub back_to_menu_btn: Element,
    pub quit_game_btn: Element,
    pub difficulty_group: HtmlElement,
    pub difficulty_buttons: Vec<Element>,
    left_score: Element,
    right_score: Element,
    game_over_text: Element,
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))
}

impl Ui {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let nodes = document.query_selector_all(".difficulty")?;
        let mut difficulty_buttons = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                difficulty_buttons.push(node.dyn_into::<Element>()?);
            }
        }

        Ok(Self {
            menu_screen: element(document, "menuScreen")?,
            game_screen: element(document, "gameScreen")?,
            game_over_screen: element(document, "gameOverScreen")?,
            single_player_btn: element(document, "singlePlayerBtn")?,
            two_player_btn: element(document, "twoPlayerBtn")?,
            start_game_btn: element(document, "startGameBtn")?,
            play_again_btn: element(document, "playAgainBtn")?,
            back_to_menu_btn: element(document, "backToMenuBtn")?,
            quit_game_btn: element(document, "quitGameBtn")?,
            difficulty_group: element(document, "difficultyGroup")?.dyn_into::<HtmlElement>()?,
            difficulty_buttons,
            left_score: element(document, "leftScore")?,
            right_score: element(document, "rightScore")?,
            game_over_text: element(document, "gameOverText")?,
        })
    }

    pub fn show_screen(&self, screen: Screen) -> Result<(), JsValue> {
        for (el, which) in [
            (&self.menu_screen, Screen::Menu),
            (&self.game_screen, Screen::Game),
            (&self.game_over_screen, Screen::GameOver),
        ] {
            if which == screen {
                el.class_list().add_1("active")?;
            } else {
                el.class_list().remove_1("active")?;
            }
        }
        Ok(())
    }

    pub fn update_score(&self, score: Score) {
        self.left_score
            .set_text_content(Some(&score.left.to_string()));
        self.right_score
            .set_text_content(Some(&score.right.to_string()));
    }

    pub fn show_result(&self, result: &MatchResult) -> Result<(), JsValue> {
        self.game_over_text.set_text_content(Some(&result.message));
        self.show_screen(Screen::GameOver)
    }

    /// Mirror the current menu selection in button styles
    pub fn reflect_menu(&self, settings: MatchSettings) -> Result<(), JsValue> {
        let single = settings.shows_difficulty();
        let (on, off) = if single {
            (&self.single_player_btn, &self.two_player_btn)
        } else {
            (&self.two_player_btn, &self.single_player_btn)
        };
        on.class_list().add_1("primary")?;
        off.class_list().remove_1("primary")?;

        self.difficulty_group
            .style()
            .set_property("display", if single { "block" } else { "none" })?;

        let selected = settings.difficulty.as_str();
        for button in &self.difficulty_buttons {
            if button.get_attribute("data-difficulty").as_deref() == Some(selected) {
                button.class_list().add_1("active")?;
            } else {
                button.class_list().remove_1("active")?;
            }
        }
        Ok(())
    }
}
