//! Match session controller
//!
//! Owns every piece of mutable game state plus the single outstanding tick
//! request. Hosts feed it actions and sampled input; it hands back reports
//! for the score UI and frames for the renderer.

use std::fmt;

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, AiControlled, Ball, Config, ConfigError, Events,
    FrameScheduler, Frame, GameMap, GameRng, InputState, MatchAction, MatchFsm, MatchState,
    Paddle, PaddleIntent, Rect, Score, Side, TickSlot, TransitionResult,
};

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Single,
    Two,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Single => "single",
            GameMode::Two => "two",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" | "1" => Some(GameMode::Single),
            "two" | "2" => Some(GameMode::Two),
            _ => None,
        }
    }
}

/// AI difficulty, only used in single-player mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Choices made in the menu and carried into a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl MatchSettings {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self { mode, difficulty }
    }

    /// Difficulty picker is only relevant for single-player
    pub fn shows_difficulty(&self) -> bool {
        self.mode == GameMode::Single
    }
}

/// Display name for a side under a given mode
pub fn side_name(side: Side, mode: GameMode) -> &'static str {
    match (side, mode) {
        (Side::Left, _) => "Player 1",
        (Side::Right, GameMode::Single) => "Computer",
        (Side::Right, GameMode::Two) => "Player 2",
    }
}

/// Final outcome of a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Side,
    pub winner_name: &'static str,
    pub score: Score,
    pub message: String,
}

impl MatchResult {
    pub fn new(winner: Side, score: Score, mode: GameMode) -> Self {
        let winner_name = side_name(winner, mode);
        let message = format!("{} wins {} - {}", winner_name, score.left, score.right);
        Self {
            winner,
            winner_name,
            score,
            message,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What changed during one tick, for the score/UI layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    pub ran: bool,
    pub events: Events,
    pub score: Score,
    pub result: Option<MatchResult>,
}

impl TickReport {
    pub fn score_changed(&self) -> bool {
        self.events.scored()
    }
}

/// One running game: world, score, match state and the tick request
pub struct Session {
    world: World,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    fsm: MatchFsm,
    settings: MatchSettings,
    result: Option<MatchResult>,
    tick_slot: TickSlot,
    ticks: u64,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::new(&config);
        let mut world = World::new();
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(&mut world, map.center(), Vec2::ZERO, config.ball_size);

        Ok(Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
            settings: MatchSettings::default(),
            result: None,
            tick_slot: TickSlot::new(),
            ticks: 0,
            left,
            right,
            ball,
        })
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_scheduled(&self) -> bool {
        self.tick_slot.is_scheduled()
    }

    /// Choose who controls the right paddle. Ignored outside the menu.
    pub fn select_mode(&mut self, mode: GameMode) -> bool {
        if self.fsm.state() != MatchState::Menu {
            log::debug!("Ignoring mode change to {} outside the menu", mode.as_str());
            return false;
        }
        self.settings.mode = mode;
        true
    }

    /// Choose the AI preset. Ignored outside the menu.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.fsm.state() != MatchState::Menu {
            log::debug!(
                "Ignoring difficulty change to {} outside the menu",
                difficulty.as_str()
            );
            return false;
        }
        self.settings.difficulty = difficulty;
        true
    }

    /// Menu -> Playing with the chosen mode and difficulty
    pub fn start(
        &mut self,
        settings: MatchSettings,
        scheduler: &mut dyn FrameScheduler,
    ) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Start);
        if result.success {
            self.settings = settings;
            self.begin_match(scheduler);
        }
        result
    }

    /// GameOver -> Playing, keeping the previous settings
    pub fn play_again(&mut self, scheduler: &mut dyn FrameScheduler) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::PlayAgain);
        if result.success {
            self.begin_match(scheduler);
        }
        result
    }

    /// Playing/GameOver -> Menu. Always halts the tick loop.
    pub fn back_to_menu(&mut self, scheduler: &mut dyn FrameScheduler) -> TransitionResult {
        self.tick_slot.cancel(scheduler);
        let result = self.fsm.transition(MatchAction::BackToMenu);
        if result.success {
            self.score.reset();
            self.result = None;
            log::info!("Returned to menu");
        }
        result
    }

    /// Advance one tick: input, AI, physics, collisions, scoring, win check.
    /// Does nothing outside `Playing`.
    pub fn tick(
        &mut self,
        input: &InputState,
        scheduler: &mut dyn FrameScheduler,
    ) -> TickReport {
        if !self.fsm.is_playing() {
            return TickReport {
                score: self.score,
                ..TickReport::default()
            };
        }

        let ai = match self.settings.mode {
            GameMode::Single => Some(self.config.ai_profile(self.settings.difficulty)),
            GameMode::Two => None,
        };

        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            input,
            ai.as_ref(),
        );
        self.ticks += 1;

        let mut report = TickReport {
            ran: true,
            events: self.events,
            score: self.score,
            result: None,
        };

        match self.score.winner(self.config.win_score) {
            Some(winner) => {
                self.tick_slot.cancel(scheduler);
                self.fsm.transition(MatchAction::Finish);
                let result = MatchResult::new(winner, self.score, self.settings.mode);
                log::info!("Match over after {} ticks: {}", self.ticks, result);
                self.result = Some(result.clone());
                report.result = Some(result);
            }
            None => self.tick_slot.schedule(scheduler),
        }

        report
    }

    /// Snapshot of the court for rendering
    pub fn frame(&self) -> Frame {
        let mut frame = Frame {
            arena_width: self.map.width,
            arena_height: self.map.height,
            left_paddle: self.paddle_rect(self.left),
            right_paddle: self.paddle_rect(self.right),
            ball_center: self.map.center(),
            ball_size: self.config.ball_size,
            score: self.score,
            state: self.fsm.state(),
        };
        if let Ok(ball) = self.world.get::<&Ball>(self.ball) {
            frame.set_ball(&ball);
        }
        frame
    }

    fn paddle_rect(&self, entity: Entity) -> Rect {
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| Rect::from(&*paddle))
            .unwrap_or_default()
    }

    fn begin_match(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.score.reset();
        self.events.clear();
        self.result = None;
        self.ticks = 0;

        let center_y = self.config.center_paddle_y();
        for (_entity, (paddle, intent)) in self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            paddle.y = center_y;
            *intent = PaddleIntent::new();
        }
        self.set_ai_control(self.settings.mode == GameMode::Single);

        let direction = if self.rng.coin_flip() { 1.0 } else { -1.0 };
        let center = self.map.center();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(
                center,
                self.config.ball_speed_start,
                self.config.serve_half_angle,
                direction,
                &mut self.rng,
            );
        }

        log::info!(
            "Match started: mode={} difficulty={}",
            self.settings.mode.as_str(),
            self.settings.difficulty.as_str()
        );
        self.tick_slot.schedule(scheduler);
    }

    fn set_ai_control(&mut self, enabled: bool) {
        let has_ai = self
            .world
            .entity(self.right)
            .map(|e| e.has::<AiControlled>())
            .unwrap_or(false);

        match (enabled, has_ai) {
            (true, false) => {
                if let Err(err) = self.world.insert_one(self.right, AiControlled) {
                    log::warn!("Could not hand right paddle to the AI: {}", err);
                }
            }
            (false, true) => {
                if let Err(err) = self.world.remove_one::<AiControlled>(self.right) {
                    log::warn!("Could not return right paddle to player 2: {}", err);
                }
            }
            _ => {}
        }
    }
}
