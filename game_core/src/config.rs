use serde::{Deserialize, Serialize};

use crate::{ConfigError, Difficulty, Params, Side};

/// AI tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiProfile {
    pub tracking_speed: f32, // pixels per tick
    pub dead_zone: f32,      // no correction while |delta| <= dead_zone
}

impl AiProfile {
    pub const fn new(tracking_speed: f32, dead_zone: f32) -> Self {
        Self {
            tracking_speed,
            dead_zone,
        }
    }
}

/// Which way the ball is served after a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeRule {
    /// Serve heads toward the side that just scored (shipped behaviour)
    #[default]
    TowardScorer,
    /// Serve heads toward the side that just conceded
    TowardConceder,
}

impl ServeRule {
    /// Horizontal sign of the serve after `scorer` won the point
    pub fn direction(self, scorer: Side) -> f32 {
        let toward = match self {
            ServeRule::TowardScorer => scorer,
            ServeRule::TowardConceder => scorer.opponent(),
        };
        toward.sign()
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed_start: f32,
    pub ball_speed_boost: f32,
    pub max_ball_speed: f32,
    pub deflection: f32,
    pub min_horizontal_speed: f32,
    pub serve_half_angle: f32,
    pub serve_rule: ServeRule,
    pub win_score: u8,
    pub ai_easy: AiProfile,
    pub ai_medium: AiProfile,
    pub ai_hard: AiProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed_start: Params::BALL_SPEED_START,
            ball_speed_boost: Params::BALL_SPEED_BOOST,
            max_ball_speed: Params::MAX_BALL_SPEED,
            deflection: Params::DEFLECTION,
            min_horizontal_speed: Params::MIN_HORIZONTAL_SPEED,
            serve_half_angle: Params::SERVE_HALF_ANGLE,
            serve_rule: ServeRule::default(),
            win_score: Params::WIN_SCORE,
            ai_easy: AiProfile::new(Params::AI_EASY.0, Params::AI_EASY.1),
            ai_medium: AiProfile::new(Params::AI_MEDIUM.0, Params::AI_MEDIUM.1),
            ai_hard: AiProfile::new(Params::AI_HARD.0, Params::AI_HARD.1),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry that would make the clamp or speed invariants unsatisfiable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::invalid("arena", "dimensions must be positive"));
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(ConfigError::invalid("paddle", "dimensions must be positive"));
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::invalid(
                "paddle_height",
                "paddle must fit inside the arena",
            ));
        }
        if self.paddle_margin < 0.0
            || 2.0 * (self.paddle_margin + self.paddle_width) >= self.arena_width
        {
            return Err(ConfigError::invalid(
                "paddle_margin",
                "paddles must not overlap or leave the arena",
            ));
        }
        if self.paddle_speed <= 0.0 {
            return Err(ConfigError::invalid("paddle_speed", "must be positive"));
        }
        if self.ball_size <= 0.0 || self.ball_size >= self.arena_height {
            return Err(ConfigError::invalid(
                "ball_size",
                "must be positive and smaller than the arena",
            ));
        }
        if self.ball_speed_start <= 0.0 || self.ball_speed_boost < 0.0 {
            return Err(ConfigError::invalid(
                "ball_speed_start",
                "start speed must be positive and boost non-negative",
            ));
        }
        if self.max_ball_speed < self.ball_speed_start {
            return Err(ConfigError::invalid(
                "max_ball_speed",
                "must be at least the start speed",
            ));
        }
        if self.min_horizontal_speed < 0.0 || self.min_horizontal_speed > self.max_ball_speed {
            return Err(ConfigError::invalid(
                "min_horizontal_speed",
                "must lie between zero and the max speed",
            ));
        }
        if !(0.0..std::f32::consts::FRAC_PI_2).contains(&self.serve_half_angle) {
            return Err(ConfigError::invalid(
                "serve_half_angle",
                "must be in [0, pi/2)",
            ));
        }
        if self.win_score == 0 {
            return Err(ConfigError::invalid("win_score", "must be at least 1"));
        }
        for profile in [self.ai_easy, self.ai_medium, self.ai_hard] {
            if profile.tracking_speed < 0.0 || profile.dead_zone < 0.0 {
                return Err(ConfigError::invalid(
                    "ai",
                    "tracking speed and dead zone must be non-negative",
                ));
            }
        }
        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, (self.arena_height - self.paddle_height).max(0.0))
    }

    /// Top edge that vertically centers a paddle
    pub fn center_paddle_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn ai_profile(&self, difficulty: Difficulty) -> AiProfile {
        match difficulty {
            Difficulty::Easy => self.ai_easy,
            Difficulty::Medium => self.ai_medium,
            Difficulty::Hard => self.ai_hard,
        }
    }
}
