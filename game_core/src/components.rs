use glam::Vec2;
use rand::Rng;

use crate::GameRng;

/// Court side. Left is always Player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign pointing toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component. `x`/`y` are the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // clamped to [0, arena_height - height]
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball component - the pong ball. `pos` is the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    /// Re-center the ball and launch it at `speed` within +-`half_angle` of horizontal.
    /// `direction` is the horizontal sign of the serve.
    pub fn serve(
        &mut self,
        center: Vec2,
        speed: f32,
        half_angle: f32,
        direction: f32,
        rng: &mut GameRng,
    ) {
        let angle: f32 = rng.0.gen_range(-half_angle..=half_angle);
        self.pos = center;
        self.vel = Vec2::new(angle.cos() * speed * direction, angle.sin() * speed);
    }
}

/// Movement intent for paddle: displacement this tick is `dir * speed`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub dir: i8,    // -1 = up, 0 = stop, 1 = down
    pub speed: f32, // paddle speed for humans, tracking speed for the AI
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker for a paddle steered by the AI controller instead of the keyboard
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;
