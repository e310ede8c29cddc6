//! Read-only snapshot handed to renderers after each tick

use glam::Vec2;

use crate::{Ball, MatchState, Paddle, Score};

/// Axis-aligned rectangle in arena pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Paddle> for Rect {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub arena_width: f32,
    pub arena_height: f32,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball_center: Vec2,
    pub ball_size: f32,
    pub score: Score,
    pub state: MatchState,
}

impl Frame {
    pub(crate) fn set_ball(&mut self, ball: &Ball) {
        self.ball_center = ball.pos;
        self.ball_size = ball.size;
    }
}
