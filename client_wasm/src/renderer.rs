//! Canvas 2D renderer

use game_core::{Frame, Rect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#050812";
const CENTER_LINE: &str = "#2b3d62";
const PADDLE: &str = "#59d0ff";
const BALL: &str = "#ffffff";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    center_dash: js_sys::Array,
    no_dash: js_sys::Array,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Result<Self, JsValue> {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let center_dash = js_sys::Array::of2(&JsValue::from(14.0), &JsValue::from(14.0));

        Ok(Self {
            ctx,
            center_dash,
            no_dash: js_sys::Array::new(),
        })
    }

    pub fn draw(&self, frame: &Frame) -> Result<(), JsValue> {
        self.draw_background(frame)?;
        self.draw_paddle(&frame.left_paddle);
        self.draw_paddle(&frame.right_paddle);
        self.draw_ball(frame)
    }

    fn draw_background(&self, frame: &Frame) -> Result<(), JsValue> {
        let width = frame.arena_width as f64;
        let height = frame.arena_height as f64;
        let ctx = &self.ctx;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);

        ctx.set_stroke_style_str(CENTER_LINE);
        ctx.set_line_width(4.0);
        ctx.set_line_dash(&self.center_dash)?;
        ctx.begin_path();
        ctx.move_to(width / 2.0, 8.0);
        ctx.line_to(width / 2.0, height - 8.0);
        ctx.stroke();
        ctx.set_line_dash(&self.no_dash)
    }

    fn draw_paddle(&self, paddle: &Rect) {
        self.ctx.set_fill_style_str(PADDLE);
        self.ctx.fill_rect(
            paddle.x as f64,
            paddle.y as f64,
            paddle.width as f64,
            paddle.height as f64,
        );
    }

    fn draw_ball(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BALL);
        ctx.begin_path();
        ctx.arc(
            frame.ball_center.x as f64,
            frame.ball_center.y as f64,
            (frame.ball_size / 2.0) as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();
        Ok(())
    }
}
