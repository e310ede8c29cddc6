/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 95.0;
    pub const PADDLE_SPEED: f32 = 6.0; // pixels per tick
    pub const PADDLE_MARGIN: f32 = 25.0; // gap between paddle and side wall

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED_START: f32 = 4.6;
    pub const BALL_SPEED_BOOST: f32 = 0.28; // added on every paddle hit
    pub const MAX_BALL_SPEED: f32 = 11.0;
    pub const DEFLECTION: f32 = 1.9; // vy added per unit of hit offset
    pub const MIN_HORIZONTAL_SPEED: f32 = 2.2;
    pub const SERVE_HALF_ANGLE: f32 = std::f32::consts::FRAC_PI_6; // +-30 degrees

    // Score
    pub const WIN_SCORE: u8 = 10;

    // AI (tracking speed, dead zone)
    pub const AI_EASY: (f32, f32) = (2.3, 32.0);
    pub const AI_MEDIUM: (f32, f32) = (3.6, 18.0);
    pub const AI_HARD: (f32, f32) = (5.2, 8.0);
}
