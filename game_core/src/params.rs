/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: i32 = 800;
    pub const BOARD_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 70;
    pub const PADDLE_SPEED: i32 = 5; // units per tick

    // Ball
    pub const BALL_SIZE: i32 = 15;
    pub const BALL_SPEED_X: i32 = 4; // units per tick
    pub const BALL_SPEED_Y: i32 = 4;

    // Score text
    pub const SCORE_Y: i32 = 50; // baseline
    pub const SCORE_TEXT_SIZE: u32 = 36;

    // Loop
    pub const UPDATES_PER_SECOND: f64 = 60.0;
    pub const FRAMES_PER_SECOND: f64 = 120.0;
    pub const IDLE_SLEEP_MS: u64 = 2; // keeps the loop off 100% CPU
}
