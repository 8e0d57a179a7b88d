use glam::IVec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board_width: i32,
    pub board_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_speed_x: i32,
    pub ball_speed_y: i32,
    pub score_y: i32,
    pub score_text_size: u32,
    pub updates_per_second: f64,
    pub frames_per_second: f64,
    pub idle_sleep_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            score_y: Params::SCORE_Y,
            score_text_size: Params::SCORE_TEXT_SIZE,
            updates_per_second: Params::UPDATES_PER_SECOND,
            frames_per_second: Params::FRAMES_PER_SECOND,
            idle_sleep_ms: Params::IDLE_SLEEP_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => 0,
            Side::Right => self.board_width - self.paddle_width,
        }
    }

    /// Paddle top edge at the start of a match (vertically centred)
    pub fn paddle_start_y(&self) -> i32 {
        self.board_height / 2 - self.paddle_height / 2
    }

    /// Clamp paddle Y (top edge) to board bounds
    pub fn clamp_paddle_y(&self, y: i32) -> i32 {
        y.clamp(0, self.board_height - self.paddle_height)
    }

    /// Top-left corner the ball starts from and returns to after a point.
    /// The ball's centre sits on the board centre, rounding toward the top-left.
    pub fn ball_start(&self) -> IVec2 {
        IVec2::new(
            (self.board_width - self.ball_size) / 2,
            (self.board_height - self.ball_size) / 2,
        )
    }

    pub fn ball_start_velocity(&self) -> IVec2 {
        IVec2::new(self.ball_speed_x, self.ball_speed_y)
    }
}
