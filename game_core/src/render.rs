//! Frame layout on top of host-provided drawing primitives

use crate::{Config, Score};

/// Integer axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BACKGROUND_COLOR: Color = Color::rgb(10, 60, 40);
pub const PADDLE_COLOR: Color = Color::rgb(200, 200, 200);
pub const BALL_COLOR: Color = Color::rgb(200, 200, 200);

/// Read-only view of everything a frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub score: Score,
}

impl Frame {
    pub fn score_text(&self) -> String {
        format!("{} : {}", self.score.left, self.score.right)
    }
}

/// Drawing surface supplied by the host, in board units
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Fill the oval inscribed in `bounds`
    fn fill_oval(&mut self, bounds: Rect, color: Color);
    /// Width of `text` at `size`
    fn text_width(&self, text: &str, size: u32) -> i32;
    /// Draw `text` with its left end at `x` and its baseline at `y`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: u32, color: Color);
}

/// Draw one frame: background, paddles, ball, then the score centred on top
pub fn draw_frame<C: Canvas>(frame: &Frame, config: &Config, canvas: &mut C) {
    canvas.fill_rect(
        Rect::new(0, 0, config.board_width, config.board_height),
        BACKGROUND_COLOR,
    );

    canvas.fill_rect(frame.left_paddle, PADDLE_COLOR);
    canvas.fill_rect(frame.right_paddle, PADDLE_COLOR);

    canvas.fill_oval(frame.ball, BALL_COLOR);

    let text = frame.score_text();
    let width = canvas.text_width(&text, config.score_text_size);
    canvas.draw_text(
        &text,
        config.board_width / 2 - width / 2,
        config.score_y,
        config.score_text_size,
        BALL_COLOR,
    );
}
