use glam::IVec2;

/// Which end of the board a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: IVec2, // top-left corner; x is fixed per side
}

impl Paddle {
    pub fn new(side: Side, pos: IVec2) -> Self {
        Self { side, pos }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: IVec2, // top-left corner of the ball's square
    pub vel: IVec2,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back on its start position after a point.
    /// Velocity is left to the caller.
    pub fn reset(&mut self, start: IVec2) {
        self.pos = start;
    }
}
