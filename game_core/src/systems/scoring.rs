use crate::{Ball, Config, Events, Score};
use hecs::World;
use tracing::debug;

/// Award a point when the ball leaves the board on the left or right.
///
/// The right edge is crossed when the ball's centre passes it, the left edge
/// when the ball's left side does. The scorer's ball comes back from the
/// start position heading the other way.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let start = config.ball_start();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + config.ball_size / 2 > config.board_width {
            score.increment_left();
            events.left_scored = true;
            ball.vel.x = -ball.vel.x;
            ball.reset(start);
            debug!(left = score.left, right = score.right, "left player scored");
        }
        if ball.pos.x < 0 {
            score.increment_right();
            events.right_scored = true;
            ball.vel.x = -ball.vel.x;
            ball.reset(start);
            debug!(left = score.left, right = score.right, "right player scored");
        }
    }
}
