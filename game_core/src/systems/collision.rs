use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;
use tracing::debug;

/// Reflect the ball off the top and bottom edges.
///
/// The two edges are tested independently and the ball is not pushed back
/// inside, so a ball that is still past an edge next tick reflects again.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let mut hit = false;
        if ball.pos.y + config.ball_size > config.board_height {
            ball.vel.y = -ball.vel.y;
            hit = true;
        }
        if ball.pos.y + config.ball_size / 2 < 0 {
            ball.vel.y = -ball.vel.y;
            hit = true;
        }
        if hit {
            events.ball_hit_wall = true;
            debug!(x = ball.pos.x, y = ball.pos.y, vy = ball.vel.y, "ball hit wall");
        }
    }
}

/// Reflect the ball horizontally when it overlaps a paddle.
///
/// A paddle counts as hit when the ball's leading edge is inside the paddle's
/// x-span and `paddle.y < ball.y <= paddle.y + paddle_height`. Each paddle is
/// tested once per tick and the ball keeps its position.
pub fn bounce_off_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, glam::IVec2)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.pos))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle) in &paddles {
            let in_span = match side {
                Side::Left => ball.pos.x < paddle.x + config.paddle_width,
                Side::Right => ball.pos.x + config.ball_size > paddle.x,
            };
            let in_height = ball.pos.y > paddle.y && ball.pos.y <= paddle.y + config.paddle_height;

            if in_span && in_height {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
                debug!(?side, x = ball.pos.x, y = ball.pos.y, "ball hit paddle");
            }
        }
    }
}
