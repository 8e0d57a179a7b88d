use hecs::World;

use crate::{Config, Events, InputFrame, Paddle};

/// Latch the start key. Once started the game stays started.
pub fn apply_start(input: &InputFrame, started: &mut bool, events: &mut Events) {
    if input.start && !*started {
        *started = true;
        events.game_started = true;
    }
}

/// Move paddles by the held keys, keeping them on the board
pub fn move_paddles(world: &mut World, input: &InputFrame, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = input.paddle(paddle.side);

        if up && paddle.pos.y > 0 {
            paddle.pos.y -= config.paddle_speed;
        }
        if down && paddle.pos.y + config.paddle_height < config.board_height {
            paddle.pos.y += config.paddle_speed;
        }

        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Side};

    fn paddle_y(world: &World, side: Side) -> i32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.pos.y)
            .unwrap()
    }

    #[test]
    fn test_start_latches() {
        let mut started = false;
        let mut events = Events::new();

        apply_start(&InputFrame::new(), &mut started, &mut events);
        assert!(!started);
        assert!(!events.game_started);

        let pressed = InputFrame {
            start: true,
            ..InputFrame::new()
        };
        apply_start(&pressed, &mut started, &mut events);
        assert!(started);
        assert!(events.game_started, "Transition is reported once");

        events.clear();
        apply_start(&pressed, &mut started, &mut events);
        apply_start(&InputFrame::new(), &mut started, &mut events);
        assert!(started, "Releasing start never stops the game");
        assert!(!events.game_started, "No second transition");
    }

    #[test]
    fn test_paddles_move_independently() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);

        let input = InputFrame {
            left_up: true,
            right_down: true,
            ..InputFrame::new()
        };
        move_paddles(&mut world, &input, &config);

        assert_eq!(paddle_y(&world, Side::Left), 260);
        assert_eq!(paddle_y(&world, Side::Right), 270);
    }

    #[test]
    fn test_up_and_down_together_cancel() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);

        let input = InputFrame {
            left_up: true,
            left_down: true,
            ..InputFrame::new()
        };
        move_paddles(&mut world, &input, &config);

        assert_eq!(paddle_y(&world, Side::Left), 265);
    }

    #[test]
    fn test_paddle_stays_on_board() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);

        let input = InputFrame {
            left_up: true,
            right_down: true,
            ..InputFrame::new()
        };
        for _ in 0..500 {
            move_paddles(&mut world, &input, &config);
            let left = paddle_y(&world, Side::Left);
            let right = paddle_y(&world, Side::Right);
            assert!((0..=config.board_height - config.paddle_height).contains(&left));
            assert!((0..=config.board_height - config.paddle_height).contains(&right));
        }

        assert_eq!(paddle_y(&world, Side::Left), 0);
        assert_eq!(
            paddle_y(&world, Side::Right),
            config.board_height - config.paddle_height
        );
    }

    #[test]
    fn test_paddle_clamped_with_uneven_speed() {
        let config = Config {
            paddle_speed: 7,
            ..Config::new()
        };
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);

        let up = InputFrame {
            left_up: true,
            ..InputFrame::new()
        };
        for _ in 0..100 {
            move_paddles(&mut world, &up, &config);
        }
        assert_eq!(paddle_y(&world, Side::Left), 0);
    }
}
