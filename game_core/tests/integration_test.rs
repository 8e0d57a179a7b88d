use game_core::*;
use glam::IVec2;

fn start() -> InputFrame {
    InputFrame {
        start: true,
        ..InputFrame::new()
    }
}

fn idle() -> InputFrame {
    InputFrame::new()
}

#[test]
fn test_ball_frozen_until_start() {
    let mut game = Game::default();
    let input = InputFrame {
        left_down: true,
        right_up: true,
        ..InputFrame::new()
    };

    for _ in 0..300 {
        game.update(&input);
        assert_eq!(game.ball().pos, IVec2::new(392, 292));
        assert_eq!(game.score(), Score::new());
        assert!(!game.started());
    }

    // Paddles still move before the game starts
    assert_eq!(game.paddle(Side::Left).pos.y, 530);
    assert_eq!(game.paddle(Side::Right).pos.y, 0);
}

#[test]
fn test_first_tick_after_start() {
    let mut game = Game::default();
    game.update(&start());

    assert!(game.started());
    assert_eq!(game.ball().pos, IVec2::new(396, 296));
    assert_eq!(game.ball().vel, IVec2::new(4, 4));
}

#[test]
fn test_start_is_never_undone() {
    let mut game = Game::default();
    game.update(&start());
    for _ in 0..10 {
        game.update(&idle());
    }

    assert!(game.started());
    assert_eq!(game.ball().pos, IVec2::new(392 + 44, 292 + 44));
}

#[test]
fn test_ball_bounces_off_bottom() {
    let mut game = Game::default();
    game.update(&start());

    let mut ticks = 1;
    while game.ball().pos.y + 15 < 600 {
        game.update(&idle());
        ticks += 1;
        assert!(ticks < 100, "ball never reached the bottom");
    }

    // y = 292 + 74 * 4 = 588, bottom = 603
    assert_eq!(ticks, 74);
    assert_eq!(game.ball().pos, IVec2::new(688, 588));
    assert_eq!(game.ball().vel, IVec2::new(4, -4));
    assert!(game.events().ball_hit_wall);

    game.update(&idle());
    assert_eq!(game.ball().pos.y, 584);
    assert_eq!(game.ball().vel.y, -4, "Back in bounds, no second flip");
}

#[test]
fn test_ball_out_of_bounds_flips_back_next_tick() {
    let mut game = Game::default();
    game.update(&start());
    game.place_ball(IVec2::new(400, 590), IVec2::new(4, 4));

    game.update(&idle());
    assert_eq!(game.ball().pos.y, 594);
    assert_eq!(game.ball().vel.y, -4);

    game.update(&idle());
    assert_eq!(game.ball().pos.y, 590);
    assert_eq!(game.ball().vel.y, 4, "Still past the bottom, flips again");
}

#[test]
fn test_right_player_scores() {
    let mut game = Game::default();
    game.update(&start());
    game.place_ball(IVec2::new(2, 100), IVec2::new(-4, 0));

    game.update(&idle());

    assert_eq!(game.score(), Score { left: 0, right: 1 });
    assert_eq!(game.ball().pos, IVec2::new(392, 292));
    assert_eq!(game.ball().vel, IVec2::new(4, 0));
    assert!(game.events().right_scored);
}

#[test]
fn test_left_player_scores() {
    let mut game = Game::default();
    game.update(&start());
    game.place_ball(IVec2::new(790, 100), IVec2::new(4, 4));

    // 794 + 7 > 800
    game.update(&idle());

    assert_eq!(game.score(), Score { left: 1, right: 0 });
    assert_eq!(game.ball().pos, IVec2::new(392, 292));
    assert_eq!(game.ball().vel, IVec2::new(-4, 4));
    assert!(game.events().left_scored);
}

#[test]
fn test_paddle_returns_ball() {
    let mut game = Game::default();
    game.update(&start());
    // Lands at (14, 300), inside the left paddle at y 265..=335
    game.place_ball(IVec2::new(18, 300), IVec2::new(-4, 0));

    game.update(&idle());

    assert_eq!(game.ball().pos, IVec2::new(14, 300));
    assert_eq!(game.ball().vel, IVec2::new(4, 0));
    assert!(game.events().ball_hit_paddle);
    assert_eq!(game.score(), Score::new());

    game.update(&idle());
    assert_eq!(game.ball().pos, IVec2::new(18, 300), "Ball leaves the paddle");
    assert_eq!(game.ball().vel, IVec2::new(4, 0));
}

#[test]
fn test_missed_ball_scores() {
    let mut game = Game::default();
    game.update(&start());
    // Left paddle spans y 265..=335; ball passes below it
    game.place_ball(IVec2::new(18, 400), IVec2::new(-4, 0));

    for _ in 0..5 {
        game.update(&idle());
    }

    assert_eq!(game.score().right, 1);
}

#[test]
fn test_paddles_clamped_while_playing() {
    let mut game = Game::default();
    game.update(&start());

    let input = InputFrame {
        left_up: true,
        right_down: true,
        ..InputFrame::new()
    };
    for _ in 0..200 {
        game.update(&input);
        for side in [Side::Left, Side::Right] {
            let y = game.paddle(side).pos.y;
            assert!((0..=530).contains(&y), "{side:?} paddle at {y}");
        }
    }
}

#[test]
fn test_keyboard_drives_game() {
    let keyboard = Keyboard::new();
    let bindings = Bindings::default();
    let mut game = Game::default();

    keyboard.set_key(keys::SPACE, true);
    keyboard.set_key(keys::W, true);
    game.update(&bindings.sample(&keyboard));
    keyboard.set_key(keys::SPACE, false);
    keyboard.set_key(keys::W, false);
    game.update(&bindings.sample(&keyboard));

    assert!(game.started());
    assert_eq!(game.paddle(Side::Left).pos.y, 260);
    assert_eq!(game.ball().pos, IVec2::new(400, 300));
}

#[test]
fn test_long_rally_keeps_invariants() {
    let mut game = Game::default();
    game.update(&start());

    let mut last = game.score();
    for _ in 0..10_000 {
        game.update(&idle());
        let vel = game.ball().vel;
        assert_eq!(vel.x.abs(), 4);
        assert_eq!(vel.y.abs(), 4);

        let score = game.score();
        assert!(score.left >= last.left && score.right >= last.right);
        assert!(score.left + score.right <= last.left + last.right + 1);
        last = score;
    }
    assert!(last.left + last.right > 0, "Idle paddles concede points");
}
