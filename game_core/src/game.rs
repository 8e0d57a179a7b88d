use glam::IVec2;
use hecs::{Component, Entity, World};
use tracing::info;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, Frame, InputFrame, Paddle, Rect,
    Score, Side,
};

/// A whole match: both paddles, the ball, the score and the start latch
pub struct Game {
    world: World,
    config: Config,
    score: Score,
    started: bool,
    events: Events,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let left_paddle = create_paddle(&mut world, &config, Side::Left);
        let right_paddle = create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(
            &mut world,
            config.ball_start(),
            config.ball_start_velocity(),
        );

        Self {
            world,
            config,
            score: Score::new(),
            started: false,
            events: Events::new(),
            left_paddle,
            right_paddle,
            ball,
        }
    }

    /// Run one tick with the keys held during it
    pub fn update(&mut self, input: &InputFrame) {
        step(
            &mut self.world,
            input,
            &self.config,
            &mut self.score,
            &mut self.started,
            &mut self.events,
        );

        if self.events.game_started {
            info!("game started");
        }
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> Frame {
        let size = IVec2::new(self.config.paddle_width, self.config.paddle_height);
        let left = self.paddle(Side::Left).pos;
        let right = self.paddle(Side::Right).pos;
        let ball = self.ball().pos;

        Frame {
            left_paddle: Rect::new(left.x, left.y, size.x, size.y),
            right_paddle: Rect::new(right.x, right.y, size.x, size.y),
            ball: Rect::new(ball.x, ball.y, self.config.ball_size, self.config.ball_size),
            score: self.score,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// What happened during the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Ball {
        self.component(self.ball)
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        match side {
            Side::Left => self.component(self.left_paddle),
            Side::Right => self.component(self.right_paddle),
        }
    }

    /// Move the ball and set its velocity directly.
    ///
    /// Hook for hosts and tests that need a particular serve; normal play
    /// only moves the ball through [`Game::update`].
    pub fn place_ball(&mut self, pos: IVec2, vel: IVec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            *ball = Ball::new(pos, vel);
        }
    }

    fn component<T: Component + Copy>(&self, entity: Entity) -> T {
        // Game never despawns the entities it spawned
        *self
            .world
            .get::<&T>(entity)
            .expect("game entity missing component")
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
