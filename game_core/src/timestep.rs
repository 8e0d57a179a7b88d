//! Fixed-rate driver for simulation ticks and render frames
//!
//! Elapsed wall-clock time is turned into fractional "debt" for two
//! independent rates. Each loop iteration pays at most one tick and one frame,
//! so a slow host drifts behind instead of spiralling into catch-up work.

use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::Config;

/// What a loop iteration owes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Due {
    pub update: bool,
    pub render: bool,
}

/// Accumulator pair for the update and render rates
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    updates_per_second: f64,
    frames_per_second: f64,
    update_debt: f64,
    render_debt: f64,
}

impl FixedTimestep {
    pub fn new(updates_per_second: f64, frames_per_second: f64) -> Self {
        Self {
            updates_per_second,
            frames_per_second,
            update_debt: 0.0,
            render_debt: 0.0,
        }
    }

    /// Account for `elapsed` time and take at most one tick and one frame
    pub fn advance(&mut self, elapsed: Duration) -> Due {
        let secs = elapsed.as_secs_f64();
        self.update_debt += secs * self.updates_per_second;
        self.render_debt += secs * self.frames_per_second;

        let mut due = Due::default();
        if self.update_debt >= 1.0 {
            self.update_debt -= 1.0;
            due.update = true;
        }
        if self.render_debt >= 1.0 {
            self.render_debt -= 1.0;
            due.render = true;
        }
        due
    }

    /// Ticks still owed (fractional)
    pub fn update_debt(&self) -> f64 {
        self.update_debt
    }

    /// Frames still owed (fractional)
    pub fn render_debt(&self) -> f64 {
        self.render_debt
    }
}

/// Measured ticks and frames per one-second window
#[derive(Debug, Clone)]
pub struct RateCounter {
    ticks: u32,
    frames: u32,
    window_start: Instant,
}

impl RateCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn new(now: Instant) -> Self {
        Self {
            ticks: 0,
            frames: 0,
            window_start: now,
        }
    }

    pub fn record(&mut self, due: Due) {
        self.ticks += due.update as u32;
        self.frames += due.render as u32;
    }

    /// Returns `(ticks, frames)` once the current window has passed, then
    /// starts the next window exactly one second later.
    pub fn poll(&mut self, now: Instant) -> Option<(u32, u32)> {
        if now.saturating_duration_since(self.window_start) <= Self::WINDOW {
            return None;
        }
        let rates = (self.ticks, self.frames);
        self.ticks = 0;
        self.frames = 0;
        self.window_start += Self::WINDOW;
        Some(rates)
    }
}

/// Work performed by the loop
pub trait LoopHandler {
    /// Advance the simulation by one tick
    fn update(&mut self);
    /// Draw the current state
    fn render(&mut self);
}

/// The game loop: owns the timing state and calls into a [`LoopHandler`]
pub struct Ticker {
    timestep: FixedTimestep,
    counter: RateCounter,
    last: Instant,
    idle: Duration,
}

impl Ticker {
    pub fn new(config: &Config) -> Self {
        Self::starting_at(config, Instant::now())
    }

    pub fn starting_at(config: &Config, now: Instant) -> Self {
        Self {
            timestep: FixedTimestep::new(config.updates_per_second, config.frames_per_second),
            counter: RateCounter::new(now),
            last: now,
            idle: Duration::from_millis(config.idle_sleep_ms),
        }
    }

    /// One loop iteration at `now`: update and/or render if owed
    pub fn iterate<H: LoopHandler>(&mut self, now: Instant, handler: &mut H) -> Due {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;

        let due = self.timestep.advance(elapsed);
        if due.update {
            handler.update();
        }
        if due.render {
            handler.render();
        }

        self.counter.record(due);
        if let Some((ups, fps)) = self.counter.poll(now) {
            info!(ups, fps, "loop rate");
        }
        due
    }

    /// Run until the process exits.
    ///
    /// Sleeps briefly between iterations to give the CPU back; the sleep is a
    /// courtesy and the rates do not depend on it.
    pub fn run<H: LoopHandler>(&mut self, handler: &mut H) -> ! {
        loop {
            self.iterate(Instant::now(), handler);
            thread::sleep(self.idle);
        }
    }
}
