//! Two-player Pong in the terminal
//!
//! Left paddle: W / S. Right paddle: Up / Down. Space serves.
//! Esc, `q` or Ctrl-C quits.

mod canvas;
mod input;
mod terminal;

use std::io;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::{draw_frame, Bindings, Config, Game, Keyboard, LoopHandler, Ticker};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use canvas::CellCanvas;
use input::InputBridge;
use terminal::Terminal;

const TITLE: &str = "Pong";

/// Glue between the timing loop, the game and the terminal
struct TerminalPong {
    game: Game,
    keyboard: Arc<Keyboard>,
    bindings: Bindings,
    quit: Arc<AtomicBool>,
    terminal: Terminal,
    canvas: CellCanvas,
}

impl LoopHandler for TerminalPong {
    fn update(&mut self) {
        let input = self.bindings.sample(&self.keyboard);
        self.game.update(&input);
    }

    fn render(&mut self) {
        if self.quit.load(Ordering::Relaxed) {
            let score = self.game.score();
            self.terminal.restore();
            info!(left = score.left, right = score.right, "quit");
            process::exit(0);
        }

        draw_frame(&self.game.frame(), self.game.config(), &mut self.canvas);
        if let Err(err) = self.terminal.present(&self.canvas) {
            warn!(%err, "failed to draw frame");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    terminal::install_panic_hook();

    let config = Config::default();
    let terminal = Terminal::enter(TITLE)?;
    let canvas = CellCanvas::new(terminal.cols(), terminal.rows(), &config);

    let keyboard = Arc::new(Keyboard::new());
    let quit = Arc::new(AtomicBool::new(false));
    let bridge = InputBridge::new(
        Arc::clone(&keyboard),
        Arc::clone(&quit),
        !terminal.reports_releases(),
    );
    input::spawn(bridge).context("failed to start input thread")?;

    info!(
        cols = canvas.cols(),
        rows = canvas.rows(),
        key_release = terminal.reports_releases(),
        "starting"
    );

    let mut ticker = Ticker::new(&config);
    let mut pong = TerminalPong {
        game: Game::new(config),
        keyboard,
        bindings: Bindings::default(),
        quit,
        terminal,
        canvas,
    };
    ticker.run(&mut pong)
}
