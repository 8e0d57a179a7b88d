//! Terminal session: raw mode, alternate screen, presenting cell buffers

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, queue};
use game_core::Color;

use crate::canvas::CellCanvas;

/// Set while key-release reporting is pushed, so both the guard and the panic
/// hook pop it at most once and only if it was pushed
static ENHANCEMENT_PUSHED: AtomicBool = AtomicBool::new(false);

fn mark_enhancement_pushed() {
    ENHANCEMENT_PUSHED.store(true, Ordering::SeqCst);
}

/// True exactly once after a push
fn take_enhancement_pushed() -> bool {
    ENHANCEMENT_PUSHED.swap(false, Ordering::SeqCst)
}

fn pop_enhancement() {
    if take_enhancement_pushed() {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
}

/// Owns the terminal while the game runs. Dropping it restores the terminal.
pub struct Terminal {
    out: Stdout,
    cols: u16,
    rows: u16,
    reports_releases: bool,
    active: bool,
}

impl Terminal {
    pub fn enter(title: &str) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let (cols, rows) = terminal::size().context("failed to read terminal size")?;
        let mut term = Self {
            out: io::stdout(),
            cols,
            rows,
            reports_releases: false,
            active: true,
        };

        execute!(term.out, EnterAlternateScreen, Hide, SetTitle(title))
            .context("failed to enter alternate screen")?;

        // Without release events the input side falls back to a hold latch
        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                term.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to enable key release reporting")?;
            mark_enhancement_pushed();
            term.reports_releases = true;
        }

        Ok(term)
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Whether key-up events will be delivered
    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    /// Write the canvas to the screen in one flush
    pub fn present(&mut self, canvas: &CellCanvas) -> io::Result<()> {
        let mut out = self.out.lock();
        let mut colors: Option<(Color, Color)> = None;

        for (row, cells) in canvas.lines().enumerate() {
            queue!(out, MoveTo(0, row as u16))?;
            for cell in cells {
                if colors != Some((cell.fg, cell.bg)) {
                    queue!(
                        out,
                        SetForegroundColor(term_color(cell.fg)),
                        SetBackgroundColor(term_color(cell.bg))
                    )?;
                    colors = Some((cell.fg, cell.bg));
                }
                queue!(out, Print(cell.ch))?;
            }
        }

        queue!(out, ResetColor)?;
        out.flush()
    }

    /// Put the terminal back the way it was. Safe to call more than once.
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        pop_enhancement();
        reset_terminal();
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.restore();
    }
}

fn reset_terminal() {
    let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        pop_enhancement();
        reset_terminal();
        previous(info);
    }));
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
