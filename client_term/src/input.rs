//! Keyboard events from the terminal, translated into key codes

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{keys, Keyboard};
use tracing::{debug, error};

/// How long a freshly pressed key stays held when the terminal cannot report
/// releases. Longer than common auto-repeat delays (300-660 ms).
pub const FIRST_HOLD_WINDOW: Duration = Duration::from_millis(700);

/// Hold window once auto-repeat events are arriving for a key
pub const REPEAT_HOLD_WINDOW: Duration = Duration::from_millis(150);

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Map a terminal key to the game's virtual key code
pub fn key_code(code: KeyCode) -> Option<u32> {
    match code {
        KeyCode::Char(' ') => Some(keys::SPACE),
        KeyCode::Up => Some(keys::UP),
        KeyCode::Down => Some(keys::DOWN),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase() as u32),
        _ => None,
    }
}

/// Esc, `q` or Ctrl-C
pub fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    last_press: Instant,
    repeating: bool,
}

impl Held {
    fn deadline(&self) -> Instant {
        let window = if self.repeating {
            REPEAT_HOLD_WINDOW
        } else {
            FIRST_HOLD_WINDOW
        };
        self.last_press + window
    }
}

/// Treats a key as held until no press has been seen for its hold window
#[derive(Debug, Default)]
pub struct HoldLatch {
    held: HashMap<u32, Held>,
}

impl HoldLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A press for a key that is already held is an auto-repeat
    pub fn press(&mut self, code: u32, now: Instant) {
        let repeating = self.held.contains_key(&code);
        self.held.insert(
            code,
            Held {
                last_press: now,
                repeating,
            },
        );
    }

    pub fn release(&mut self, code: u32) {
        self.held.remove(&code);
    }

    /// Remove and return keys whose hold window has run out
    pub fn expire(&mut self, now: Instant) -> Vec<u32> {
        let mut expired: Vec<u32> = self
            .held
            .iter()
            .filter(|(_, held)| now >= held.deadline())
            .map(|(&code, _)| code)
            .collect();
        expired.sort_unstable();
        for code in &expired {
            self.held.remove(code);
        }
        expired
    }

    /// When the next key would expire
    pub fn next_deadline(&self) -> Option<Instant> {
        self.held.values().map(Held::deadline).min()
    }
}

/// Feeds terminal key events into the shared [`Keyboard`]
pub struct InputBridge {
    keyboard: Arc<Keyboard>,
    quit: Arc<AtomicBool>,
    latch: Option<HoldLatch>,
}

impl InputBridge {
    /// `use_latch` is for terminals that never send key-up events
    pub fn new(keyboard: Arc<Keyboard>, quit: Arc<AtomicBool>, use_latch: bool) -> Self {
        Self {
            keyboard,
            quit,
            latch: use_latch.then(HoldLatch::new),
        }
    }

    pub fn handle(&mut self, event: KeyEvent, now: Instant) {
        if event.kind == KeyEventKind::Press && is_quit(&event) {
            debug!("quit requested");
            self.keyboard.release_all();
            self.quit.store(true, Ordering::Relaxed);
            return;
        }

        let Some(code) = key_code(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.keyboard.set_key(code, true);
                if let Some(latch) = &mut self.latch {
                    latch.press(code, now);
                }
            }
            KeyEventKind::Release => {
                self.keyboard.set_key(code, false);
                if let Some(latch) = &mut self.latch {
                    latch.release(code);
                }
            }
        }
    }

    /// Release latched keys that timed out
    pub fn expire(&mut self, now: Instant) {
        if let Some(latch) = &mut self.latch {
            for code in latch.expire(now) {
                self.keyboard.set_key(code, false);
            }
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        self.latch
            .as_ref()
            .and_then(HoldLatch::next_deadline)
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(IDLE_POLL)
    }

    /// Read events until quit is requested
    pub fn run(mut self) -> io::Result<()> {
        while !self.quit.load(Ordering::Relaxed) {
            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    self.handle(key, Instant::now());
                }
            }
            self.expire(Instant::now());
        }
        Ok(())
    }
}

/// Run the bridge on its own thread. A read failure requests quit.
pub fn spawn(bridge: InputBridge) -> io::Result<JoinHandle<()>> {
    let quit = Arc::clone(&bridge.quit);
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            if let Err(err) = bridge.run() {
                error!(%err, "terminal input failed");
                quit.store(true, Ordering::Relaxed);
            }
        })
}
